//! # Assistant Bot Architecture
//!
//! An interactive assistant that keeps contact names and phone numbers in
//! memory, plus two small numeric utilities. The library holds every piece of
//! behaviour; the binary only reads lines, prints results and picks colors.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - clap arguments, the read/print loop, terminal colors     │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Parses a line (parser.rs) and routes it to a handler     │
//! │  - Recovers anticipated user mistakes into messages         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One handler per keyword, returns `Result<CmdResult>`     │
//! │  - Boxes for `all` and `help` come from render.rs           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ContactStore trait, InMemoryStore                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Handlers report user mistakes as [`error::BotError`] variants. Three of
//! them (missing arguments, unknown contact, nothing to parse) are turned into
//! friendly text by [`commands::recover`]. A malformed phone never becomes an
//! error at all: the handler answers with the format message directly.
//! Everything else propagates and ends the session.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade the dispatch loop talks to
//! - [`parser`]: line → command keyword + arguments
//! - [`commands`]: handlers and the error-translation wrapper
//! - [`store`]: storage abstraction and the in-memory store
//! - [`model`]: `Contact` and the validated `Phone`
//! - [`render`]: bordered boxes for the contacts list and help table
//! - [`config`]: `config.json` loading
//! - [`logging`]: tracing subscriber setup
//! - [`exercises`]: Fibonacci and number extraction

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod exercises;
pub mod logging;
pub mod model;
pub mod parser;
pub mod render;
pub mod store;
