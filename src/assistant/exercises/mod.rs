//! Standalone utilities exposed as one-shot subcommands of the binary.
//!
//! - [`fibonacci`]: memoized Fibonacci numbers and a lazy Fibonacci sequence
//! - [`numbers`]: pulls numeric tokens out of free text and sums them

pub mod fibonacci;
pub mod numbers;
