//! # API Facade
//!
//! The single entry point the interactive loop talks to. It owns the contact
//! store, parses a raw line, routes the command to its handler and runs the
//! result through [`commands::recover`].
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O**: no stdin, stdout or terminal styling; see `cli/` in the binary
//!
//! `AssistantApi<S: ContactStore>` is generic over the store so tests can
//! inspect the store after a sequence of dispatched lines.

use crate::commands::{self, CmdMessage, CmdResult, GOODBYE_MESSAGE, INVALID_COMMAND_MESSAGE};
use crate::config::BotConfig;
use crate::error::Result;
use crate::parser::{parse_input, Command};
use crate::store::ContactStore;
use tracing::debug;

/// What the loop should do after a line has been handled.
#[derive(Debug)]
pub enum Dispatch {
    /// Print the result and read another line.
    Continue(CmdResult),
    /// Print the result and leave the loop.
    Stop(CmdResult),
}

impl Dispatch {
    pub fn result(&self) -> &CmdResult {
        match self {
            Dispatch::Continue(result) | Dispatch::Stop(result) => result,
        }
    }

    pub fn is_stop(&self) -> bool {
        matches!(self, Dispatch::Stop(_))
    }
}

pub struct AssistantApi<S: ContactStore> {
    store: S,
    config: BotConfig,
}

impl<S: ContactStore> AssistantApi<S> {
    pub fn new(store: S, config: BotConfig) -> Self {
        Self { store, config }
    }

    pub fn hello(&self) -> CmdResult {
        commands::greet::run()
    }

    pub fn add_contact(&mut self, args: &[String]) -> Result<CmdResult> {
        commands::recover(commands::add::run(&mut self.store, args))
    }

    pub fn change_contact(&mut self, args: &[String]) -> Result<CmdResult> {
        commands::recover(commands::change::run(&mut self.store, args))
    }

    pub fn show_phone(&self, args: &[String]) -> Result<CmdResult> {
        commands::recover(commands::phone::run(&self.store, args))
    }

    pub fn all_contacts(&self) -> Result<CmdResult> {
        commands::recover(commands::list::run(&self.store, self.config.box_width))
    }

    pub fn help(&self) -> CmdResult {
        commands::help::run(self.config.box_width)
    }

    /// Parses and executes one line of user input.
    ///
    /// Recoverable user mistakes come back as `Ok` with an error message;
    /// an `Err` means the session cannot continue.
    pub fn dispatch(&mut self, line: &str) -> Result<Dispatch> {
        let parsed = match parse_input(line) {
            Ok(parsed) => parsed,
            Err(e) => return commands::recover(Err(e)).map(Dispatch::Continue),
        };
        debug!(command = %parsed.command, args = parsed.args.len(), "dispatching");

        let result = match &parsed.command {
            Command::Close | Command::Exit => {
                CmdResult::with_message(CmdMessage::info(GOODBYE_MESSAGE))
            }
            Command::Hello => self.hello(),
            Command::Add => self.add_contact(&parsed.args)?,
            Command::Change => self.change_contact(&parsed.args)?,
            Command::Phone => self.show_phone(&parsed.args)?,
            Command::All => self.all_contacts()?,
            Command::Help => self.help(),
            Command::Unknown(keyword) => {
                debug!(%keyword, "unknown command");
                CmdResult::with_message(CmdMessage::error(INVALID_COMMAND_MESSAGE))
            }
        };

        if parsed.command.is_stop() {
            Ok(Dispatch::Stop(result))
        } else {
            Ok(Dispatch::Continue(result))
        }
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
