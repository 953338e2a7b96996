//! # Command Layer
//!
//! One module per bot keyword. Every handler takes the store and the argument
//! tokens, returns a [`CmdResult`] and never touches stdout.
//!
//! Handlers signal the three anticipated user mistakes through `BotError`
//! variants. [`recover`] turns exactly those into friendly messages, anything
//! else keeps propagating up to the dispatch loop.

use crate::error::{BotError, Result};
use tracing::debug;

pub mod add;
pub mod change;
pub mod greet;
pub mod help;
pub mod helpers;
pub mod list;
pub mod phone;

pub const MISSING_ARGUMENTS_MESSAGE: &str =
    "Missing arguments. Please provide both name and phone number.";
pub const CONTACT_NOT_FOUND_MESSAGE: &str =
    "Contact not found. Please check the name and try again.";
pub const INSUFFICIENT_ARGUMENTS_MESSAGE: &str =
    "Insufficient arguments. Please provide the required information.";
pub const INVALID_PHONE_MESSAGE: &str =
    "Invalid phone number format. Please try again starting with +380.";
pub const INVALID_COMMAND_MESSAGE: &str = "Invalid command.";
pub const GOODBYE_MESSAGE: &str = "Goodbye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_message(message: CmdMessage) -> Self {
        Self {
            messages: vec![message],
        }
    }

    /// All message contents joined by newlines, as the user sees them.
    pub fn text(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Converts recoverable user mistakes into a message-carrying result.
///
/// Only `MissingArguments`, `ContactNotFound` and `InsufficientArguments` are
/// recovered. Every other error is returned unchanged.
pub fn recover(result: Result<CmdResult>) -> Result<CmdResult> {
    let message = match result {
        Ok(result) => return Ok(result),
        Err(BotError::MissingArguments) => MISSING_ARGUMENTS_MESSAGE,
        Err(BotError::ContactNotFound(name)) => {
            debug!(%name, "lookup for unknown contact");
            CONTACT_NOT_FOUND_MESSAGE
        }
        Err(BotError::InsufficientArguments) => INSUFFICIENT_ARGUMENTS_MESSAGE,
        Err(other) => return Err(other),
    };
    debug!(reply = message, "recovered user error");
    Ok(CmdResult::with_message(CmdMessage::error(message)))
}
