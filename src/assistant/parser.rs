//! Turns a raw input line into a command keyword plus its argument tokens.

use crate::error::{BotError, Result};
use std::fmt;

/// Keywords the dispatch loop recognises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    Help,
    Close,
    Exit,
    Unknown(String),
}

impl Command {
    pub fn is_stop(&self) -> bool {
        matches!(self, Command::Close | Command::Exit)
    }

    /// Maps an already lower-cased keyword to its command.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            "help" => Command::Help,
            "close" => Command::Close,
            "exit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Command::Hello => "hello",
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::All => "all",
            Command::Help => "help",
            Command::Close => "close",
            Command::Exit => "exit",
            Command::Unknown(other) => other,
        };
        f.write_str(keyword)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub command: Command,
    pub args: Vec<String>,
}

/// Splits `line` on whitespace runs. The first token is lower-cased into the
/// command keyword, the rest are kept verbatim as arguments.
pub fn parse_input(line: &str) -> Result<ParsedInput> {
    let mut tokens = line.split_whitespace();
    let keyword = tokens
        .next()
        .ok_or(BotError::InsufficientArguments)?
        .trim()
        .to_lowercase();

    Ok(ParsedInput {
        command: Command::from_keyword(&keyword),
        args: tokens.map(str::to_string).collect(),
    })
}
