use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    /// Wrong number of arguments for a two-argument command.
    #[error("Missing arguments. Please provide both name and phone number.")]
    MissingArguments,

    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// Nothing to take a command keyword from.
    #[error("Insufficient arguments. Please provide the required information.")]
    InsufficientArguments,

    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    #[error("Fibonacci number {0} does not fit in 128 bits")]
    Overflow(u64),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, BotError>;
