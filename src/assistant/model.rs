use crate::error::{BotError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+380[0-9]{9}$").expect("phone pattern is a valid regex"));

/// A phone number in the `+380XXXXXXXXX` format.
///
/// The only way to build one is through [`Phone::parse`] (or `FromStr`), so every
/// `Phone` held by a store is known to match the pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn parse(raw: &str) -> Result<Self> {
        if PHONE_PATTERN.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(BotError::InvalidPhone(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Phone {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self> {
        Phone::parse(s)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone: Phone,
}

impl Contact {
    pub fn new(name: impl Into<String>, phone: Phone) -> Self {
        Self {
            name: name.into(),
            phone,
        }
    }

    /// The sentence used by both `phone` and the contacts box.
    pub fn describe(&self) -> String {
        format!("{}'s phone number is {}.", self.name, self.phone)
    }
}
