use crate::error::{BotError, Result};

/// Unpacks exactly `<name> <phone>`.
pub fn name_and_phone(args: &[String]) -> Result<(&str, &str)> {
    match args {
        [name, phone] => Ok((name.as_str(), phone.as_str())),
        _ => Err(BotError::MissingArguments),
    }
}

/// Every argument token glued together, without separators.
pub fn joined_name(args: &[String]) -> String {
    args.concat()
}
