use assistant_bot::commands::{CmdMessage, MessageLevel};
use colored::Colorize;
use std::io::{self, Write};

pub(super) fn write_messages<W: Write>(
    out: &mut W,
    messages: &[CmdMessage],
    color: bool,
) -> io::Result<()> {
    for message in messages {
        if !color {
            writeln!(out, "{}", message.content)?;
            continue;
        }
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content)?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}
