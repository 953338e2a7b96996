use crate::commands::{CmdMessage, CmdResult};

pub fn run() -> CmdResult {
    CmdResult::with_message(CmdMessage::info("How can I help you?"))
}
