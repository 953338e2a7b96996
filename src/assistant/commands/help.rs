use crate::commands::{CmdMessage, CmdResult};
use crate::render::render_help;

/// One row of the help table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub signature: &'static str,
    pub example: &'static str,
    pub description: &'static str,
}

pub const COMMAND_REGISTRY: &[CommandSpec] = &[
    CommandSpec {
        signature: "hello",
        example: "hello",
        description: "Ask 'How can I help you?'",
    },
    CommandSpec {
        signature: "add <NAME> <PHONE>",
        example: "add Anna +380633727223",
        description: "Add new contact to your contacts list.",
    },
    CommandSpec {
        signature: "change <NAME> <PHONE>",
        example: "change Daniil +380637927223",
        description: "Change a specified contact's phone number.",
    },
    CommandSpec {
        signature: "phone <NAME>",
        example: "phone John",
        description: "Return a specified contact's phone number.",
    },
    CommandSpec {
        signature: "all",
        example: "all",
        description: "Return all contacts as a box.",
    },
    CommandSpec {
        signature: "help",
        example: "help",
        description: "Return help for commands as a box.",
    },
];

pub fn run(width: usize) -> CmdResult {
    CmdResult::with_message(CmdMessage::info(render_help(COMMAND_REGISTRY, width)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_input, Command};
    use crate::render::DEFAULT_BOX_WIDTH;

    #[test]
    fn every_example_parses_to_a_known_command() {
        for spec in COMMAND_REGISTRY {
            let parsed = parse_input(spec.example).unwrap();
            assert!(
                !matches!(parsed.command, Command::Unknown(_)),
                "{} is not dispatchable",
                spec.example
            );
        }
    }

    #[test]
    fn renders_help_box() {
        let text = run(DEFAULT_BOX_WIDTH).text();
        assert!(text.contains("ASSISTANT BOT'S HELP"));
        assert!(text.contains("change Daniil +380637927223"));
    }
}
