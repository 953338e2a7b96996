//! # Rendering
//!
//! Pure functions that lay out the contacts list and the help table as bordered
//! boxes. Nothing here prints; the dispatch loop decides where text goes.
//!
//! Widths are measured in display columns (via `unicode-width`), so a name with
//! wide characters still lines up with the right border. Content wider than the
//! box is left as-is rather than truncated.
//!
//! ```text
//! ╔════════════════════════╗
//! ║   CONTACTS LIST (1 …)  ║
//! ╟────────────────────────╢
//! ║ Anna's phone number …  ║
//! ╚════════════════════════╝
//! ```

use crate::commands::help::CommandSpec;
use crate::model::Contact;
use unicode_width::UnicodeWidthStr;

pub const DEFAULT_BOX_WIDTH: usize = 120;
pub const COMMAND_COLUMN_WIDTH: usize = 25;
pub const EXAMPLE_COLUMN_WIDTH: usize = 30;

pub fn render_contacts(contacts: &[Contact], width: usize) -> String {
    let title = format!("CONTACTS LIST ({} Contacts)", contacts.len());

    let mut lines = vec![
        top_border(width),
        framed(&center(&title, width)),
        separator(width),
    ];
    for contact in contacts {
        let info = pad_right(&contact.describe(), width.saturating_sub(1));
        lines.push(format!("║ {}║", info));
    }
    lines.push(bottom_border(width));

    lines.join("\n")
}

pub fn render_help(registry: &[CommandSpec], width: usize) -> String {
    let mut lines = vec![
        top_border(width),
        framed(&center("ASSISTANT BOT'S HELP", width)),
        separator(width),
        framed(&pad_right(
            &help_row("Command", "Example", "Description"),
            width,
        )),
        separator(width),
    ];
    for spec in registry {
        let row = help_row(spec.signature, spec.example, spec.description);
        lines.push(framed(&pad_right(&row, width)));
    }
    lines.push(bottom_border(width));

    lines.join("\n")
}

fn help_row(command: &str, example: &str, description: &str) -> String {
    format!(
        "{}{}{}",
        pad_right(command, COMMAND_COLUMN_WIDTH),
        pad_right(example, EXAMPLE_COLUMN_WIDTH),
        description
    )
}

fn top_border(width: usize) -> String {
    format!("╔{}╗", "═".repeat(width))
}

fn separator(width: usize) -> String {
    format!("╟{}╢", "─".repeat(width))
}

fn bottom_border(width: usize) -> String {
    format!("╚{}╝", "═".repeat(width))
}

fn framed(inner: &str) -> String {
    format!("║{}║", inner)
}

/// Left-justifies `s` to `width` display columns.
fn pad_right(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

/// Centers `s` in `width` display columns; odd slack goes to the right.
fn center(s: &str, width: usize) -> String {
    let slack = width.saturating_sub(s.width());
    let left = slack / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(slack - left))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::help::COMMAND_REGISTRY;
    use crate::model::Phone;

    fn contact(name: &str, phone: &str) -> Contact {
        Contact::new(name, Phone::parse(phone).unwrap())
    }

    fn assert_box_shape(rendered: &str, width: usize) {
        for line in rendered.lines() {
            assert_eq!(line.width(), width + 2, "misaligned line: {line:?}");
        }
    }

    #[test]
    fn empty_contacts_box_has_no_body_rows() {
        let rendered = render_contacts(&[], DEFAULT_BOX_WIDTH);
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with('╔') && lines[0].ends_with('╗'));
        assert!(lines[1].contains("CONTACTS LIST (0 Contacts)"));
        assert!(lines[2].starts_with('╟') && lines[2].ends_with('╢'));
        assert!(lines[3].starts_with('╚') && lines[3].ends_with('╝'));
        assert_box_shape(&rendered, DEFAULT_BOX_WIDTH);
    }

    #[test]
    fn title_is_centered() {
        let rendered = render_contacts(&[], DEFAULT_BOX_WIDTH);
        let title_line = rendered.lines().nth(1).unwrap();
        let inner = title_line.trim_start_matches('║').trim_end_matches('║');
        let leading = inner.len() - inner.trim_start().len();
        let trailing = inner.len() - inner.trim_end().len();
        assert_eq!(leading, 47);
        assert_eq!(trailing, 47);
    }

    #[test]
    fn contacts_rows_follow_insertion_order() {
        let contacts = [
            contact("Anna", "+380633727223"),
            contact("Bob", "+380500000001"),
        ];
        let rendered = render_contacts(&contacts, DEFAULT_BOX_WIDTH);
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[1].contains("(2 Contacts)"));
        assert!(lines[3].starts_with("║ Anna's phone number is +380633727223."));
        assert!(lines[4].starts_with("║ Bob's phone number is +380500000001."));
        assert_box_shape(&rendered, DEFAULT_BOX_WIDTH);
    }

    #[test]
    fn wide_names_keep_border_aligned() {
        let contacts = [contact("日本語", "+380633727223")];
        let rendered = render_contacts(&contacts, 60);
        assert_box_shape(&rendered, 60);
    }

    #[test]
    fn help_lists_every_registry_entry() {
        let rendered = render_help(COMMAND_REGISTRY, DEFAULT_BOX_WIDTH);
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines.len(), 6 + COMMAND_REGISTRY.len());
        assert!(lines[1].contains("ASSISTANT BOT'S HELP"));
        assert!(lines[3].starts_with("║Command                  Example"));
        for spec in COMMAND_REGISTRY {
            assert!(rendered.contains(spec.example));
            assert!(rendered.contains(spec.description));
        }
        assert_box_shape(&rendered, DEFAULT_BOX_WIDTH);
    }

    #[test]
    fn help_columns_are_fixed_width() {
        let rendered = render_help(COMMAND_REGISTRY, DEFAULT_BOX_WIDTH);
        let add_row = rendered
            .lines()
            .find(|l| l.contains("add Anna"))
            .unwrap();
        let inner = add_row.trim_start_matches('║');
        assert_eq!(inner.find("add Anna"), Some(COMMAND_COLUMN_WIDTH));
        assert_eq!(
            inner.find("Add new contact"),
            Some(COMMAND_COLUMN_WIDTH + EXAMPLE_COLUMN_WIDTH)
        );
    }

    #[test]
    fn center_puts_odd_slack_on_the_right() {
        assert_eq!(center("ab", 5), " ab  ");
        assert_eq!(center("toolong", 3), "toolong");
    }
}
