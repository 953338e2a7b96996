use crate::commands::{CmdMessage, CmdResult, INVALID_PHONE_MESSAGE};
use crate::error::Result;
use crate::model::{Contact, Phone};
use crate::store::ContactStore;
use tracing::debug;

use super::helpers::name_and_phone;

/// Adds a contact. An existing name is overwritten, not rejected.
pub fn run<S: ContactStore>(store: &mut S, args: &[String]) -> Result<CmdResult> {
    let (name, raw_phone) = name_and_phone(args)?;

    let Ok(phone) = Phone::parse(raw_phone) else {
        debug!(name, raw_phone, "rejected phone on add");
        return Ok(CmdResult::with_message(CmdMessage::warning(
            INVALID_PHONE_MESSAGE,
        )));
    };

    store.insert_contact(Contact::new(name, phone))?;
    debug!(name, "contact added");

    Ok(CmdResult::with_message(CmdMessage::success("Contact added.")))
}
