use crate::commands::{CmdMessage, CmdResult, INVALID_PHONE_MESSAGE};
use crate::error::{BotError, Result};
use crate::model::{Contact, Phone};
use crate::store::ContactStore;
use tracing::debug;

use super::helpers::name_and_phone;

pub fn run<S: ContactStore>(store: &mut S, args: &[String]) -> Result<CmdResult> {
    let (name, raw_phone) = name_and_phone(args)?;

    // unknown name wins over a bad phone
    if !store.contains(name) {
        return Err(BotError::ContactNotFound(name.to_string()));
    }

    let Ok(phone) = Phone::parse(raw_phone) else {
        debug!(name, raw_phone, "rejected phone on change");
        return Ok(CmdResult::with_message(CmdMessage::warning(
            INVALID_PHONE_MESSAGE,
        )));
    };

    store.update_contact(Contact::new(name, phone))?;
    debug!(name, "contact changed");

    Ok(CmdResult::with_message(CmdMessage::success(
        "Contact changed.",
    )))
}
