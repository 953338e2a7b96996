use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ContactStore;

use super::helpers::joined_name;

/// Looks up one contact. Multiple tokens are glued into a single name.
pub fn run<S: ContactStore>(store: &S, args: &[String]) -> Result<CmdResult> {
    let name = joined_name(args);
    let contact = store.get_contact(&name)?;

    Ok(CmdResult::with_message(CmdMessage::info(contact.describe())))
}
