use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::render::render_contacts;
use crate::store::ContactStore;

pub fn run<S: ContactStore>(store: &S, width: usize) -> Result<CmdResult> {
    let contacts = store.list_contacts()?;
    let rendered = render_contacts(&contacts, width);

    Ok(CmdResult::with_message(CmdMessage::info(rendered)))
}
