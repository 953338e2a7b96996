use super::print::write_messages;
use assistant_bot::api::AssistantApi;
use assistant_bot::error::Result;
use assistant_bot::store::ContactStore;
use std::io::{BufRead, Write};
use tracing::{debug, error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Running,
    Stopped,
}

/// Runs the read/dispatch/print loop until `close`, `exit` or end of input.
///
/// Only errors the API could not recover from end the loop early.
pub(super) fn run_session<S, R, W>(
    api: &mut AssistantApi<S>,
    input: &mut R,
    output: &mut W,
    color: bool,
) -> Result<()>
where
    S: ContactStore,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", api.config().welcome)?;

    let mut state = State::Running;
    let mut line = String::new();
    while state == State::Running {
        write!(output, "{}", api.config().prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("end of input");
            writeln!(output)?;
            break;
        }

        let dispatch = api.dispatch(&line).inspect_err(|e| {
            error!(error = %e, "session aborted");
        })?;
        write_messages(output, &dispatch.result().messages, color)?;

        if dispatch.is_stop() {
            state = State::Stopped;
        }
    }

    Ok(())
}
