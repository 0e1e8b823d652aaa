//! Read-eval-print loop.

use crate::commands::{execute, parse, Output};
use std::io::{self, BufRead, Write};
use tallykv_core::TransactionStack;
use tracing::debug;

/// Prompt printed before each command in interactive mode.
pub const PROMPT: &str = ">> ";

/// Runs commands from `input` until `END` or end of input.
///
/// Results go to `output`, one per line. Malformed lines print their error
/// and the loop carries on.
///
/// # Errors
///
/// Returns an error only if reading `input` or writing `output` fails.
pub fn run<R: BufRead, W: Write>(
    stack: &mut TransactionStack,
    input: R,
    mut output: W,
    prompt: bool,
) -> io::Result<()> {
    let mut lines = input.lines();
    loop {
        if prompt {
            output.write_all(PROMPT.as_bytes())?;
            output.flush()?;
        }

        let Some(line) = lines.next() else {
            debug!("end of input");
            if prompt {
                writeln!(output)?;
            }
            break;
        };
        let line = line?;

        let command = match parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                debug!(line = %line, error = %err, "rejected input");
                writeln!(output, "{err}")?;
                continue;
            }
        };

        match execute(stack, command) {
            Output::Silent => {}
            Output::Text(text) => writeln!(output, "{text}")?,
            Output::End => {
                if prompt {
                    writeln!(output)?;
                }
                break;
            }
        }
    }
    output.flush()
}
