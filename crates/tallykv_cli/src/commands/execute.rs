//! Command execution against a transaction stack.

use super::parse::Command;
use tallykv_core::{CoreError, TransactionStack};
use tracing::warn;

/// Result of executing one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Nothing to print.
    Silent,
    /// Print this text on its own line(s).
    Text(String),
    /// Stop the loop.
    End,
}

/// Runs one command against `stack`.
///
/// Core errors only occur with a strict or depth-limited configuration and
/// are rendered as text rather than aborting the loop.
pub fn execute(stack: &mut TransactionStack, command: Command) -> Output {
    match command {
        Command::Set { key, value } => {
            stack.set(&key, &value);
            Output::Silent
        }
        Command::Get { key } => Output::Text(stack.get_or_null(&key).to_owned()),
        Command::Delete { key } => {
            stack.delete(&key);
            Output::Silent
        }
        Command::Count { value } => Output::Text(stack.count(&value).to_string()),
        Command::Begin => silent(stack.begin()),
        Command::Rollback => silent(stack.rollback()),
        Command::Commit => silent(stack.commit()),
        Command::Report => Output::Text(stack.report().to_string()),
        Command::Stats => Output::Text(stack.stats().to_string()),
        Command::End => Output::End,
    }
}

fn silent<T>(result: Result<T, CoreError>) -> Output {
    match result {
        Ok(_) => Output::Silent,
        Err(CoreError::NoOpenTransaction { .. }) => Output::Text("NO TRANSACTION".to_owned()),
        Err(err) => {
            warn!(error = %err, "command rejected");
            Output::Text(err.to_string())
        }
    }
}
