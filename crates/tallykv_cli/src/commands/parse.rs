//! Command line parsing.

use thiserror::Error;

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `SET key value`
    Set {
        /// Key to write.
        key: String,
        /// Value to store.
        value: String,
    },
    /// `GET key`
    Get {
        /// Key to read.
        key: String,
    },
    /// `DELETE key`
    Delete {
        /// Key to delete.
        key: String,
    },
    /// `COUNT value`
    Count {
        /// Value to count.
        value: String,
    },
    /// `BEGIN`
    Begin,
    /// `ROLLBACK`
    Rollback,
    /// `COMMIT`
    Commit,
    /// `REPORT`
    Report,
    /// `STATS`
    Stats,
    /// `END`
    End,
}

/// Errors from parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The verb is not a known command.
    #[error("Unknown command")]
    UnknownCommand {
        /// The verb as typed.
        verb: String,
    },

    /// The command got the wrong number of arguments.
    #[error("{command} expects {expected} argument(s), got {actual}")]
    WrongArity {
        /// Canonical command name.
        command: &'static str,
        /// Number of arguments the command takes.
        expected: usize,
        /// Number of arguments supplied.
        actual: usize,
    },
}

/// Parses one input line.
///
/// Returns `Ok(None)` for a blank line. Verbs are case-insensitive; keys
/// and values are taken verbatim.
///
/// # Errors
///
/// Returns `UnknownCommand` or `WrongArity` for malformed input.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let command = match verb.to_ascii_uppercase().as_str() {
        "SET" => {
            let [key, value] = arity::<2>("SET", &args)?;
            Command::Set {
                key: key.to_owned(),
                value: value.to_owned(),
            }
        }
        "GET" => {
            let [key] = arity::<1>("GET", &args)?;
            Command::Get {
                key: key.to_owned(),
            }
        }
        "DELETE" => {
            let [key] = arity::<1>("DELETE", &args)?;
            Command::Delete {
                key: key.to_owned(),
            }
        }
        "COUNT" => {
            let [value] = arity::<1>("COUNT", &args)?;
            Command::Count {
                value: value.to_owned(),
            }
        }
        "BEGIN" => no_args("BEGIN", &args, Command::Begin)?,
        "ROLLBACK" => no_args("ROLLBACK", &args, Command::Rollback)?,
        "COMMIT" => no_args("COMMIT", &args, Command::Commit)?,
        "REPORT" => no_args("REPORT", &args, Command::Report)?,
        "STATS" => no_args("STATS", &args, Command::Stats)?,
        "END" => no_args("END", &args, Command::End)?,
        _ => {
            return Err(CommandError::UnknownCommand {
                verb: verb.to_owned(),
            })
        }
    };
    Ok(Some(command))
}

fn arity<'a, const N: usize>(
    command: &'static str,
    args: &[&'a str],
) -> Result<[&'a str; N], CommandError> {
    <[&str; N]>::try_from(args).map_err(|_| CommandError::WrongArity {
        command,
        expected: N,
        actual: args.len(),
    })
}

fn no_args(
    command: &'static str,
    args: &[&str],
    parsed: Command,
) -> Result<Command, CommandError> {
    arity::<0>(command, args).map(|_| parsed)
}
