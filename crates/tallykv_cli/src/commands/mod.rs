//! CLI command implementations.

mod execute;
mod parse;

pub use execute::{execute, Output};
pub use parse::{parse, Command, CommandError};
