//! TallyKV CLI
//!
//! Interactive shell over an in-memory key-value store with nested
//! transactions.
//!
//! # Commands
//!
//! - `SET key value` / `GET key` / `DELETE key` - read and write keys
//! - `COUNT value` - number of keys currently holding `value`
//! - `BEGIN` / `ROLLBACK` / `COMMIT` - nested transactions
//! - `REPORT` - dump every open frame
//! - `STATS` - operation counters
//! - `END` - exit

use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;
use tallykv_cli::repl;
use tallykv_core::{Config, TransactionStack};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// In-memory key-value store with nested transactions.
#[derive(Parser)]
#[command(name = "tallykv")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Read commands from this file instead of stdin
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Report COMMIT/ROLLBACK without an open transaction
    #[arg(long)]
    strict: bool,

    /// Maximum number of nested transactions
    #[arg(long)]
    max_depth: Option<usize>,

    /// Never print the interactive prompt
    #[arg(long)]
    no_prompt: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging on stderr so stdout carries only command output
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = Config::new()
        .strict(cli.strict)
        .max_depth(cli.max_depth);
    let mut stack = TransactionStack::with_config(config);
    let stdout = io::stdout().lock();

    match cli.script {
        Some(path) => {
            info!("Running script {:?}", path);
            let file = BufReader::new(File::open(&path)?);
            repl::run(&mut stack, file, stdout, false)?;
        }
        None => {
            let stdin = io::stdin();
            let prompt = !cli.no_prompt && stdin.is_terminal();
            repl::run(&mut stack, stdin.lock(), stdout, prompt)?;
        }
    }

    if stack.in_transaction() {
        info!(
            depth = stack.depth(),
            "exiting with open transactions; their changes are discarded"
        );
    }
    Ok(())
}
