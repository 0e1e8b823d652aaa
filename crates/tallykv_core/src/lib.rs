//! # TallyKV Core
//!
//! In-memory key-value store with nested transactions and value counting.
//!
//! This crate provides:
//! - A per-transaction [`Frame`] holding private entries and value-count deltas
//! - A [`TransactionStack`] that resolves visibility across frames and folds
//!   frames on commit
//! - Diagnostic [`Report`]s and [`StackStats`] counters
//!
//! ## Usage
//!
//! ```rust
//! use tallykv_core::TransactionStack;
//!
//! let mut stack = TransactionStack::new();
//! stack.set("a", "10");
//! stack.begin().unwrap();
//! stack.set("a", "20");
//! assert_eq!(stack.count("10"), 0);
//! stack.rollback().unwrap();
//! assert_eq!(stack.get("a"), Some("10"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod report;
mod stats;
mod transaction;
mod types;

pub use config::Config;
pub use error::{CoreError, CoreResult};
pub use report::{FrameReport, Report};
pub use stats::StackStats;
pub use transaction::{Frame, TransactionStack};
pub use types::{Slot, NULL};

/// Crate version, as reported by the CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
