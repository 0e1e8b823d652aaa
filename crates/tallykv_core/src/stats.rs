//! Transaction stack statistics.
//!
//! Counters are plain integers bumped by mutating operations only; reads
//! take `&self` and are not counted.
//!
//! # Usage
//!
//! ```rust
//! use tallykv_core::TransactionStack;
//!
//! let mut stack = TransactionStack::new();
//! stack.set("a", "1");
//! stack.begin().unwrap();
//! stack.commit().unwrap();
//!
//! let stats = stack.stats();
//! assert_eq!(stats.writes(), 1);
//! assert_eq!(stats.transactions_committed(), 1);
//! ```

use std::fmt;

/// Operation counters for a [`TransactionStack`](crate::TransactionStack).
///
/// Values only increase, except `max_depth_seen` which tracks a high-water mark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StackStats {
    writes: u64,
    deletes: u64,
    transactions_started: u64,
    transactions_committed: u64,
    transactions_rolled_back: u64,
    max_depth_seen: usize,
}

impl StackStats {
    /// Creates a zeroed stats instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_write(&mut self) {
        self.writes += 1;
    }

    pub(crate) fn record_delete(&mut self) {
        self.deletes += 1;
    }

    /// Records a begin that brought the stack to `depth` frames.
    pub(crate) fn record_transaction_start(&mut self, depth: usize) {
        self.transactions_started += 1;
        self.max_depth_seen = self.max_depth_seen.max(depth);
    }

    pub(crate) fn record_transaction_commit(&mut self, frames: usize) {
        self.transactions_committed += frames as u64;
    }

    pub(crate) fn record_transaction_rollback(&mut self) {
        self.transactions_rolled_back += 1;
    }

    /// Returns the number of `set` calls.
    #[must_use]
    pub fn writes(&self) -> u64 {
        self.writes
    }

    /// Returns the number of `delete` calls.
    #[must_use]
    pub fn deletes(&self) -> u64 {
        self.deletes
    }

    /// Returns the number of transactions begun.
    #[must_use]
    pub fn transactions_started(&self) -> u64 {
        self.transactions_started
    }

    /// Returns the number of transactions folded into the root.
    ///
    /// A commit with several open transactions counts each of them.
    #[must_use]
    pub fn transactions_committed(&self) -> u64 {
        self.transactions_committed
    }

    /// Returns the number of transactions discarded by rollback.
    #[must_use]
    pub fn transactions_rolled_back(&self) -> u64 {
        self.transactions_rolled_back
    }

    /// Returns the deepest stack observed, in frames including the root.
    #[must_use]
    pub fn max_depth_seen(&self) -> usize {
        self.max_depth_seen
    }
}

impl fmt::Display for StackStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "writes: {}", self.writes)?;
        writeln!(f, "deletes: {}", self.deletes)?;
        writeln!(f, "transactions started: {}", self.transactions_started)?;
        writeln!(f, "transactions committed: {}", self.transactions_committed)?;
        writeln!(
            f,
            "transactions rolled back: {}",
            self.transactions_rolled_back
        )?;
        write!(f, "max depth seen: {}", self.max_depth_seen)
    }
}
