//! Transaction stack coordinator.

use crate::config::Config;
use crate::error::{CoreError, CoreResult};
use crate::report::{FrameReport, Report};
use crate::stats::StackStats;
use crate::transaction::frame::Frame;
use crate::types::{Slot, NULL};
use std::iter;
use tracing::{debug, trace};

/// An in-memory key-value store with nested transactions.
///
/// The stack always holds the root frame; each `begin()` pushes another
/// frame on top of it. Writes go to the top frame, reads see the newest
/// entry for a key across all frames, and `count()` sums the per-frame
/// value deltas.
///
/// # Transactions
///
/// - `begin()` opens a nested transaction
/// - `rollback()` discards the innermost transaction only
/// - `commit()` folds *every* open transaction into the root
///
/// ```rust
/// use tallykv_core::TransactionStack;
///
/// let mut stack = TransactionStack::new();
/// stack.set("a", "1");
/// stack.begin().unwrap();
/// stack.set("a", "2");
/// stack.begin().unwrap();
/// stack.delete("a");
/// assert_eq!(stack.get("a"), None);
///
/// stack.rollback().unwrap();
/// assert_eq!(stack.get("a"), Some("2"));
///
/// stack.commit().unwrap();
/// assert_eq!(stack.depth(), 1);
/// assert_eq!(stack.count("1"), 0);
/// assert_eq!(stack.count("2"), 1);
/// ```
///
/// The stack is owned by its caller and passed explicitly; there is no
/// process-wide instance.
#[derive(Debug, Clone, Default)]
pub struct TransactionStack {
    /// Configuration.
    config: Config,
    /// Frame 0. Never popped.
    root: Frame,
    /// Open transactions, oldest first.
    nested: Vec<Frame>,
    /// Operation counters.
    stats: StackStats,
}

impl TransactionStack {
    /// Creates an empty stack with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty stack with a custom configuration.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the operation counters.
    #[must_use]
    pub fn stats(&self) -> &StackStats {
        &self.stats
    }

    /// Returns the number of frames, including the root. Always at least 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.nested.len() + 1
    }

    /// Checks if any transaction is open.
    #[must_use]
    pub fn in_transaction(&self) -> bool {
        !self.nested.is_empty()
    }

    /// Returns the entry visible for `key`.
    ///
    /// Frames are scanned from the top down and the first one holding any
    /// entry for `key`, value or tombstone, decides. `None` means no frame
    /// has ever touched the key.
    #[must_use]
    pub fn visible(&self, key: &str) -> Option<&Slot> {
        self.frames_top_down().find_map(|frame| frame.get(key))
    }

    /// Returns the live value of `key`.
    ///
    /// Absent and deleted keys both give `None`; an empty string is a
    /// live value and gives `Some("")`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.visible(key).and_then(Slot::value)
    }

    /// Returns the live value of `key`, or [`NULL`] if there is none.
    #[must_use]
    pub fn get_or_null(&self, key: &str) -> &str {
        self.get(key).unwrap_or(NULL)
    }

    /// Sets `key` to `value` in the innermost transaction.
    pub fn set(&mut self, key: &str, value: &str) {
        let prior = self.visible(key).cloned();
        trace!(key, value, depth = self.depth(), "set");
        self.top_mut()
            .set(key.to_owned(), value.to_owned(), prior.as_ref());
        self.stats.record_write();
    }

    /// Deletes `key` in the innermost transaction.
    ///
    /// A tombstone is written even if the key is absent, so the delete
    /// still shadows the key once folded or layered.
    pub fn delete(&mut self, key: &str) {
        let prior = self.visible(key).cloned();
        trace!(key, depth = self.depth(), "delete");
        self.top_mut().delete(key.to_owned(), prior.as_ref());
        self.stats.record_delete();
    }

    /// Returns how many keys currently hold `value`.
    #[must_use]
    pub fn count(&self, value: &str) -> i64 {
        self.frames_top_down()
            .map(|frame| frame.count_delta(value))
            .sum()
    }

    /// Opens a nested transaction and returns the new depth.
    ///
    /// # Errors
    ///
    /// Returns `DepthLimitExceeded` if the configured `max_depth` is reached.
    pub fn begin(&mut self) -> CoreResult<usize> {
        if let Some(limit) = self.config.max_depth {
            if self.nested.len() >= limit {
                return Err(CoreError::depth_limit_exceeded(limit));
            }
        }
        self.nested.push(Frame::new());
        let depth = self.depth();
        self.stats.record_transaction_start(depth);
        debug!(depth, "begin");
        Ok(depth)
    }

    /// Discards the innermost transaction, entries and deltas together.
    ///
    /// Returns `Ok(false)` without changing anything when no transaction
    /// is open.
    ///
    /// # Errors
    ///
    /// Returns `NoOpenTransaction` instead of the no-op in strict mode.
    pub fn rollback(&mut self) -> CoreResult<bool> {
        match self.nested.pop() {
            Some(frame) => {
                self.stats.record_transaction_rollback();
                debug!(depth = self.depth(), discarded = frame.len(), "rollback");
                Ok(true)
            }
            None => self.no_transaction("rollback"),
        }
    }

    /// Folds every open transaction into the root.
    ///
    /// Frames are applied oldest first. Each entry is re-applied to the
    /// root against the root's own entry for that key, so deltas recorded
    /// in the discarded frames are never carried over. Afterwards only the
    /// root remains.
    ///
    /// Returns `Ok(false)` without changing anything when no transaction
    /// is open.
    ///
    /// # Errors
    ///
    /// Returns `NoOpenTransaction` instead of the no-op in strict mode.
    pub fn commit(&mut self) -> CoreResult<bool> {
        if self.nested.is_empty() {
            return self.no_transaction("commit");
        }

        let frames = std::mem::take(&mut self.nested);
        let folded = frames.len();
        let mut entries = 0usize;
        for frame in frames {
            for (key, slot) in frame.into_entries() {
                let prior = self.root.get(&key).cloned();
                match slot {
                    Slot::Value(value) => self.root.set(key, value, prior.as_ref()),
                    Slot::Tombstone => self.root.delete(key, prior.as_ref()),
                }
                entries += 1;
            }
        }

        self.stats.record_transaction_commit(folded);
        debug!(folded, entries, "commit");
        Ok(true)
    }

    /// Returns the entries and value deltas of every frame, root first.
    #[must_use]
    pub fn report(&self) -> Report {
        let frames = iter::once(&self.root)
            .chain(self.nested.iter())
            .enumerate()
            .map(|(depth, frame)| FrameReport::from_frame(depth, frame))
            .collect();
        Report { frames }
    }

    fn frames_top_down(&self) -> impl Iterator<Item = &Frame> {
        self.nested.iter().rev().chain(iter::once(&self.root))
    }

    fn top_mut(&mut self) -> &mut Frame {
        self.nested.last_mut().unwrap_or(&mut self.root)
    }

    fn no_transaction(&self, operation: &'static str) -> CoreResult<bool> {
        if self.config.strict {
            Err(CoreError::no_open_transaction(operation))
        } else {
            debug!(operation, "no open transaction");
            Ok(false)
        }
    }
}
