//! A single transaction layer.

use crate::types::Slot;
use std::collections::HashMap;

/// One open transaction layer.
///
/// A frame owns the entries written while it was on top of the stack and
/// a signed delta per value. The delta records how much this frame's
/// writes changed the global occurrence count of that value, measured
/// against whatever was visible across the whole stack at write time.
/// It is a correction term, not a count of this frame's own entries: only
/// the sum over every frame on the stack is meaningful.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    /// Key -> value or tombstone written in this frame.
    entries: HashMap<String, Slot>,
    /// Value -> net change in global occurrence count.
    deltas: HashMap<String, i64>,
}

impl Frame {
    /// Creates an empty frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up `key` in this frame only.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Slot> {
        self.entries.get(key)
    }

    /// Writes `value` for `key`.
    ///
    /// `prior` is the entry visible for `key` across the whole stack before
    /// this write; a frame cannot see older frames on its own. A live prior
    /// value loses one occurrence and `value` gains one.
    pub fn set(&mut self, key: String, value: String, prior: Option<&Slot>) {
        if let Some(old) = prior.and_then(Slot::value) {
            self.adjust(old, -1);
        }
        self.adjust(&value, 1);
        self.entries.insert(key, Slot::Value(value));
    }

    /// Records a delete of `key` as a tombstone.
    ///
    /// A live prior value loses one occurrence. Tombstones are never counted.
    pub fn delete(&mut self, key: String, prior: Option<&Slot>) {
        if let Some(old) = prior.and_then(Slot::value) {
            self.adjust(old, -1);
        }
        self.entries.insert(key, Slot::Tombstone);
    }

    /// Returns this frame's delta for `value` (zero if never touched).
    #[must_use]
    pub fn count_delta(&self, value: &str) -> i64 {
        self.deltas.get(value).copied().unwrap_or(0)
    }

    /// Returns all entries written in this frame.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Slot)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns all value deltas, including ones that netted out to zero.
    pub fn deltas(&self) -> impl Iterator<Item = (&str, i64)> {
        self.deltas.iter().map(|(v, d)| (v.as_str(), *d))
    }

    /// Returns the number of keys written in this frame.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if nothing has been written in this frame.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the frame, yielding its entries.
    pub(crate) fn into_entries(self) -> impl Iterator<Item = (String, Slot)> {
        self.entries.into_iter()
    }

    fn adjust(&mut self, value: &str, by: i64) {
        match self.deltas.get_mut(value) {
            Some(delta) => *delta += by,
            None => {
                self.deltas.insert(value.to_owned(), by);
            }
        }
    }
}
