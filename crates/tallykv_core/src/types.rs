//! Core type definitions for TallyKV.

use std::fmt;

/// What the command layer prints for a key that is absent or deleted.
pub const NULL: &str = "NULL";

/// A frame's entry for a key.
///
/// A tombstone records a delete made in that frame. It shadows any value
/// the key holds in older frames and never contributes to value counts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Slot {
    /// A live value.
    Value(String),
    /// The key was deleted in this frame.
    Tombstone,
}

impl Slot {
    /// Returns the live value, or `None` for a tombstone.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Slot::Value(value) => Some(value),
            Slot::Tombstone => None,
        }
    }

    /// Checks if this entry marks a deletion.
    #[must_use]
    pub fn is_tombstone(&self) -> bool {
        matches!(self, Slot::Tombstone)
    }
}

impl From<&str> for Slot {
    fn from(value: &str) -> Self {
        Slot::Value(value.to_owned())
    }
}

impl From<String> for Slot {
    fn from(value: String) -> Self {
        Slot::Value(value)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Value(value) => write!(f, "{value:?}"),
            Slot::Tombstone => f.write_str("<deleted>"),
        }
    }
}
