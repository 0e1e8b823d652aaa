//! Property-based test generators using proptest.
//!
//! Keys and values are drawn from small alphabets so that random
//! operation sequences keep colliding on the same keys and values.

use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

/// Keys used by generated operations.
pub const KEYS: &[&str] = &["a", "b", "c", "d"];

/// Values used by generated operations. Includes the empty string.
pub const VALUES: &[&str] = &["", "0", "1", "2", "NULL"];

/// A mutating operation on a transaction stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// Set a key to a value.
    Set(String, String),
    /// Delete a key.
    Delete(String),
    /// Open a nested transaction.
    Begin,
    /// Discard the innermost transaction.
    Rollback,
    /// Fold all open transactions into the root.
    Commit,
}

/// Strategy for generating keys.
pub fn key_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(KEYS).prop_map(str::to_owned)
}

/// Strategy for generating values.
pub fn value_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(VALUES).prop_map(str::to_owned)
}

/// Strategy for generating a single operation.
///
/// Writes are weighted above transaction control so stacks grow a few
/// frames deep with real content in each.
pub fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (key_strategy(), value_strategy()).prop_map(|(k, v)| Op::Set(k, v)),
        2 => key_strategy().prop_map(Op::Delete),
        2 => Just(Op::Begin),
        1 => Just(Op::Rollback),
        1 => Just(Op::Commit),
    ]
}

/// Strategy for generating operation sequences of up to `max_len` operations.
pub fn ops_strategy(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(op_strategy(), 0..=max_len)
}

/// Strategy for sequences that contain no transaction control.
///
/// Useful as the body of a `begin ... rollback` pair.
pub fn writes_strategy(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(
        prop_oneof![
            3 => (key_strategy(), value_strategy()).prop_map(|(k, v)| Op::Set(k, v)),
            1 => key_strategy().prop_map(Op::Delete),
        ],
        0..=max_len,
    )
}

/// Configuration for property-based tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Creates a configuration for thorough tests.
    #[must_use]
    pub fn thorough() -> Self {
        Self {
            cases: 1024,
            max_shrink_iters: 10000,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #![proptest_config(PropTestConfig::quick().to_proptest_config())]

        #[test]
        fn keys_come_from_alphabet(key in key_strategy()) {
            prop_assert!(KEYS.contains(&key.as_str()));
        }

        #[test]
        fn values_come_from_alphabet(value in value_strategy()) {
            prop_assert!(VALUES.contains(&value.as_str()));
        }

        #[test]
        fn ops_respect_length(ops in ops_strategy(16)) {
            prop_assert!(ops.len() <= 16);
        }

        #[test]
        fn writes_have_no_transaction_control(ops in writes_strategy(16)) {
            prop_assert!(ops
                .iter()
                .all(|op| matches!(op, Op::Set(..) | Op::Delete(_))));
        }
    }
}
