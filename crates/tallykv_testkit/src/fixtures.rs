//! Fixtures for driving and observing a transaction stack.

use crate::generators::{Op, KEYS, VALUES};
use tallykv_core::TransactionStack;

/// Everything a caller can see through `get`, `count` and `depth`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    /// Stack depth, including the root.
    pub depth: usize,
    /// `get` of every key in [`KEYS`], in order.
    pub values: Vec<Option<String>>,
    /// `count` of every value in [`VALUES`], in order.
    pub counts: Vec<i64>,
}

/// Applies one operation to a stack.
///
/// Uses the default (non-strict, unbounded) configuration semantics, so
/// transaction control never fails.
pub fn apply_op(stack: &mut TransactionStack, op: &Op) {
    match op {
        Op::Set(key, value) => stack.set(key, value),
        Op::Delete(key) => stack.delete(key),
        Op::Begin => {
            stack.begin().expect("begin with default config");
        }
        Op::Rollback => {
            stack.rollback().expect("rollback with default config");
        }
        Op::Commit => {
            stack.commit().expect("commit with default config");
        }
    }
}

/// Applies a sequence of operations to a stack.
pub fn apply_ops(stack: &mut TransactionStack, ops: &[Op]) {
    for op in ops {
        apply_op(stack, op);
    }
}

/// Observes every generator key and value on a stack.
#[must_use]
pub fn observe(stack: &TransactionStack) -> Observation {
    Observation {
        depth: stack.depth(),
        values: KEYS
            .iter()
            .map(|k| stack.get(k).map(str::to_owned))
            .collect(),
        counts: VALUES.iter().map(|v| stack.count(v)).collect(),
    }
}

/// Counts keys holding `value` by reading every key through `get`.
///
/// This is the ground truth `count` must agree with.
#[must_use]
pub fn count_by_scan(stack: &TransactionStack, value: &str) -> i64 {
    KEYS.iter().filter(|k| stack.get(k) == Some(value)).count() as i64
}
