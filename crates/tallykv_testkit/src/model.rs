//! Naive reference model of the transaction stack.
//!
//! Every level holds a full copy of the effective state, so reads and
//! counts are computed directly instead of through per-frame deltas.

use crate::fixtures::Observation;
use crate::generators::{Op, KEYS, VALUES};
use std::collections::HashMap;

/// A transaction stack that snapshots the whole store on `begin`.
#[derive(Debug, Clone)]
pub struct ModelStore {
    levels: Vec<HashMap<String, String>>,
}

impl Default for ModelStore {
    fn default() -> Self {
        Self {
            levels: vec![HashMap::new()],
        }
    }
}

impl ModelStore {
    /// Creates an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of levels, including the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Returns the live value of `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.current().get(key).map(String::as_str)
    }

    /// Returns how many keys hold `value`.
    #[must_use]
    pub fn count(&self, value: &str) -> i64 {
        self.current().values().filter(|v| *v == value).count() as i64
    }

    /// Applies one operation.
    pub fn apply(&mut self, op: &Op) {
        match op {
            Op::Set(key, value) => {
                self.current_mut().insert(key.clone(), value.clone());
            }
            Op::Delete(key) => {
                self.current_mut().remove(key);
            }
            Op::Begin => {
                let snapshot = self.current().clone();
                self.levels.push(snapshot);
            }
            Op::Rollback => {
                if self.levels.len() > 1 {
                    self.levels.pop();
                }
            }
            Op::Commit => {
                if self.levels.len() > 1 {
                    let top = self.current().clone();
                    self.levels = vec![top];
                }
            }
        }
    }

    /// Observes every generator key and value.
    #[must_use]
    pub fn observe(&self) -> Observation {
        Observation {
            depth: self.depth(),
            values: KEYS
                .iter()
                .map(|k| self.get(k).map(str::to_owned))
                .collect(),
            counts: VALUES.iter().map(|v| self.count(v)).collect(),
        }
    }

    fn current(&self) -> &HashMap<String, String> {
        // levels is never empty
        &self.levels[self.levels.len() - 1]
    }

    fn current_mut(&mut self) -> &mut HashMap<String, String> {
        let top = self.levels.len() - 1;
        &mut self.levels[top]
    }
}
