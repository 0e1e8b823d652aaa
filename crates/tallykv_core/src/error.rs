//! Error types for TallyKV core.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in TallyKV core operations.
///
/// With the default [`Config`](crate::Config) none of these are produced:
/// commit and rollback without an open transaction are no-ops, and
/// transactions nest without limit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Commit or rollback issued with only the root frame on the stack.
    #[error("no open transaction to {operation}")]
    NoOpenTransaction {
        /// The operation that was attempted.
        operation: &'static str,
    },

    /// `begin` would exceed the configured nesting limit.
    #[error("transaction depth limit exceeded: at most {limit} nested transactions")]
    DepthLimitExceeded {
        /// Configured maximum number of nested transactions.
        limit: usize,
    },
}

impl CoreError {
    /// Creates a no open transaction error.
    pub fn no_open_transaction(operation: &'static str) -> Self {
        Self::NoOpenTransaction { operation }
    }

    /// Creates a depth limit error.
    pub fn depth_limit_exceeded(limit: usize) -> Self {
        Self::DepthLimitExceeded { limit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            CoreError::no_open_transaction("commit").to_string(),
            "no open transaction to commit"
        );
        assert_eq!(
            CoreError::depth_limit_exceeded(3).to_string(),
            "transaction depth limit exceeded: at most 3 nested transactions"
        );
    }
}
