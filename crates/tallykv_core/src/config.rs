//! Transaction stack configuration.

/// Configuration for a [`TransactionStack`](crate::TransactionStack).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of nested transactions (frames above the root).
    ///
    /// `None` means unbounded.
    pub max_depth: Option<usize>,

    /// Whether commit/rollback without an open transaction is an error.
    ///
    /// When false these are silent no-ops.
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: None,
            strict: false,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of nested transactions.
    #[must_use]
    pub const fn max_depth(mut self, limit: Option<usize>) -> Self {
        self.max_depth = limit;
        self
    }

    /// Sets whether commit/rollback at the root is reported as an error.
    #[must_use]
    pub const fn strict(mut self, value: bool) -> Self {
        self.strict = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.max_depth, None);
        assert!(!config.strict);
    }

    #[test]
    fn builder_pattern() {
        let config = Config::new().max_depth(Some(4)).strict(true);

        assert_eq!(config.max_depth, Some(4));
        assert!(config.strict);
    }
}
