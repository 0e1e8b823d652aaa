//! # TallyKV Testkit
//!
//! Test utilities for TallyKV.
//!
//! This crate provides:
//! - Property-based test generators using proptest
//! - A naive reference model of the transaction stack
//! - Fixtures for replaying operations and observing state
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tallykv_testkit::prelude::*;
//!
//! proptest! {
//!     #[test]
//!     fn matches_model(ops in ops_strategy(64)) {
//!         let mut stack = TransactionStack::new();
//!         let mut model = ModelStore::new();
//!         for op in &ops {
//!             apply_op(&mut stack, op);
//!             model.apply(op);
//!         }
//!         prop_assert_eq!(observe(&stack), model.observe());
//!     }
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod model;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::model::*;
}

pub use fixtures::*;
pub use generators::*;
pub use model::*;
