//! TallyKV command loop.
//!
//! The library half of the `tallykv` binary: parsing command lines,
//! executing them against a [`TransactionStack`](tallykv_core::TransactionStack)
//! and driving the read-eval-print loop over any reader and writer.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod commands;
pub mod repl;
