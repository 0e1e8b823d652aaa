//! Nested transactions over an in-memory key-value store.
//!
//! The store is a stack of [`Frame`]s:
//! - **Root**: frame 0, never removed
//! - **Top**: the frame every write lands in
//! - **Visibility**: the newest frame with an entry for a key wins, and a
//!   tombstone there hides older values
//! - **Counting**: each frame keeps signed per-value deltas; their sum
//!   across the stack is the number of keys currently holding a value

mod frame;
mod stack;

pub use frame::Frame;
pub use stack::TransactionStack;
