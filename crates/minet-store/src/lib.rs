//! Named-slot durable storage for MiniNet.
//!
//! This crate implements the key-value layer the feed persists into: a small
//! number of named string slots (`posts`, `user`), each holding one full
//! JSON snapshot that is overwritten in its entirety on every write.
//!
//! # Storage Backends
//!
//! All backends implement the [`SlotStore`] trait:
//!
//! - [`InMemorySlotStore`] -- `HashMap`-based store for tests and ephemeral
//!   sessions
//! - [`FileSlotStore`] -- one file per slot under a data directory, with
//!   atomic replace-on-write
//!
//! # Design Rules
//!
//! 1. A write replaces the whole slot; there are no partial updates.
//! 2. Reading a slot that was never written returns `Ok(None)`, not an error.
//! 3. Slot names are validated before touching the backend, so a hostile
//!    name can never escape the data directory.
//! 4. All I/O errors are propagated; the *caller* decides whether persistence
//!    failures are fatal.

pub mod error;
pub mod file;
pub mod memory;
pub mod names;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use file::FileSlotStore;
pub use memory::InMemorySlotStore;
pub use names::validate_slot_name;
pub use traits::SlotStore;
