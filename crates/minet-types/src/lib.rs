//! Foundation types for MiniNet.
//!
//! This crate provides the identifier and temporal types used throughout the
//! MiniNet feed engine. Every other MiniNet crate depends on `minet-types`.
//!
//! # Key Types
//!
//! - [`UserId`] / [`PostId`] / [`CommentId`] -- time-ordered UUID v7 entity
//!   identifiers
//! - [`Timestamp`] -- UTC wall-clock instant, serialized as RFC 3339
//! - [`TypeError`] -- parse failures for the above

pub mod error;
pub mod id;
pub mod timestamp;

pub use error::TypeError;
pub use id::{CommentId, PostId, UserId};
pub use timestamp::Timestamp;
