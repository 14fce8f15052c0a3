/// Errors from slot store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The slot name is not valid (empty, too long, or bad characters).
    #[error("invalid slot name {name:?}: {reason}")]
    InvalidSlotName { name: String, reason: String },

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored data could not be read as UTF-8 text.
    #[error("slot {name:?} holds non-UTF-8 data")]
    NotText { name: String },
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
