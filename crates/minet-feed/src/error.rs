use minet_store::StoreError;

/// Errors from the snapshot codec and attachment layers.
///
/// These never cross the [`crate::Feed`] operation boundary -- those
/// operations are fail-soft -- but callers of the codec and image helpers
/// see them directly.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Underlying slot store failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Snapshot could not be encoded or decoded.
    #[error("snapshot serialization error: {0}")]
    Serialization(String),

    /// Snapshot envelope carries a version this build does not understand.
    #[error("unsupported snapshot version {found} (expected {expected})")]
    UnsupportedSnapshotVersion { found: u32, expected: u32 },

    /// I/O error while reading an attachment.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The attached file is not a recognized image type.
    #[error("not an image file: {0}")]
    NotAnImage(String),
}

/// Result alias for feed operations.
pub type FeedResult<T> = Result<T, FeedError>;
