//! The versioned snapshot codec.
//!
//! The feed persists two slots: `posts` (the full post array) and `user`
//! (the session identity). Each slot holds a JSON envelope:
//!
//! ```text
//! { "version": 1, "data": ... }
//! ```
//!
//! The explicit version field lets a future build detect and migrate old
//! layouts instead of silently drifting. Decoding falls back once to the
//! legacy bare layout (a raw array / object with no envelope), which is what
//! pre-versioning snapshots contain.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FeedError, FeedResult};
use crate::model::{Post, User};

/// Current snapshot schema version.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct Envelope<T> {
    version: u32,
    data: T,
}

/// Encode the full post list for the `posts` slot.
pub fn encode_posts(posts: &[Post]) -> FeedResult<String> {
    encode(posts)
}

/// Decode the `posts` slot.
pub fn decode_posts(raw: &str) -> FeedResult<Vec<Post>> {
    decode(raw)
}

/// Encode the session identity for the `user` slot.
pub fn encode_user(user: &User) -> FeedResult<String> {
    encode(user)
}

/// Decode the `user` slot.
pub fn decode_user(raw: &str) -> FeedResult<User> {
    decode(raw)
}

fn encode<T: Serialize + ?Sized>(data: &T) -> FeedResult<String> {
    let envelope = Envelope {
        version: SNAPSHOT_VERSION,
        data,
    };
    serde_json::to_string(&envelope).map_err(|e| FeedError::Serialization(e.to_string()))
}

fn decode<T: DeserializeOwned>(raw: &str) -> FeedResult<T> {
    match serde_json::from_str::<Envelope<T>>(raw) {
        Ok(envelope) => {
            if envelope.version != SNAPSHOT_VERSION {
                return Err(FeedError::UnsupportedSnapshotVersion {
                    found: envelope.version,
                    expected: SNAPSHOT_VERSION,
                });
            }
            Ok(envelope.data)
        }
        Err(envelope_err) => {
            // Legacy layout: the bare value with no envelope.
            match serde_json::from_str::<T>(raw) {
                Ok(data) => {
                    debug!("decoded legacy un-versioned snapshot");
                    Ok(data)
                }
                Err(_) => Err(FeedError::Serialization(envelope_err.to_string())),
            }
        }
    }
}
