use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// A UTC wall-clock instant.
///
/// Serialized as an RFC 3339 string (`2026-08-06T12:00:00Z`), which is the
/// on-disk snapshot format for post and comment timestamps.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The current wall-clock time.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Create from an explicit `DateTime`.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// The underlying `DateTime`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Parse from an RFC 3339 string.
    pub fn from_rfc3339(s: &str) -> Result<Self, TypeError> {
        DateTime::parse_from_rfc3339(s)
            .map(|dt| Self(dt.with_timezone(&Utc)))
            .map_err(|e| TypeError::InvalidTimestamp(e.to_string()))
    }

    /// RFC 3339 string representation.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }

    /// Human-readable age of this instant relative to `now`.
    ///
    /// Buckets: under a minute "just now", under an hour "Nm ago", under a
    /// day "Nh ago", under a week "Nd ago", otherwise an absolute
    /// month/day ("Mar 5"). Instants at or after `now` clamp to "just now".
    pub fn relative_to(&self, now: Timestamp) -> String {
        let secs = now.0.signed_duration_since(self.0).num_seconds();
        if secs < 60 {
            "just now".to_string()
        } else if secs < 3_600 {
            format!("{}m ago", secs / 60)
        } else if secs < 86_400 {
            format!("{}h ago", secs / 3_600)
        } else if secs < 604_800 {
            format!("{}d ago", secs / 86_400)
        } else {
            self.0.format("%b %-d").to_string()
        }
    }

    /// Shorthand for [`Timestamp::relative_to`] against the current time.
    pub fn relative(&self) -> String {
        self.relative_to(Timestamp::now())
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.to_rfc3339())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_rfc3339())
    }
}
