//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Creates a new timestamp by adding the specified number of seconds.
    pub fn plus_secs(&self, secs: u64) -> Self {
        Self(self.0 + Duration::seconds(secs as i64))
    }

    /// Parses a feed publication date.
    ///
    /// Accepts the `YYYY-MM-DD HH:MM:SS` form emitted by RSS-to-JSON
    /// proxies (interpreted as UTC), RFC 3339 and RFC 2822.
    pub fn parse_feed_date(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
            return Some(Self(naive.and_utc()));
        }
        DateTime::parse_from_rfc3339(raw)
            .or_else(|_| DateTime::parse_from_rfc2822(raw))
            .ok()
            .map(|dt| Self(dt.with_timezone(&Utc)))
    }

    /// Short display date, e.g. `Jan 5, 2024`.
    pub fn short_date(&self) -> String {
        self.0.format("%b %-d, %Y").to_string()
    }
}
