use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::ops::Deref;

/// Timestamp format used by status and user payloads,
/// e.g. "Wed Aug 29 17:12:58 +0000 2012"
const STATUS_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Custom time type that wraps chrono::DateTime and handles the service's
/// JSON timestamp formats: the status format above, and RFC 2822 as used by
/// the search API ("Thu, 06 Oct 2011 19:36:17 +0000").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Time(pub DateTime<Utc>);

impl Time {
    /// Create a new Time from a DateTime
    pub fn new(dt: DateTime<Utc>) -> Self {
        Time(dt)
    }

    /// Parse a wire timestamp, trying both formats the service emits
    pub fn parse(s: &str) -> Option<Self> {
        DateTime::parse_from_str(s, STATUS_FORMAT)
            .or_else(|_| DateTime::parse_from_rfc2822(s))
            .ok()
            .map(|dt| Time(dt.with_timezone(&Utc)))
    }

    /// Get the unix timestamp in seconds
    pub fn unix(&self) -> i64 {
        self.0.timestamp()
    }

    /// Format in the status wire format
    pub fn to_wire(&self) -> String {
        self.0.format(STATUS_FORMAT).to_string()
    }
}

impl Deref for Time {
    type Target = DateTime<Utc>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<DateTime<Utc>> for Time {
    fn from(dt: DateTime<Utc>) -> Self {
        Time(dt)
    }
}

impl Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_wire())
    }
}

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Time::parse(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!("unrecognized timestamp: {:?}", raw))
        })
    }
}
