//! Date-time values as CrystalPay puts them on the wire.
//!
//! The API reports times as naive local date-times in the form
//! `"2024-03-01 12:30:45"`. [`Timestamp`] accepts that form, the `T`-separated
//! ISO variant with optional fractional seconds, and full RFC 3339 strings
//! (normalized to UTC). It always serializes back to the CrystalPay form.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Format CrystalPay uses for every timestamp it emits.
pub const WIRE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const ACCEPTED_NAIVE_FORMATS: [&str; 3] = [
    WIRE_FORMAT,
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// A date-time as reported by CrystalPay.
///
/// # Example
///
/// ```
/// use crystalpay_types::timestamp::Timestamp;
///
/// let ts: Timestamp = "2024-03-01 12:30:45".parse().unwrap();
/// assert_eq!(ts.to_string(), "2024-03-01 12:30:45");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

#[derive(Debug, thiserror::Error)]
#[error("invalid timestamp {0:?}: expected \"YYYY-MM-DD HH:MM:SS\" or RFC 3339")]
pub struct TimestampParseError(String);

impl Timestamp {
    pub fn new(value: NaiveDateTime) -> Self {
        Self(value)
    }

    pub fn as_naive(&self) -> &NaiveDateTime {
        &self.0
    }

    pub fn into_naive(self) -> NaiveDateTime {
        self.0
    }
}

impl FromStr for Timestamp {
    type Err = TimestampParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        for format in ACCEPTED_NAIVE_FORMATS {
            if let Ok(parsed) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(Self(parsed));
            }
        }
        DateTime::parse_from_rfc3339(s)
            .map(|parsed| Self(parsed.naive_utc()))
            .map_err(|_| TimestampParseError(s.to_string()))
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(WIRE_FORMAT))
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
