//! Timestamp unit enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unit of an epoch timestamp.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TimestampUnit {
    /// Seconds since the epoch
    #[serde(rename = "s")]
    Seconds,

    /// Milliseconds since the epoch
    #[default]
    #[serde(rename = "ms")]
    Milliseconds,
}

impl FromStr for TimestampUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "s" | "sec" | "secs" | "seconds" => Ok(TimestampUnit::Seconds),
            "ms" | "millis" | "milliseconds" => Ok(TimestampUnit::Milliseconds),
            _ => Err(format!("Invalid timestamp unit: {s}")),
        }
    }
}

impl TimestampUnit {
    /// Short name used by selectors and serialized forms.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimestampUnit::Seconds => "s",
            TimestampUnit::Milliseconds => "ms",
        }
    }

    /// Normalize a value in this unit to milliseconds.
    ///
    /// Returns `None` when the multiplication overflows.
    pub fn to_millis(&self, value: i64) -> Option<i64> {
        match self {
            TimestampUnit::Seconds => value.checked_mul(1000),
            TimestampUnit::Milliseconds => Some(value),
        }
    }
}

impl fmt::Display for TimestampUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
