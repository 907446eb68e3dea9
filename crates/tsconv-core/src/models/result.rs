//! Conversion results.

use serde::{
    ser::{SerializeMap, Serializer},
    Deserialize, Serialize,
};

/// A timestamp rendered in one time zone.
///
/// Always computed fresh from a `(timestamp, unit, timezone)` triple.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormattedResult {
    /// Full local date and time
    pub standard: String,
    /// Local date only
    pub date: String,
    /// Local time only
    pub time: String,
    /// Long weekday name
    pub weekday: String,
    /// ISO-8601 instant in UTC with millisecond precision
    pub iso: String,
    /// Relative phrase such as "3 days ago"
    pub relative: String,
    /// The zone id the result was rendered in
    pub timezone: String,
    /// Long UTC offset, e.g. `GMT+08:00`
    pub timezone_offset: String,
    /// Zone abbreviation, e.g. `EST`
    pub timezone_short: String,
    /// Epoch seconds
    pub unix: i64,
    /// Epoch milliseconds
    pub unix_ms: i64,
}

/// Outcome of converting into a single zone of a batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ZoneConversion {
    Converted(FormattedResult),
    Failed { error: String },
}

impl ZoneConversion {
    pub fn result(&self) -> Option<&FormattedResult> {
        match self {
            ZoneConversion::Converted(result) => Some(result),
            ZoneConversion::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ZoneConversion::Converted(_) => None,
            ZoneConversion::Failed { error } => Some(error),
        }
    }
}

/// Per-zone results of a batch conversion, in request order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiZoneResults(pub Vec<(String, ZoneConversion)>);

impl MultiZoneResults {
    /// Look up the outcome for a zone id.
    pub fn get(&self, zone: &str) -> Option<&ZoneConversion> {
        self.0
            .iter()
            .find(|(name, _)| name == zone)
            .map(|(_, outcome)| outcome)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, ZoneConversion)> {
        self.0.iter()
    }
}

impl Serialize for MultiZoneResults {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (zone, outcome) in &self.0 {
            map.serialize_entry(zone, outcome)?;
        }
        map.end()
    }
}

/// Result of converting a date-time string back into a timestamp.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReverseResult {
    pub milliseconds: i64,
    pub seconds: i64,
}

impl ReverseResult {
    pub fn from_millis(milliseconds: i64) -> Self {
        Self {
            milliseconds,
            seconds: milliseconds.div_euclid(1000),
        }
    }
}

/// Which formatting capabilities the runtime offers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimezoneSupport {
    /// The zone database can enumerate its zones
    pub supported_values_of: bool,
    /// Date/time formatting is available
    pub date_time_format: bool,
    /// Relative phrase formatting is available
    pub relative_time_format: bool,
    /// A UTC-zoned formatter can be constructed
    pub time_zone_support: bool,
}

/// Static information about the panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PluginInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}
