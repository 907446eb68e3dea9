//! Time zone selector entries.

use serde::{Deserialize, Serialize};

/// One entry of the time zone selector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimezoneOption {
    /// IANA zone id; empty for separator entries
    pub value: String,

    /// Friendly name with the UTC offset in effect now
    pub label: String,

    /// Region prefix of the zone id (`Asia`, `America`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// True only for separator pseudo-entries
    #[serde(default)]
    pub disabled: bool,
}

impl TimezoneOption {
    /// A selectable zone entry.
    pub fn zone(value: impl Into<String>, label: impl Into<String>, group: Option<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            group,
            disabled: false,
        }
    }

    /// A disabled separator entry.
    pub fn separator(label: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            label: label.into(),
            group: None,
            disabled: true,
        }
    }

    pub fn is_separator(&self) -> bool {
        self.disabled
    }
}

/// Region prefix of a zone id: everything before the first `/`.
pub fn region_of(zone: &str) -> &str {
    zone.split('/').next().unwrap_or(zone)
}
