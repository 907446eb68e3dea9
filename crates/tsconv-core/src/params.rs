//! Parameter structures for tsconv operations.
//!
//! These structures carry requests from an interface layer to the
//! [`handlers`](crate::handlers) without framework-specific derives.
//!
//! ## Architecture: Parameter Wrapper Pattern
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │    Handlers     │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (core logic)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Interface layers define their own argument structs and convert them with
//! `From`:
//!
//! ```ignore
//! #[derive(Args)]
//! pub struct ConvertArgs {
//!     pub timestamp: String,
//!     // ... clap-specific attributes
//! }
//!
//! impl From<ConvertArgs> for ConvertTimestamp {
//!     fn from(args: ConvertArgs) -> Self { /* ... */ }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::models::TimestampUnit;

/// Parameters for formatting a timestamp.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvertTimestamp {
    /// Timestamp text as typed
    pub timestamp: String,
    #[serde(default)]
    pub unit: TimestampUnit,
    /// Target zone; the user's zone when absent
    pub timezone: Option<String>,
}

/// Parameters for formatting the current time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrentTime {
    pub timezone: Option<String>,
}

/// Parameters for converting a date-time string to a timestamp.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReverseConvert {
    pub datetime: String,
    /// Zone for civil date-times; the user's zone when absent
    pub timezone: Option<String>,
}

/// Parameters for formatting one timestamp in several zones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MultiConvert {
    pub timestamp: String,
    #[serde(default)]
    pub unit: TimestampUnit,
    pub timezones: Vec<String>,
}

/// Parameters for listing selector entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListTimezones {
    /// Only the popular zones before the separator
    #[serde(default)]
    pub popular: bool,
    /// Case-insensitive substring matched against id and label
    pub filter: Option<String>,
}

/// Parameters for a timestamp range check.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidateTimestamp {
    pub timestamp: String,
    #[serde(default)]
    pub unit: TimestampUnit,
}
