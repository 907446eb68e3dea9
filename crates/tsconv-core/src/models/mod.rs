//! Data models for timestamp conversion.
//!
//! Every model here is transient: inputs are replaced on each edit and
//! results are recomputed on each conversion. Display implementations live in
//! [`crate::display`] to keep data and presentation apart.
//!
//! # Examples
//!
//! ```rust
//! use tsconv_core::models::{TimestampInput, TimestampUnit};
//!
//! let input = TimestampInput::parse("1700000000", TimestampUnit::Seconds).unwrap();
//! assert_eq!(input.as_millis(), Some(1_700_000_000_000));
//! assert!(input.is_in_range());
//! ```

pub mod input;
pub mod result;
pub mod timezone;
pub mod unit;

pub use input::{TimestampInput, MAX_TIMESTAMP_MS, MIN_TIMESTAMP_MS};
pub use result::{
    FormattedResult, MultiZoneResults, PluginInfo, ReverseResult, TimezoneSupport, ZoneConversion,
};
pub use timezone::{region_of, TimezoneOption};
pub use unit::TimestampUnit;
