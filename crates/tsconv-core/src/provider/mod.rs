//! Timestamp formatting provider.
//!
//! The [`Provider`] translates between epoch timestamps and human-readable
//! date/time strings. All calendar and time zone math is delegated to
//! `jiff` and its time zone database; this module only selects patterns,
//! assembles results and maps failures onto [`crate::ConvertError`].
//!
//! ```text
//! ┌──────────────┐    ┌─────────────────┐    ┌──────────────────┐
//! │ Panel / CLI  │───▶│    Provider     │───▶│ jiff tz database │
//! │   handlers   │    │ (format, parse) │    │  + strftime      │
//! └──────────────┘    └─────────────────┘    └──────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`Provider`] instances
//! - [`timezones`]: Zone selector list, offsets and the fallback list
//! - [`format`]: Timestamp → [`FormattedResult`](crate::models::FormattedResult)
//! - [`relative`]: Relative phrases ("3 days ago")
//! - [`parse`]: Date-time strings → timestamps
//!
//! # Usage
//!
//! ```rust
//! use tsconv_core::{models::TimestampUnit, ProviderBuilder};
//!
//! let provider = ProviderBuilder::new().build();
//! let result = provider
//!     .format_timestamp(1_609_459_200, TimestampUnit::Seconds, "UTC")
//!     .unwrap();
//! assert_eq!(result.iso, "2021-01-01T00:00:00.000Z");
//! assert_eq!(result.standard, "2021-01-01 00:00:00");
//! ```

use jiff::{tz::TimeZone, Timestamp};

use crate::{
    error::{Result, TimezoneResultExt},
    locale::Locale,
    models::{PluginInfo, TimestampInput, TimestampUnit, TimezoneSupport},
};

pub mod builder;
pub mod format;
pub mod parse;
pub mod relative;
pub mod timezones;

#[cfg(test)]
mod tests;

pub use builder::ProviderBuilder;
pub use timezones::{offset_label, POPULAR_TIMEZONES};

/// Source of "now" for the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    /// Read the system clock on every call
    #[default]
    System,
    /// Always report the same instant
    Fixed(Timestamp),
}

impl Clock {
    pub fn now(&self) -> Timestamp {
        match self {
            Clock::System => Timestamp::now(),
            Clock::Fixed(ts) => *ts,
        }
    }
}

/// Formatting provider backed by the `jiff` time zone database.
#[derive(Debug, Clone)]
pub struct Provider {
    pub(crate) locale: Locale,
    pub(crate) clock: Clock,
    pub(crate) local_tz: Option<TimeZone>,
}

impl Provider {
    /// Creates a new provider.
    pub(crate) fn new(locale: Locale, clock: Clock, local_tz: Option<TimeZone>) -> Self {
        Self {
            locale,
            clock,
            local_tz,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// The instant the provider treats as "now".
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    /// Current epoch time in milliseconds.
    pub fn current_timestamp(&self) -> i64 {
        self.now().as_millisecond()
    }

    /// The zone used to interpret civil date-times: the configured local zone
    /// or the system zone.
    pub fn local_timezone(&self) -> TimeZone {
        self.local_tz.clone().unwrap_or_else(TimeZone::system)
    }

    /// IANA id of the user's zone, or `"UTC"` when it cannot be resolved.
    pub fn user_timezone(&self) -> String {
        let resolved = match &self.local_tz {
            Some(tz) => tz.iana_name().map(str::to_string),
            None => TimeZone::try_system()
                .ok()
                .and_then(|tz| tz.iana_name().map(str::to_string)),
        };
        resolved.unwrap_or_else(|| "UTC".to_string())
    }

    /// Look up a zone by IANA id.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::TimezoneFormatting` naming the zone when it is
    /// unknown to the database.
    pub fn resolve_timezone(&self, name: &str) -> Result<TimeZone> {
        TimeZone::get(name).tz_context(name)
    }

    /// Whether `text` parses as an integer whose millisecond value lies
    /// within 1970-01-01 ..= 2100-01-01.
    pub fn is_valid_timestamp(&self, text: &str, unit: TimestampUnit) -> bool {
        TimestampInput::parse(text, unit)
            .map(|input| input.is_in_range())
            .unwrap_or(false)
    }

    /// Reports which formatting capabilities are available.
    pub fn timezone_support(&self) -> TimezoneSupport {
        TimezoneSupport {
            supported_values_of: jiff::tz::db().available().next().is_some(),
            date_time_format: true,
            relative_time_format: true,
            time_zone_support: TimeZone::get("UTC").is_ok(),
        }
    }

    pub fn plugin_info(&self) -> PluginInfo {
        let description = match self.locale {
            Locale::En => "Two-way conversion between timestamps and date/time across time zones",
            Locale::ZhCn => "支持时间戳与日期时间的双向转换，支持多时区显示",
        };
        PluginInfo {
            name: "tsconv".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: description.to_string(),
        }
    }
}
