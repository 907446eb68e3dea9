//! Date-time strings → timestamps.

use jiff::{
    civil::{Date, DateTime, Time},
    tz::TimeZone,
    Timestamp, Zoned,
};

use super::Provider;
use crate::error::{ConvertError, Result};

/// Civil date-time layouts tried after the ISO parser.
const DATETIME_PATTERNS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// Date-only layouts; these resolve to midnight.
const DATE_PATTERNS: [&str; 1] = ["%Y/%m/%d"];

impl Provider {
    /// Converts a date-time string to epoch milliseconds, reading civil
    /// date-times in the user's local zone.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::InvalidDateTime` when the text matches no
    /// supported layout or names a nonexistent local time.
    pub fn date_to_timestamp(&self, text: &str) -> Result<i64> {
        self.date_to_timestamp_in(text, &self.local_timezone())
    }

    /// Same as [`Provider::date_to_timestamp`] with an explicit zone for
    /// civil date-times. Strings carrying their own offset or zone ignore it.
    pub fn date_to_timestamp_in(&self, text: &str, tz: &TimeZone) -> Result<i64> {
        parse_date_time(text, tz).map(Timestamp::as_millisecond)
    }
}

/// Parses an instant, a zoned string, or a civil date-time in `tz`.
pub fn parse_date_time(text: &str, tz: &TimeZone) -> Result<Timestamp> {
    let trimmed = text.trim();
    let invalid = || ConvertError::invalid_date_time(trimmed);
    if trimmed.is_empty() {
        return Err(invalid());
    }

    if let Ok(instant) = trimmed.parse::<Timestamp>() {
        return Ok(instant);
    }
    if let Ok(zoned) = trimmed.parse::<Zoned>() {
        return Ok(zoned.timestamp());
    }

    let civil = parse_civil(trimmed).ok_or_else(invalid)?;
    civil
        .to_zoned(tz.clone())
        .map(|zoned| zoned.timestamp())
        .map_err(|_| invalid())
}

fn parse_civil(text: &str) -> Option<DateTime> {
    if let Ok(dt) = text.parse::<DateTime>() {
        return Some(dt);
    }
    if let Ok(date) = text.parse::<Date>() {
        return Some(date.to_datetime(Time::midnight()));
    }
    DATETIME_PATTERNS
        .iter()
        .find_map(|pattern| DateTime::strptime(pattern, text).ok())
        .or_else(|| {
            DATE_PATTERNS
                .iter()
                .find_map(|pattern| Date::strptime(pattern, text).ok())
                .map(|date| date.to_datetime(Time::midnight()))
        })
}
