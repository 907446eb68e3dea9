//! Timestamp → formatted result.

use std::fmt::Write;

use jiff::{tz::TimeZone, Timestamp, Zoned};
use log::warn;

use super::{timezones::offset_label, Provider};
use crate::{
    error::{ConvertError, Result, TimezoneResultExt},
    models::{FormattedResult, MultiZoneResults, TimestampUnit, ZoneConversion},
};

impl Provider {
    /// Formats a timestamp in the given zone.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::InvalidTimestamp` if the value does not map to
    /// a representable instant, and `ConvertError::TimezoneFormatting`
    /// naming the zone if the zone is unknown or rendering fails.
    pub fn format_timestamp(
        &self,
        value: i64,
        unit: TimestampUnit,
        timezone: &str,
    ) -> Result<FormattedResult> {
        let instant = to_instant(value, unit)?;
        let tz = TimeZone::get(timezone).tz_context(timezone)?;
        self.render(instant, tz, timezone)
    }

    fn render(&self, instant: Timestamp, tz: TimeZone, timezone: &str) -> Result<FormattedResult> {
        let zoned = instant.to_zoned(tz);
        let locale = self.locale;
        let ms = instant.as_millisecond();

        Ok(FormattedResult {
            standard: strftime(&zoned, locale.standard_pattern(), timezone)?,
            date: strftime(&zoned, locale.date_pattern(), timezone)?,
            time: strftime(&zoned, locale.time_pattern(), timezone)?,
            weekday: locale.weekday_name(zoned.weekday()).to_string(),
            iso: iso_string(instant)?,
            relative: self.relative_time(instant),
            timezone: timezone.to_string(),
            timezone_offset: offset_label(zoned.offset()),
            timezone_short: strftime(&zoned, "%Z", timezone)?,
            unix: ms.div_euclid(1000),
            unix_ms: ms,
        })
    }

    /// Formats one timestamp into several zones.
    ///
    /// A failing zone is recorded as `{ error }` in its own slot; the batch
    /// itself never fails. Repeated zone ids keep their first position.
    pub fn convert_to_multiple_timezones<S: AsRef<str>>(
        &self,
        value: i64,
        unit: TimestampUnit,
        timezones: &[S],
    ) -> MultiZoneResults {
        let mut results: Vec<(String, ZoneConversion)> = Vec::with_capacity(timezones.len());

        for zone in timezones.iter().map(AsRef::as_ref) {
            let outcome = match self.format_timestamp(value, unit, zone) {
                Ok(result) => ZoneConversion::Converted(result),
                Err(e) => {
                    warn!("Conversion into {zone} failed: {e}");
                    ZoneConversion::Failed {
                        error: e.to_string(),
                    }
                }
            };
            match results.iter_mut().find(|(name, _)| name == zone) {
                Some(slot) => slot.1 = outcome,
                None => results.push((zone.to_string(), outcome)),
            }
        }

        MultiZoneResults(results)
    }
}

/// Normalizes a value to an instant.
pub(crate) fn to_instant(value: i64, unit: TimestampUnit) -> Result<Timestamp> {
    let ms = unit
        .to_millis(value)
        .ok_or_else(|| ConvertError::invalid_timestamp(value))?;
    Timestamp::from_millisecond(ms).map_err(|_| ConvertError::invalid_timestamp(value))
}

/// ISO-8601 in UTC with exactly three fractional digits and a `Z` suffix.
fn iso_string(instant: Timestamp) -> Result<String> {
    let zoned = instant.to_zoned(TimeZone::UTC);
    let mut out = strftime(&zoned, "%Y-%m-%dT%H:%M:%S", "UTC")?;
    let millis = instant.as_millisecond().rem_euclid(1000);
    // Writing into a String cannot fail.
    let _ = write!(out, ".{millis:03}Z");
    Ok(out)
}

fn strftime(zoned: &Zoned, pattern: &str, timezone: &str) -> Result<String> {
    let mut out = String::new();
    write!(out, "{}", zoned.strftime(pattern)).map_err(|_| {
        ConvertError::timezone(timezone).with_reason(format!("cannot render '{pattern}'"))
    })?;
    Ok(out)
}
