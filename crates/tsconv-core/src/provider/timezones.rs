//! Time zone selector list.

use jiff::{
    tz::{Offset, TimeZone},
    Timestamp,
};
use log::{debug, warn};

use super::Provider;
use crate::{
    error::{ConvertError, Result},
    locale::Locale,
    models::{region_of, TimezoneOption},
};

/// Zones listed before all others, in this order.
pub const POPULAR_TIMEZONES: [&str; 15] = [
    "UTC",
    "Asia/Shanghai",
    "America/New_York",
    "Europe/London",
    "Asia/Tokyo",
    "Australia/Sydney",
    "America/Los_Angeles",
    "Europe/Paris",
    "Asia/Seoul",
    "Asia/Singapore",
    "America/Chicago",
    "Europe/Berlin",
    "Asia/Kolkata",
    "America/Sao_Paulo",
    "Africa/Cairo",
];

impl Provider {
    /// Builds the ordered selector list.
    ///
    /// Popular zones come first in their fixed order, then one disabled
    /// separator, then every other zone sorted by id. Labels carry the
    /// offset in effect at the provider's "now", not at the instant that is
    /// later converted. Falls back to a short static list when the database
    /// cannot be enumerated.
    pub fn timezones(&self) -> Vec<TimezoneOption> {
        match self.list_timezones() {
            Ok(options) => options,
            Err(e) => {
                warn!("Cannot enumerate time zones, using fallback list: {e}");
                fallback_timezones(self.locale)
            }
        }
    }

    fn list_timezones(&self) -> Result<Vec<TimezoneOption>> {
        let mut available: Vec<String> = jiff::tz::db()
            .available()
            .map(|name| name.as_str().to_string())
            .collect();
        if available.is_empty() {
            return Err(ConvertError::ZoneDatabase(
                "the database lists no zones".to_string(),
            ));
        }
        available.sort();
        available.dedup();

        let now = self.now();
        let mut options = Vec::with_capacity(available.len() + 1);

        for zone in POPULAR_TIMEZONES {
            if available.binary_search_by(|z| z.as_str().cmp(zone)).is_ok() {
                options.extend(self.zone_option(zone, now));
            }
        }

        options.push(TimezoneOption::separator(self.locale.separator_label()));

        options.extend(
            available
                .iter()
                .filter(|zone| !POPULAR_TIMEZONES.contains(&zone.as_str()))
                .filter_map(|zone| self.zone_option(zone, now)),
        );

        debug!("Listed {} time zone options", options.len());
        Ok(options)
    }

    fn zone_option(&self, zone: &str, now: Timestamp) -> Option<TimezoneOption> {
        let tz = match TimeZone::get(zone) {
            Ok(tz) => tz,
            Err(e) => {
                warn!("Skipping time zone {zone}: {e}");
                return None;
            }
        };
        let offset = offset_label(now.to_zoned(tz).offset());
        Some(TimezoneOption::zone(
            zone,
            format!("{} ({offset})", self.locale.friendly_name(zone)),
            Some(region_of(zone).to_string()),
        ))
    }
}

/// Long offset text: `GMT` for zero, otherwise `GMT±HH:MM` (with seconds
/// when the offset has them).
pub fn offset_label(offset: Offset) -> String {
    let total = offset.seconds();
    if total == 0 {
        return "GMT".to_string();
    }
    let sign = if total < 0 { '-' } else { '+' };
    let abs = total.unsigned_abs();
    let (hours, minutes, seconds) = (abs / 3600, abs % 3600 / 60, abs % 60);
    if seconds == 0 {
        format!("GMT{sign}{hours:02}:{minutes:02}")
    } else {
        format!("GMT{sign}{hours:02}:{minutes:02}:{seconds:02}")
    }
}

/// Static list used when the zone database is unusable.
pub fn fallback_timezones(locale: Locale) -> Vec<TimezoneOption> {
    const FALLBACK: [(&str, &str); 10] = [
        ("UTC", ""),
        ("Asia/Shanghai", "UTC+8"),
        ("America/New_York", "UTC-5/-4"),
        ("Europe/London", "UTC+0/+1"),
        ("Asia/Tokyo", "UTC+9"),
        ("Australia/Sydney", "UTC+10/+11"),
        ("America/Los_Angeles", "UTC-8/-7"),
        ("Europe/Paris", "UTC+1/+2"),
        ("Asia/Seoul", "UTC+9"),
        ("Asia/Singapore", "UTC+8"),
    ];

    FALLBACK
        .iter()
        .map(|(zone, offset)| {
            let name = locale.friendly_name(zone);
            let label = if offset.is_empty() {
                name
            } else {
                format!("{name} ({offset})")
            };
            TimezoneOption::zone(*zone, label, None)
        })
        .collect()
}
