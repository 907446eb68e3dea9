//! Relative time phrases.

use jiff::Timestamp;

use super::Provider;
use crate::locale::RelativeUnit;

const SECOND_MS: i64 = 1000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Fixed-length buckets, largest first. Months are 30 days and years 365
/// days; no calendar adjustment is applied.
const BUCKETS: [(RelativeUnit, i64); 6] = [
    (RelativeUnit::Year, 365 * DAY_MS),
    (RelativeUnit::Month, 30 * DAY_MS),
    (RelativeUnit::Day, DAY_MS),
    (RelativeUnit::Hour, HOUR_MS),
    (RelativeUnit::Minute, MINUTE_MS),
    (RelativeUnit::Second, SECOND_MS),
];

impl Provider {
    /// Describes `instant` relative to the provider's "now".
    ///
    /// Picks the largest bucket the difference fills at least once and
    /// phrases the floored count; anything under a second is "just now".
    pub fn relative_time(&self, instant: Timestamp) -> String {
        let diff = instant.as_millisecond() - self.now().as_millisecond();
        let magnitude = diff.abs();

        for (unit, size) in BUCKETS {
            let count = magnitude / size;
            if count >= 1 {
                let signed = if diff > 0 { count } else { -count };
                return self.locale.relative(signed, unit);
            }
        }

        self.locale.just_now().to_string()
    }
}
