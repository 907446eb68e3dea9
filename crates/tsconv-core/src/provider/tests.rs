//! Tests for the provider module.

use jiff::{tz::TimeZone, Timestamp};

use super::*;
use crate::{
    error::ConvertError,
    models::{TimestampUnit, ZoneConversion},
};

const DAY_MS: i64 = 86_400_000;

/// 2024-06-01T12:00:00Z
fn fixed_now() -> Timestamp {
    Timestamp::from_second(1_717_243_200).unwrap()
}

/// Helper function to create a test provider with a fixed clock and UTC as
/// the local zone
fn create_test_provider() -> Provider {
    ProviderBuilder::new()
        .with_fixed_now(fixed_now())
        .with_local_timezone(Some(TimeZone::UTC))
        .build()
}

fn ms_from_now(provider: &Provider, delta: i64) -> Timestamp {
    Timestamp::from_millisecond(provider.current_timestamp() + delta).unwrap()
}

#[test]
fn test_current_timestamp_uses_clock() {
    let provider = create_test_provider();
    assert_eq!(provider.current_timestamp(), 1_717_243_200_000);
}

#[test]
fn test_is_valid_timestamp_bounds() {
    let provider = create_test_provider();
    let s = TimestampUnit::Seconds;
    let ms = TimestampUnit::Milliseconds;

    assert!(provider.is_valid_timestamp("0", ms));
    assert!(provider.is_valid_timestamp("4102444800000", ms));
    assert!(!provider.is_valid_timestamp("4102444800001", ms));
    assert!(provider.is_valid_timestamp("4102444800", s));
    assert!(!provider.is_valid_timestamp("4102444801", s));
    assert!(!provider.is_valid_timestamp("-1", s));
    assert!(!provider.is_valid_timestamp("abc", s));
    assert!(!provider.is_valid_timestamp("", s));
}

#[test]
fn test_format_epoch_iso() {
    let provider = create_test_provider();
    let result = provider
        .format_timestamp(0, TimestampUnit::Milliseconds, "UTC")
        .unwrap();
    assert_eq!(result.iso, "1970-01-01T00:00:00.000Z");
    assert_eq!(result.standard, "1970-01-01 00:00:00");
    assert_eq!(result.weekday, "Thursday");
    assert_eq!(result.timezone_offset, "GMT");
}

#[test]
fn test_format_unix_fields() {
    let provider = create_test_provider();
    let result = provider
        .format_timestamp(1_700_000_000, TimestampUnit::Seconds, "UTC")
        .unwrap();
    assert_eq!(result.unix, 1_700_000_000);
    assert_eq!(result.unix_ms, 1_700_000_000_000);
}

#[test]
fn test_format_new_year_2021() {
    let provider = create_test_provider();
    let result = provider
        .format_timestamp(1_609_459_200, TimestampUnit::Seconds, "UTC")
        .unwrap();
    assert_eq!(result.standard, "2021-01-01 00:00:00");
    assert_eq!(result.date, "2021-01-01");
    assert_eq!(result.time, "00:00:00");
    assert_eq!(result.weekday, "Friday");
    assert_eq!(result.iso, "2021-01-01T00:00:00.000Z");
    assert_eq!(result.timezone, "UTC");
    assert_eq!(result.timezone_short, "UTC");
}

#[test]
fn test_format_in_shanghai() {
    let provider = create_test_provider();
    let result = provider
        .format_timestamp(1_609_459_200_123, TimestampUnit::Milliseconds, "Asia/Shanghai")
        .unwrap();
    assert_eq!(result.standard, "2021-01-01 08:00:00");
    assert_eq!(result.iso, "2021-01-01T00:00:00.123Z");
    assert_eq!(result.timezone_offset, "GMT+08:00");
    assert_eq!(result.unix, 1_609_459_200);
}

#[test]
fn test_format_offset_tracks_converted_instant() {
    let provider = create_test_provider();
    // January: standard time; July: daylight time
    let winter = provider
        .format_timestamp(1_609_459_200, TimestampUnit::Seconds, "America/New_York")
        .unwrap();
    let summer = provider
        .format_timestamp(1_625_097_600, TimestampUnit::Seconds, "America/New_York")
        .unwrap();
    assert_eq!(winter.timezone_offset, "GMT-05:00");
    assert_eq!(summer.timezone_offset, "GMT-04:00");
    assert_eq!(winter.timezone_short, "EST");
    assert_eq!(summer.timezone_short, "EDT");
}

#[test]
fn test_format_chinese_locale() {
    let provider = ProviderBuilder::new()
        .with_locale(crate::Locale::ZhCn)
        .with_fixed_now(fixed_now())
        .build();
    let result = provider
        .format_timestamp(1_609_459_200, TimestampUnit::Seconds, "Asia/Shanghai")
        .unwrap();
    assert_eq!(result.standard, "2021/01/01 08:00:00");
    assert_eq!(result.date, "2021/01/01");
    assert_eq!(result.weekday, "星期五");
}

#[test]
fn test_format_invalid_zone_names_zone() {
    let provider = create_test_provider();
    let err = provider
        .format_timestamp(0, TimestampUnit::Seconds, "Not/AZone")
        .unwrap_err();
    assert!(
        matches!(err, ConvertError::TimezoneFormatting { ref timezone, .. } if timezone == "Not/AZone")
    );
    assert!(err.to_string().contains("Not/AZone"));
}

#[test]
fn test_format_unrepresentable_timestamp() {
    let provider = create_test_provider();
    let err = provider
        .format_timestamp(i64::MAX, TimestampUnit::Seconds, "UTC")
        .unwrap_err();
    assert!(matches!(err, ConvertError::InvalidTimestamp { .. }));

    let err = provider
        .format_timestamp(9_000_000_000_000_000, TimestampUnit::Milliseconds, "UTC")
        .unwrap_err();
    assert!(matches!(err, ConvertError::InvalidTimestamp { .. }));
}

#[test]
fn test_format_does_not_apply_range_check() {
    // Range validity is a UI concern; any representable instant formats.
    let provider = create_test_provider();
    let result = provider
        .format_timestamp(-86_400, TimestampUnit::Seconds, "UTC")
        .unwrap();
    assert_eq!(result.date, "1969-12-31");
    assert_eq!(result.unix, -86_400);
}

#[test]
fn test_relative_ninety_days_is_months() {
    let provider = create_test_provider();
    let past = ms_from_now(&provider, -90 * DAY_MS);
    assert_eq!(provider.relative_time(past), "3 months ago");
}

#[test]
fn test_relative_buckets() {
    let provider = create_test_provider();
    let cases = [
        (400 * DAY_MS, "next year"),
        (-800 * DAY_MS, "2 years ago"),
        (-29 * DAY_MS, "29 days ago"),
        (-DAY_MS, "yesterday"),
        (3 * 3_600_000, "in 3 hours"),
        (-59 * 60_000, "59 minutes ago"),
        (45_000, "in 45 seconds"),
        (999, "just now"),
        (0, "just now"),
    ];
    for (delta, expected) in cases {
        let instant = ms_from_now(&provider, delta);
        assert_eq!(provider.relative_time(instant), expected, "delta {delta}");
    }
}

#[test]
fn test_relative_in_formatted_result() {
    let provider = create_test_provider();
    let two_days_ago = provider.current_timestamp() - 2 * DAY_MS;
    let result = provider
        .format_timestamp(two_days_ago, TimestampUnit::Milliseconds, "UTC")
        .unwrap();
    assert_eq!(result.relative, "2 days ago");
}

#[test]
fn test_timezones_popular_prefix_then_separator() {
    let provider = create_test_provider();
    let options = provider.timezones();

    let prefix: Vec<&str> = options
        .iter()
        .take(POPULAR_TIMEZONES.len())
        .map(|o| o.value.as_str())
        .collect();
    assert_eq!(prefix, POPULAR_TIMEZONES.to_vec());

    let separator = &options[POPULAR_TIMEZONES.len()];
    assert!(separator.disabled);
    assert!(separator.value.is_empty());
    assert_eq!(options.iter().filter(|o| o.disabled).count(), 1);
}

#[test]
fn test_timezones_rest_sorted_without_duplicates() {
    let provider = create_test_provider();
    let options = provider.timezones();

    let rest: Vec<&str> = options
        .iter()
        .skip(POPULAR_TIMEZONES.len() + 1)
        .map(|o| o.value.as_str())
        .collect();
    assert!(!rest.is_empty());
    assert!(rest.windows(2).all(|w| w[0] < w[1]));
    assert!(rest.iter().all(|z| !POPULAR_TIMEZONES.contains(z)));

    let mut values: Vec<&str> = options
        .iter()
        .filter(|o| !o.disabled)
        .map(|o| o.value.as_str())
        .collect();
    let total = values.len();
    values.sort_unstable();
    values.dedup();
    assert_eq!(values.len(), total);
}

#[test]
fn test_timezone_labels_and_groups() {
    let provider = create_test_provider();
    let options = provider.timezones();

    let shanghai = options.iter().find(|o| o.value == "Asia/Shanghai").unwrap();
    assert_eq!(shanghai.label, "Beijing Time (GMT+08:00)");
    assert_eq!(shanghai.group.as_deref(), Some("Asia"));

    let utc = options.iter().find(|o| o.value == "UTC").unwrap();
    assert_eq!(utc.label, "UTC Coordinated Universal Time (GMT)");

    // Fixed "now" is in June: New York label shows daylight time.
    let new_york = options.iter().find(|o| o.value == "America/New_York").unwrap();
    assert_eq!(new_york.label, "New York Time (GMT-04:00)");
}

#[test]
fn test_convert_to_multiple_timezones_isolates_failures() {
    let provider = create_test_provider();
    let results = provider.convert_to_multiple_timezones(
        1_609_459_200,
        TimestampUnit::Seconds,
        &["Asia/Tokyo", "Not/AZone"],
    );

    assert_eq!(results.len(), 2);
    let tokyo = results.get("Asia/Tokyo").and_then(ZoneConversion::result).unwrap();
    assert_eq!(tokyo.standard, "2021-01-01 09:00:00");

    let failed = results.get("Not/AZone").unwrap();
    assert!(failed.result().is_none());
    assert!(failed.error().unwrap().contains("Not/AZone"));
}

#[test]
fn test_convert_to_multiple_timezones_serializes_as_object() {
    let provider = create_test_provider();
    let results =
        provider.convert_to_multiple_timezones(0, TimestampUnit::Seconds, &["UTC", "Bad/Zone"]);
    let json = serde_json::to_value(&results).unwrap();
    assert_eq!(json["UTC"]["iso"], "1970-01-01T00:00:00.000Z");
    assert_eq!(json["UTC"]["unixMs"], 0);
    assert!(json["Bad/Zone"]["error"].is_string());
}

#[test]
fn test_round_trip_standard_string() {
    let provider = create_test_provider();
    for ms in [0_i64, 1_609_459_200_000, 1_700_000_000_000, 4_102_444_799_000] {
        let result = provider
            .format_timestamp(ms, TimestampUnit::Milliseconds, "UTC")
            .unwrap();
        assert_eq!(provider.date_to_timestamp(&result.standard).unwrap(), ms);
    }
}

#[test]
fn test_round_trip_in_named_zone() {
    let provider = create_test_provider();
    let tz = TimeZone::get("Asia/Kolkata").unwrap();
    let result = provider
        .format_timestamp(1_700_000_000, TimestampUnit::Seconds, "Asia/Kolkata")
        .unwrap();
    assert_eq!(
        provider.date_to_timestamp_in(&result.standard, &tz).unwrap(),
        1_700_000_000_000
    );
}

#[test]
fn test_date_to_timestamp_invalid() {
    let provider = create_test_provider();
    assert!(matches!(
        provider.date_to_timestamp("yesterday-ish"),
        Err(ConvertError::InvalidDateTime { .. })
    ));
}

#[test]
fn test_user_timezone_from_override() {
    let provider = ProviderBuilder::new()
        .with_local_timezone(Some(TimeZone::get("Europe/Paris").unwrap()))
        .build();
    assert_eq!(provider.user_timezone(), "Europe/Paris");
}

#[test]
fn test_timezone_support_flags() {
    let provider = create_test_provider();
    let support = provider.timezone_support();
    assert!(support.supported_values_of);
    assert!(support.date_time_format);
    assert!(support.relative_time_format);
    assert!(support.time_zone_support);
}

#[test]
fn test_plugin_info() {
    let provider = create_test_provider();
    let info = provider.plugin_info();
    assert_eq!(info.name, "tsconv");
    assert!(!info.version.is_empty());
}
