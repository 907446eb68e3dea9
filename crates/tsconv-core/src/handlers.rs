//! Core handler functions for the one-shot operations.
//!
//! Each handler takes a [`Provider`] and a parameter struct from
//! [`crate::params`] and returns structured data; formatting is left to the
//! caller through [`crate::display`] or serde.
//!
//! ```text
//! Interface → Handler → Provider → Models
//! ```
//!
//! # Examples
//!
//! ```rust
//! use tsconv_core::{
//!     handlers::handle_convert,
//!     models::TimestampUnit,
//!     params::ConvertTimestamp,
//!     ProviderBuilder,
//! };
//!
//! let provider = ProviderBuilder::new().build();
//! let params = ConvertTimestamp {
//!     timestamp: "1700000000".to_string(),
//!     unit: TimestampUnit::Seconds,
//!     timezone: Some("UTC".to_string()),
//! };
//! let result = handle_convert(&provider, &params).unwrap();
//! assert_eq!(result.unix_ms, 1_700_000_000_000);
//! ```

use log::debug;

use crate::{
    models::{
        FormattedResult, MultiZoneResults, PluginInfo, ReverseResult, TimestampInput,
        TimestampUnit, TimezoneOption, TimezoneSupport,
    },
    params::{
        ConvertTimestamp, CurrentTime, ListTimezones, MultiConvert, ReverseConvert,
        ValidateTimestamp,
    },
    Provider, Result,
};

fn zone_or_user(provider: &Provider, timezone: Option<&str>) -> String {
    timezone
        .map(str::to_string)
        .unwrap_or_else(|| provider.user_timezone())
}

/// Handle formatting a timestamp.
///
/// # Errors
///
/// Returns an input error for blank or non-numeric text, otherwise whatever
/// [`Provider::format_timestamp`] reports.
pub fn handle_convert(provider: &Provider, params: &ConvertTimestamp) -> Result<FormattedResult> {
    let input = TimestampInput::parse(&params.timestamp, params.unit)?;
    let timezone = zone_or_user(provider, params.timezone.as_deref());
    debug!("Converting {} {} in {timezone}", input.value, input.unit);
    provider.format_timestamp(input.value, input.unit, &timezone)
}

/// Handle formatting the current time.
pub fn handle_now(provider: &Provider, params: &CurrentTime) -> Result<FormattedResult> {
    let timezone = zone_or_user(provider, params.timezone.as_deref());
    provider.format_timestamp(
        provider.current_timestamp(),
        TimestampUnit::Milliseconds,
        &timezone,
    )
}

/// Handle converting a date-time string into milliseconds and seconds.
///
/// # Errors
///
/// Returns `ConvertError::TimezoneFormatting` for an unknown zone and
/// `ConvertError::InvalidDateTime` when the text cannot be parsed.
pub fn handle_reverse(provider: &Provider, params: &ReverseConvert) -> Result<ReverseResult> {
    let ms = match &params.timezone {
        Some(zone) => {
            let tz = provider.resolve_timezone(zone)?;
            provider.date_to_timestamp_in(&params.datetime, &tz)?
        }
        None => provider.date_to_timestamp(&params.datetime)?,
    };
    Ok(ReverseResult::from_millis(ms))
}

/// Handle formatting one timestamp in several zones.
///
/// Only the input itself can fail; zone failures are reported per zone.
pub fn handle_multi(provider: &Provider, params: &MultiConvert) -> Result<MultiZoneResults> {
    let input = TimestampInput::parse(&params.timestamp, params.unit)?;
    Ok(provider.convert_to_multiple_timezones(input.value, input.unit, &params.timezones))
}

/// Handle listing selector entries.
///
/// With `popular` only the entries before the separator are returned. A
/// filter drops separators and keeps zones whose id or label contains it.
pub fn handle_list_timezones(provider: &Provider, params: &ListTimezones) -> Vec<TimezoneOption> {
    let mut options = provider.timezones();

    if params.popular {
        if let Some(end) = options.iter().position(TimezoneOption::is_separator) {
            options.truncate(end);
        }
    }

    if let Some(filter) = params.filter.as_deref().map(str::to_lowercase) {
        options.retain(|option| {
            !option.is_separator()
                && (option.value.to_lowercase().contains(&filter)
                    || option.label.to_lowercase().contains(&filter))
        });
    }

    options
}

/// Handle a timestamp range check.
pub fn handle_validate(provider: &Provider, params: &ValidateTimestamp) -> bool {
    provider.is_valid_timestamp(&params.timestamp, params.unit)
}

pub fn handle_support(provider: &Provider) -> TimezoneSupport {
    provider.timezone_support()
}

pub fn handle_info(provider: &Provider) -> PluginInfo {
    provider.plugin_info()
}

#[cfg(test)]
mod tests {
    use jiff::{tz::TimeZone, Timestamp};

    use super::*;
    use crate::{error::ConvertError, provider::POPULAR_TIMEZONES, ProviderBuilder};

    fn create_test_provider() -> Provider {
        ProviderBuilder::new()
            .with_fixed_now(Timestamp::from_second(1_717_243_200).unwrap())
            .with_local_timezone(Some(TimeZone::UTC))
            .build()
    }

    #[test]
    fn test_handle_convert_defaults_to_user_zone() {
        let provider = create_test_provider();
        let params = ConvertTimestamp {
            timestamp: " 1609459200 ".to_string(),
            unit: TimestampUnit::Seconds,
            timezone: None,
        };
        let result = handle_convert(&provider, &params).unwrap();
        assert_eq!(result.timezone, "UTC");
        assert_eq!(result.standard, "2021-01-01 00:00:00");
    }

    #[test]
    fn test_handle_convert_rejects_bad_input() {
        let provider = create_test_provider();
        let mut params = ConvertTimestamp::default();
        assert!(matches!(
            handle_convert(&provider, &params),
            Err(ConvertError::InputEmpty)
        ));

        params.timestamp = "12abc".to_string();
        assert!(matches!(
            handle_convert(&provider, &params),
            Err(ConvertError::InputNotNumeric { .. })
        ));
    }

    #[test]
    fn test_handle_now() {
        let provider = create_test_provider();
        let params = CurrentTime {
            timezone: Some("Asia/Tokyo".to_string()),
        };
        let result = handle_now(&provider, &params).unwrap();
        assert_eq!(result.unix_ms, 1_717_243_200_000);
        assert_eq!(result.standard, "2024-06-01 21:00:00");
        assert_eq!(result.relative, "just now");
    }

    #[test]
    fn test_handle_reverse_with_zone() {
        let provider = create_test_provider();
        let params = ReverseConvert {
            datetime: "2021-01-01 08:00:00".to_string(),
            timezone: Some("Asia/Shanghai".to_string()),
        };
        let result = handle_reverse(&provider, &params).unwrap();
        assert_eq!(result.seconds, 1_609_459_200);

        let params = ReverseConvert {
            datetime: "2021-01-01".to_string(),
            timezone: Some("Not/AZone".to_string()),
        };
        assert!(matches!(
            handle_reverse(&provider, &params),
            Err(ConvertError::TimezoneFormatting { .. })
        ));
    }

    #[test]
    fn test_handle_multi() {
        let provider = create_test_provider();
        let params = MultiConvert {
            timestamp: "1700000000".to_string(),
            unit: TimestampUnit::Seconds,
            timezones: vec!["UTC".to_string(), "Not/AZone".to_string()],
        };
        let results = handle_multi(&provider, &params).unwrap();
        assert!(results.get("UTC").unwrap().result().is_some());
        assert!(results.get("Not/AZone").unwrap().error().is_some());
    }

    #[test]
    fn test_handle_list_timezones_popular() {
        let provider = create_test_provider();
        let params = ListTimezones {
            popular: true,
            filter: None,
        };
        let options = handle_list_timezones(&provider, &params);
        let values: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, POPULAR_TIMEZONES);
    }

    #[test]
    fn test_handle_list_timezones_filter() {
        let provider = create_test_provider();
        let params = ListTimezones {
            popular: false,
            filter: Some("TOKYO".to_string()),
        };
        let options = handle_list_timezones(&provider, &params);
        assert!(!options.is_empty());
        assert!(options.iter().all(|o| !o.is_separator()));
        assert!(options.iter().any(|o| o.value == "Asia/Tokyo"));
    }

    #[test]
    fn test_handle_validate() {
        let provider = create_test_provider();
        let mut params = ValidateTimestamp {
            timestamp: "4102444800".to_string(),
            unit: TimestampUnit::Seconds,
        };
        assert!(handle_validate(&provider, &params));
        params.timestamp = "4102444801".to_string();
        assert!(!handle_validate(&provider, &params));
    }
}
