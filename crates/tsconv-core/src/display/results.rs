//! Result wrapper types for displaying operation outcomes.
//!
//! These wrappers put a one-line summary of the request in front of the
//! rendered result.

use std::fmt;

use crate::models::{FormattedResult, ReverseResult, TimestampUnit};

/// Wrapper type for displaying a timestamp conversion.
///
/// # Examples
///
/// ```rust
/// use tsconv_core::{display::ConvertResult, models::TimestampUnit, ProviderBuilder};
///
/// let provider = ProviderBuilder::new().build();
/// let result = provider
///     .format_timestamp(1_609_459_200, TimestampUnit::Seconds, "UTC")
///     .unwrap();
/// let output = format!("{}", ConvertResult::new(1_609_459_200, TimestampUnit::Seconds, &result));
/// assert!(output.contains("Converted 1609459200 s"));
/// ```
pub struct ConvertResult<'a> {
    pub value: i64,
    pub unit: TimestampUnit,
    pub result: &'a FormattedResult,
}

impl<'a> ConvertResult<'a> {
    pub fn new(value: i64, unit: TimestampUnit, result: &'a FormattedResult) -> Self {
        Self {
            value,
            unit,
            result,
        }
    }
}

impl fmt::Display for ConvertResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Converted {} {} in {}",
            self.value, self.unit, self.result.timezone
        )?;
        writeln!(f)?;
        write!(f, "{}", self.result)
    }
}

/// Wrapper type for displaying a date-time → timestamp conversion.
pub struct ReverseConvertResult<'a> {
    pub input: &'a str,
    pub result: ReverseResult,
}

impl<'a> ReverseConvertResult<'a> {
    pub fn new(input: &'a str, result: ReverseResult) -> Self {
        Self { input, result }
    }
}

impl fmt::Display for ReverseConvertResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Converted '{}'", self.input)?;
        writeln!(f)?;
        write!(f, "{}", self.result)
    }
}

/// Wrapper type for displaying a range check.
pub struct ValidationResult<'a> {
    pub input: &'a str,
    pub unit: TimestampUnit,
    pub valid: bool,
}

impl<'a> ValidationResult<'a> {
    pub fn new(input: &'a str, unit: TimestampUnit, valid: bool) -> Self {
        Self { input, unit, valid }
    }
}

impl fmt::Display for ValidationResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            writeln!(
                f,
                "✓ {} {} is a valid timestamp (1970-01-01 to 2100-01-01)",
                self.input, self.unit
            )
        } else {
            writeln!(
                f,
                "✗ {} {} is not a valid timestamp (1970-01-01 to 2100-01-01)",
                self.input, self.unit
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_result_display() {
        let valid = ValidationResult::new("1700000000", TimestampUnit::Seconds, true);
        assert!(format!("{valid}").starts_with("✓ 1700000000 s"));

        let invalid = ValidationResult::new("-1", TimestampUnit::Milliseconds, false);
        assert!(format!("{invalid}").contains("is not a valid timestamp"));
    }

    #[test]
    fn test_reverse_convert_result_display() {
        let result = ReverseConvertResult::new(
            "2021-01-01 00:00:00",
            ReverseResult::from_millis(1_609_459_200_000),
        );
        let output = format!("{result}");
        assert!(output.starts_with("Converted '2021-01-01 00:00:00'"));
        assert!(output.contains("- **Seconds**: `1609459200`"));
    }
}
