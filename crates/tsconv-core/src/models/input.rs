//! Parsed timestamp input.

use serde::{Deserialize, Serialize};

use super::TimestampUnit;
use crate::error::{ConvertError, Result};

/// Smallest accepted timestamp, 1970-01-01T00:00:00Z in milliseconds.
pub const MIN_TIMESTAMP_MS: i64 = 0;

/// Largest accepted timestamp, 2100-01-01T00:00:00Z in milliseconds.
pub const MAX_TIMESTAMP_MS: i64 = 4_102_444_800_000;

/// A timestamp typed by the user together with its unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimestampInput {
    pub value: i64,
    pub unit: TimestampUnit,
}

impl TimestampInput {
    pub fn new(value: i64, unit: TimestampUnit) -> Self {
        Self { value, unit }
    }

    /// Parse trimmed field text.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::InputEmpty` for blank text and
    /// `ConvertError::InputNotNumeric` when the text is not an integer.
    pub fn parse(text: &str, unit: TimestampUnit) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ConvertError::InputEmpty);
        }
        let value = parse_integer(trimmed).ok_or_else(|| ConvertError::InputNotNumeric {
            input: trimmed.to_string(),
        })?;
        Ok(Self { value, unit })
    }

    /// The value normalized to milliseconds, if it fits in an `i64`.
    pub fn as_millis(&self) -> Option<i64> {
        self.unit.to_millis(self.value)
    }

    /// Whether the normalized value lies within the accepted range.
    pub fn is_in_range(&self) -> bool {
        self.as_millis()
            .is_some_and(|ms| (MIN_TIMESTAMP_MS..=MAX_TIMESTAMP_MS).contains(&ms))
    }
}

/// Strict integer parsing: optional sign followed by ASCII digits only.
fn parse_integer(text: &str) -> Option<i64> {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_whitespace() {
        let input = TimestampInput::parse("  1700000000 \n", TimestampUnit::Seconds).unwrap();
        assert_eq!(input.value, 1_700_000_000);
        assert_eq!(input.as_millis(), Some(1_700_000_000_000));
    }

    #[test]
    fn test_parse_empty_and_non_numeric() {
        assert!(matches!(
            TimestampInput::parse("   ", TimestampUnit::Seconds),
            Err(ConvertError::InputEmpty)
        ));
        assert!(matches!(
            TimestampInput::parse("12ab", TimestampUnit::Seconds),
            Err(ConvertError::InputNotNumeric { .. })
        ));
        assert!(matches!(
            TimestampInput::parse("-", TimestampUnit::Seconds),
            Err(ConvertError::InputNotNumeric { .. })
        ));
    }

    #[test]
    fn test_range_bounds() {
        assert!(TimestampInput::new(0, TimestampUnit::Milliseconds).is_in_range());
        assert!(TimestampInput::new(MAX_TIMESTAMP_MS, TimestampUnit::Milliseconds).is_in_range());
        assert!(!TimestampInput::new(MAX_TIMESTAMP_MS + 1, TimestampUnit::Milliseconds).is_in_range());
        assert!(TimestampInput::new(4_102_444_800, TimestampUnit::Seconds).is_in_range());
        assert!(!TimestampInput::new(4_102_444_801, TimestampUnit::Seconds).is_in_range());
        assert!(!TimestampInput::new(-1, TimestampUnit::Seconds).is_in_range());
    }

    #[test]
    fn test_seconds_overflow_is_out_of_range() {
        let input = TimestampInput::new(i64::MAX, TimestampUnit::Seconds);
        assert_eq!(input.as_millis(), None);
        assert!(!input.is_in_range());
    }
}
