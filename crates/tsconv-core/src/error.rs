//! Error types for the conversion library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all conversion and panel operations.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The timestamp field was blank
    #[error("Please enter a timestamp")]
    InputEmpty,
    /// The timestamp field does not hold an integer
    #[error("'{input}' is not a valid number")]
    InputNotNumeric { input: String },
    /// The value cannot be turned into a representable instant
    #[error("Invalid timestamp: {value}")]
    InvalidTimestamp { value: String },
    /// The reverse-conversion input could not be parsed
    #[error("Invalid date-time format: '{input}'")]
    InvalidDateTime { input: String },
    /// Formatting in the requested time zone failed
    #[error("Cannot format timestamp in time zone {timezone}: {reason}")]
    TimezoneFormatting { timezone: String, reason: String },
    /// The zone database could not be enumerated
    #[error("Time zone database error: {0}")]
    ZoneDatabase(String),
    /// No host platform bridge is attached to the panel
    #[error("Host platform bridge is not available")]
    HostBridgeUnavailable,
    /// The host is attached but lacks the requested method
    #[error("Host capability '{capability}' is not available")]
    HostCapabilityMissing { capability: &'static str },
    /// A host method was present but failed
    #[error("Host call '{capability}' failed: {reason}")]
    HostCall {
        capability: &'static str,
        reason: String,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for time zone formatting errors.
pub struct TimezoneErrorBuilder {
    timezone: String,
}

impl TimezoneErrorBuilder {
    /// Create a new builder for the named zone.
    pub fn new(timezone: impl Into<String>) -> Self {
        Self {
            timezone: timezone.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl fmt::Display) -> ConvertError {
        ConvertError::TimezoneFormatting {
            timezone: self.timezone,
            reason: reason.to_string(),
        }
    }
}

impl ConvertError {
    /// Creates a builder for time zone formatting errors.
    pub fn timezone(timezone: impl Into<String>) -> TimezoneErrorBuilder {
        TimezoneErrorBuilder::new(timezone)
    }

    /// Creates an invalid timestamp error for any displayable value.
    pub fn invalid_timestamp(value: impl fmt::Display) -> Self {
        Self::InvalidTimestamp {
            value: value.to_string(),
        }
    }

    /// Creates an invalid date-time error for the given input.
    pub fn invalid_date_time(input: impl Into<String>) -> Self {
        Self::InvalidDateTime {
            input: input.into(),
        }
    }

    /// Whether the error was caused by the user's input rather than by the
    /// environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InputEmpty
                | Self::InputNotNumeric { .. }
                | Self::InvalidTimestamp { .. }
                | Self::InvalidDateTime { .. }
        )
    }
}

/// Extension trait mapping `jiff` failures onto time zone errors.
pub trait TimezoneResultExt<T> {
    /// Map any error into [`ConvertError::TimezoneFormatting`] for `timezone`.
    fn tz_context(self, timezone: &str) -> Result<T>;
}

impl<T, E> TimezoneResultExt<T> for std::result::Result<T, E>
where
    E: fmt::Display,
{
    fn tz_context(self, timezone: &str) -> Result<T> {
        self.map_err(|e| ConvertError::timezone(timezone).with_reason(e))
    }
}

/// Extension trait for configuration-related Results.
pub trait ConfigResultExt<T> {
    /// Map errors into [`ConvertError::Configuration`] with a message.
    fn config_context(self, message: &str) -> Result<T>;
}

impl<T, E> ConfigResultExt<T> for std::result::Result<T, E>
where
    E: fmt::Display,
{
    fn config_context(self, message: &str) -> Result<T> {
        self.map_err(|e| ConvertError::Configuration {
            message: format!("{}: {}", message, e),
        })
    }
}

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timezone_builder_names_zone() {
        let err = ConvertError::timezone("Not/AZone").with_reason("unknown zone");
        let msg = err.to_string();
        assert!(msg.contains("Not/AZone"));
        assert!(msg.contains("unknown zone"));
    }

    #[test]
    fn test_tz_context_maps_error() {
        let res: std::result::Result<(), String> = Err("boom".to_string());
        let err = res.tz_context("Mars/Base").unwrap_err();
        assert!(matches!(err, ConvertError::TimezoneFormatting { ref timezone, .. } if timezone == "Mars/Base"));
    }

    #[test]
    fn test_input_error_classification() {
        assert!(ConvertError::InputEmpty.is_input_error());
        assert!(ConvertError::invalid_date_time("x").is_input_error());
        assert!(!ConvertError::HostBridgeUnavailable.is_input_error());
    }
}
