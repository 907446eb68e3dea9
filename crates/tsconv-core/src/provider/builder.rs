//! Builder for creating and configuring Provider instances.

use jiff::{tz::TimeZone, Timestamp};

use super::{Clock, Provider};
use crate::{config::Config, locale::Locale};

/// Builder for creating and configuring Provider instances.
#[derive(Debug, Clone, Default)]
pub struct ProviderBuilder {
    locale: Locale,
    clock: Clock,
    local_tz: Option<TimeZone>,
}

impl ProviderBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the builder from a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new().with_locale(config.locale)
    }

    /// Sets the output locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Pins "now" to a fixed instant.
    pub fn with_fixed_now(mut self, now: Timestamp) -> Self {
        self.clock = Clock::Fixed(now);
        self
    }

    /// Overrides the zone used for civil date-times and the user zone.
    ///
    /// If not specified, the system zone is used.
    pub fn with_local_timezone(mut self, tz: Option<TimeZone>) -> Self {
        if let Some(tz) = tz {
            self.local_tz = Some(tz);
        }
        self
    }

    /// Builds the configured provider.
    pub fn build(self) -> Provider {
        Provider::new(self.locale, self.clock, self.local_tz)
    }
}
