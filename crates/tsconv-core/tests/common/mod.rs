use std::time::Instant;

use jiff::{tz::TimeZone, Timestamp};
use tsconv_core::{HostLink, Locale, PanelController, PanelOptions, Provider, ProviderBuilder};

/// 2024-06-01T12:00:00Z in epoch seconds
pub const FIXED_NOW_SECONDS: i64 = 1_717_243_200;

/// Helper function to create a provider with a fixed clock and UTC as the
/// user's zone
pub fn create_test_provider(locale: Locale) -> Provider {
    ProviderBuilder::new()
        .with_locale(locale)
        .with_fixed_now(Timestamp::from_second(FIXED_NOW_SECONDS).expect("valid timestamp"))
        .with_local_timezone(Some(TimeZone::UTC))
        .build()
}

/// Helper function to create a panel over the test provider
#[allow(dead_code)]
pub fn create_test_panel(host: HostLink, options: PanelOptions) -> (PanelController, Instant) {
    let now = Instant::now();
    let controller = PanelController::new(create_test_provider(Locale::En), host, options, now);
    (controller, now)
}
