//! The panel controller.

use std::time::Instant;

use log::{debug, info, warn};

use super::{
    events::UiEvent,
    select::TimezoneSelect,
    state::{BorderColor, PanelPhase, PanelState},
    toast::{Notice, Severity, Toast, TOAST_DURATION},
};
use crate::{
    error::ConvertError,
    host::{HostLink, PluginAction, HOTKEY_SECTION},
    lifecycle::{Activation, ACTIVATION_DELAY},
    models::{ReverseResult, TimestampInput, TimestampUnit},
    provider::Provider,
};

/// Zone selected when neither the configuration nor the user's zone is
/// offered by the selector.
pub const DEFAULT_TIMEZONE: &str = "Asia/Shanghai";

/// Initial selections.
#[derive(Debug, Clone, Default)]
pub struct PanelOptions {
    pub unit: TimestampUnit,
    /// Preferred zone; wins over the user's zone when the selector has it
    pub timezone: Option<String>,
}

/// Work scheduled for a later instant.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Deferred {
    HideToast(u64),
    Activate(PluginAction),
}

/// Owns the panel state and runs every user and host action against the
/// provider.
///
/// Time never advances on its own: every method that shows a toast or
/// schedules work takes the current `Instant`, and the caller drives
/// [`PanelController::fire_due`] at [`PanelController::next_deadline`].
pub struct PanelController {
    provider: Provider,
    host: HostLink,
    state: PanelState,
    timers: Vec<(Instant, Deferred)>,
    toast_generation: u64,
}

impl PanelController {
    /// Creates the controller, fills the time zone selector and shows the
    /// welcome toast.
    pub fn new(provider: Provider, host: HostLink, options: PanelOptions, now: Instant) -> Self {
        let mut controller = Self {
            provider,
            host,
            state: PanelState {
                unit: options.unit,
                ..PanelState::default()
            },
            timers: Vec::new(),
            toast_generation: 0,
        };
        controller.init_timezones(options.timezone.as_deref(), now);
        controller
    }

    fn init_timezones(&mut self, preferred: Option<&str>, now: Instant) {
        let support = self.provider.timezone_support();
        if !support.time_zone_support {
            self.notify(Notice::PartialTimezoneSupport, now);
        }

        self.state.zones = TimezoneSelect::from_options(self.provider.timezones());

        let user_zone = self.provider.user_timezone();
        if let Some(zone) = preferred.filter(|zone| !self.state.zones.contains(zone)) {
            warn!("Configured time zone {zone} is not offered, ignoring it");
        }
        let zones = &mut self.state.zones;
        let chosen = [preferred, Some(user_zone.as_str()), Some(DEFAULT_TIMEZONE)]
            .into_iter()
            .flatten()
            .find(|zone| zones.select(zone));
        match chosen {
            Some(zone) => info!("Time zones initialized, current zone: {zone}"),
            None => warn!("No default time zone could be selected"),
        }

        let welcome = if support.supported_values_of {
            Notice::ZonesEnabled
        } else {
            Notice::BasicZones
        };
        self.notify(welcome, now);
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn provider(&self) -> &Provider {
        &self.provider
    }

    pub fn host(&self) -> &HostLink {
        &self.host
    }

    /// Zone used for conversions.
    pub fn timezone(&self) -> &str {
        self.state.timezone().unwrap_or(DEFAULT_TIMEZONE)
    }

    /// Applies a user event.
    pub fn handle(&mut self, event: UiEvent, now: Instant) {
        debug!("Panel event: {event:?}");
        match event {
            UiEvent::ConvertClicked | UiEvent::TimestampEnter => self.convert_timestamp(now),
            UiEvent::CurrentTimeClicked => self.fetch_current_timestamp(now),
            UiEvent::ClearClicked => self.clear_all(now),
            UiEvent::ReverseConvertClicked | UiEvent::DatetimeEnter => self.reverse_convert(now),
            UiEvent::HotkeySettingsClicked => self.open_hotkey_settings(now),
            UiEvent::TimestampEdited(text) => {
                self.state.timestamp_input = text;
                self.validate_timestamp_input();
            }
            UiEvent::DatetimeEdited(text) => self.state.datetime_input = text,
            UiEvent::TimezoneChanged(zone) => {
                if self.state.zones.select(&zone) {
                    self.reconvert(now);
                } else {
                    self.notify(Notice::UnknownTimezone(zone), now);
                }
            }
            UiEvent::UnitChanged(unit) => {
                self.state.unit = unit;
                self.reconvert(now);
            }
        }
    }

    fn reconvert(&mut self, now: Instant) {
        if !self.state.timestamp_input.trim().is_empty() {
            self.convert_timestamp(now);
        }
    }

    /// Converts the timestamp field with the selected unit and zone.
    pub fn convert_timestamp(&mut self, now: Instant) {
        self.state.phase = PanelPhase::Validating;

        let input = match TimestampInput::parse(&self.state.timestamp_input, self.state.unit) {
            Ok(input) => input,
            Err(e) => {
                debug!("Rejected timestamp input: {e}");
                let notice = match e {
                    ConvertError::InputEmpty => Notice::EnterTimestamp,
                    _ => Notice::EnterNumber,
                };
                self.state.phase = PanelPhase::Failed;
                self.notify(notice, now);
                return;
            }
        };

        let timezone = self.timezone().to_string();
        match self
            .provider
            .format_timestamp(input.value, input.unit, &timezone)
        {
            Ok(result) => {
                self.state.results.show(&result);
                self.state.phase = PanelPhase::Converted;
                self.notify(Notice::Converted, now);
            }
            Err(e) => {
                warn!("Conversion of {} failed: {e}", input.value);
                self.state.results.clear();
                self.state.phase = PanelPhase::Failed;
                self.notify(Notice::ConversionFailed(e.to_string()), now);
            }
        }
    }

    /// Converts the date-time field back into a timestamp.
    pub fn reverse_convert(&mut self, now: Instant) {
        let text = self.state.datetime_input.trim().to_string();
        if text.is_empty() {
            self.notify(Notice::EnterDateTime, now);
            return;
        }

        match self.provider.date_to_timestamp(&text) {
            Ok(ms) => {
                self.state.reverse = Some(ReverseResult::from_millis(ms));
                self.state.phase = PanelPhase::Converted;
                self.notify(Notice::ReverseConverted, now);
            }
            Err(e) => {
                self.state.reverse = None;
                self.state.phase = PanelPhase::Failed;
                self.notify(Notice::ConversionFailed(e.to_string()), now);
            }
        }
    }

    /// Puts the current epoch milliseconds into the timestamp field and
    /// converts it.
    pub fn fetch_current_timestamp(&mut self, now: Instant) {
        self.state.timestamp_input = self.provider.current_timestamp().to_string();
        self.validate_timestamp_input();
        self.convert_timestamp(now);
        self.notify(Notice::CurrentTimeFetched, now);
    }

    /// Blanks both inputs and every result.
    pub fn clear_all(&mut self, now: Instant) {
        self.state.timestamp_input.clear();
        self.state.datetime_input.clear();
        self.state.border = BorderColor::Neutral;
        self.state.results.clear();
        self.state.reverse = None;
        self.state.phase = PanelPhase::Idle;
        self.notify(Notice::Cleared, now);
    }

    /// Recolors the timestamp field border from its current content.
    pub fn validate_timestamp_input(&mut self) -> BorderColor {
        let text = self.state.timestamp_input.trim();
        self.state.border = if text.is_empty() {
            BorderColor::Neutral
        } else if self.provider.is_valid_timestamp(text, self.state.unit) {
            BorderColor::Valid
        } else {
            BorderColor::Invalid
        };
        self.state.border
    }

    /// Asks the host to open its hotkey settings on the convert section.
    pub fn open_hotkey_settings(&mut self, now: Instant) {
        let notice = match self.host.open_hotkey_settings(HOTKEY_SECTION) {
            Ok(()) => Notice::HotkeysOpened,
            Err(ConvertError::HostBridgeUnavailable) => Notice::HostUnavailable,
            Err(ConvertError::HostCapabilityMissing { .. }) => Notice::HotkeysUnsupported,
            Err(e) => Notice::HotkeysFailed(e.to_string()),
        };
        self.notify(notice, now);
    }

    /// Shows a toast, replacing the current one. It hides after
    /// [`TOAST_DURATION`] unless another toast replaces it first.
    pub fn show_toast(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        self.toast_generation += 1;
        self.state.toast = Some(Toast {
            message: message.into(),
            severity,
            generation: self.toast_generation,
        });
        self.timers
            .push((now + TOAST_DURATION, Deferred::HideToast(self.toast_generation)));
    }

    fn notify(&mut self, notice: Notice, now: Instant) {
        let message = notice.message(self.provider.locale());
        self.show_toast(message, notice.severity(), now);
    }

    /// Queues a host activation; it runs once [`ACTIVATION_DELAY`] has
    /// passed.
    pub fn receive_activation(&mut self, action: PluginAction, now: Instant) {
        debug!("Plugin-enter action received: {action:?}");
        self.timers
            .push((now + ACTIVATION_DELAY, Deferred::Activate(action)));
    }

    /// Runs a host activation right away.
    pub fn apply_activation(&mut self, action: &PluginAction, now: Instant) {
        self.state.border = BorderColor::Neutral;
        self.state.toast = None;
        self.state.results.clear_primary();

        match Activation::from(action) {
            Activation::Convert(payload) => {
                self.state.timestamp_input = payload;
                self.convert_timestamp(now);
            }
            Activation::CurrentTime => {
                self.state.timestamp_input = self.provider.current_timestamp().to_string();
                self.convert_timestamp(now);
            }
            Activation::Ignore => debug!("Ignoring plugin-enter action: {action:?}"),
        }
    }

    /// Earliest pending timer, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.iter().map(|(at, _)| *at).min()
    }

    /// Whether a host activation is still waiting for its delay.
    pub fn has_pending_activation(&self) -> bool {
        self.timers
            .iter()
            .any(|(_, task)| matches!(task, Deferred::Activate(_)))
    }

    /// Runs every timer due at `now`, earliest first. Returns whether
    /// anything ran.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        let mut fired = false;
        while let Some(index) = self.next_due(now) {
            let (_, task) = self.timers.remove(index);
            fired = true;
            match task {
                Deferred::HideToast(generation) => {
                    if self
                        .state
                        .toast
                        .as_ref()
                        .is_some_and(|toast| toast.generation == generation)
                    {
                        self.state.toast = None;
                    }
                }
                Deferred::Activate(action) => self.apply_activation(&action, now),
            }
        }
        fired
    }

    fn next_due(&self, now: Instant) -> Option<usize> {
        self.timers
            .iter()
            .enumerate()
            .filter(|(_, (at, _))| *at <= now)
            .min_by_key(|(_, (at, _))| *at)
            .map(|(index, _)| index)
    }
}
