//! User interface events.

use crate::models::TimestampUnit;

/// Everything the user can do to the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    ConvertClicked,
    CurrentTimeClicked,
    ClearClicked,
    ReverseConvertClicked,
    HotkeySettingsClicked,
    /// Enter pressed in the timestamp field
    TimestampEnter,
    /// Enter pressed in the date-time field
    DatetimeEnter,
    /// New content of the timestamp field
    TimestampEdited(String),
    /// New content of the date-time field
    DatetimeEdited(String),
    TimezoneChanged(String),
    UnitChanged(TimestampUnit),
}
