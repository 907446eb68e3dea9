//! Panel state.

use serde::Serialize;

use super::{schema::ResultPanel, select::TimezoneSelect, toast::Toast};
use crate::models::{ReverseResult, TimestampUnit};

/// Border color of the timestamp field after live validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum BorderColor {
    /// Empty field
    #[default]
    Neutral,
    Valid,
    Invalid,
}

impl BorderColor {
    pub fn hex(&self) -> &'static str {
        match self {
            BorderColor::Neutral => "#e0e6ed",
            BorderColor::Valid => "#27ae60",
            BorderColor::Invalid => "#e74c3c",
        }
    }
}

/// Outcome of the last operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PanelPhase {
    #[default]
    Idle,
    Validating,
    Converted,
    Failed,
}

/// Everything the panel shows.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PanelState {
    pub timestamp_input: String,
    pub unit: TimestampUnit,
    pub zones: TimezoneSelect,
    pub datetime_input: String,
    pub border: BorderColor,
    pub toast: Option<Toast>,
    pub results: ResultPanel,
    /// Reverse conversion result; `None` keeps the reverse panel hidden
    pub reverse: Option<ReverseResult>,
    pub phase: PanelPhase,
}

impl PanelState {
    /// Zone selected in the selector.
    pub fn timezone(&self) -> Option<&str> {
        self.zones.selected()
    }
}
