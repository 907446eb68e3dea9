//! Markdown view of the interactive panel.

use std::fmt;

use super::status::OperationStatus;
use crate::{
    locale::Locale,
    panel::{BorderColor, PanelState},
};

/// Renders the whole panel state: inputs, result rows, reverse result and
/// the current toast.
pub struct PanelView<'a> {
    pub state: &'a PanelState,
    pub locale: Locale,
}

impl<'a> PanelView<'a> {
    pub fn new(state: &'a PanelState, locale: Locale) -> Self {
        Self { state, locale }
    }
}

impl fmt::Display for PanelView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state;

        let input = if state.timestamp_input.trim().is_empty() {
            "-"
        } else {
            state.timestamp_input.as_str()
        };
        let marker = match state.border {
            BorderColor::Neutral => "",
            BorderColor::Valid => " ✓",
            BorderColor::Invalid => " ✗",
        };
        writeln!(f, "- **Timestamp**: `{input}` ({}){marker}", state.unit)?;
        writeln!(f, "- **Time zone**: {}", state.timezone().unwrap_or("-"))?;
        if !state.datetime_input.is_empty() {
            writeln!(f, "- **Date-time**: {}", state.datetime_input)?;
        }

        writeln!(f)?;
        for (field, value) in state.results.rows() {
            writeln!(f, "- **{}**: {value}", field.label(self.locale))?;
        }

        if let Some(reverse) = &state.reverse {
            writeln!(f)?;
            write!(f, "{reverse}")?;
        }

        if let Some(toast) = &state.toast {
            writeln!(f)?;
            write!(f, "> {}", OperationStatus::from(toast))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::ReverseResult,
        panel::{Severity, Toast},
    };

    #[test]
    fn test_panel_view_blank_state() {
        let state = PanelState::default();
        let output = format!("{}", PanelView::new(&state, Locale::En));
        assert!(output.contains("- **Timestamp**: `-` (ms)"));
        assert!(output.contains("- **Standard**: -"));
        assert!(!output.contains("Relative"));
        assert!(!output.contains("> "));
    }

    #[test]
    fn test_panel_view_with_reverse_and_toast() {
        let state = PanelState {
            timestamp_input: "1700000000".to_string(),
            border: BorderColor::Valid,
            reverse: Some(ReverseResult::from_millis(1_000)),
            toast: Some(Toast {
                message: "Converted!".to_string(),
                severity: Severity::Success,
                generation: 1,
            }),
            ..PanelState::default()
        };
        let output = format!("{}", PanelView::new(&state, Locale::ZhCn));
        assert!(output.contains("`1700000000` (ms) ✓"));
        assert!(output.contains("- **标准格式**: -"));
        assert!(output.contains("- **Seconds**: `1`"));
        assert!(output.ends_with("> Success: Converted!\n"));
    }
}
