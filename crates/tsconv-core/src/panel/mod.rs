//! Interactive converter panel.
//!
//! The panel is modelled without any UI toolkit: [`PanelState`] holds
//! everything a front end draws, [`UiEvent`] is everything a user can do,
//! and [`PanelController`] is the single context object that applies events
//! and host activations to the state.
//!
//! ```text
//!   user events ──▶ ┌─────────────────┐ ──▶ Provider
//!                   │ PanelController │
//! host actions ───▶ └─────────────────┘ ──▶ PanelState ──▶ front end
//!  (after 100 ms)          ▲
//!                          └── timers (activation delay, toast hide)
//! ```
//!
//! ## Submodules
//!
//! - [`controller`]: Event handling, conversions and timers
//! - [`state`]: Field contents, border color and phase
//! - [`schema`]: Ordered result rows
//! - [`select`]: Grouped time zone selector
//! - [`toast`]: Single-slot notifications
//! - [`events`]: User events

pub mod controller;
pub mod events;
pub mod schema;
pub mod select;
pub mod state;
pub mod toast;


pub use controller::{PanelController, PanelOptions, DEFAULT_TIMEZONE};
pub use events::UiEvent;
pub use schema::{ResultField, ResultPanel, BLANK};
pub use select::{SelectEntry, TimezoneSelect};
pub use state::{BorderColor, PanelPhase, PanelState};
pub use toast::{Notice, Severity, Toast, TOAST_DURATION};
