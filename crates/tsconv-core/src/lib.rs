//! Core library for the tsconv timestamp converter.
//!
//! This crate converts epoch timestamps to formatted date-times in any IANA
//! time zone and back, and models the interactive converter panel that sits
//! on top of those conversions.
//!
//! # Architecture
//!
//! - **Provider** ([`provider`]): Formatting, parsing, zone listing and
//!   relative phrases, backed by `jiff`
//! - **Panel** ([`panel`]): UI state, events, toasts and timers driven by the
//!   [`PanelController`]
//! - **Host bridge** ([`host`], [`lifecycle`]): Optional launcher
//!   capabilities and activation handling
//! - **Display** ([`display`]): Markdown rendering of results and the panel
//! - **Handlers** ([`handlers`]): One-shot operations taking [`params`]
//!
//! # Quick Start
//!
//! ```rust
//! use tsconv_core::{models::TimestampUnit, ProviderBuilder};
//!
//! let provider = ProviderBuilder::new().build();
//!
//! let result = provider
//!     .format_timestamp(1_700_000_000, TimestampUnit::Seconds, "Asia/Shanghai")
//!     .unwrap();
//! assert_eq!(result.standard, "2023-11-15 06:13:20");
//! assert_eq!(result.timezone_offset, "GMT+08:00");
//!
//! let ms = provider
//!     .date_to_timestamp_in("2023-11-14 22:13:20", &jiff::tz::TimeZone::UTC)
//!     .unwrap();
//! assert_eq!(ms, 1_700_000_000_000);
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod handlers;
pub mod host;
pub mod lifecycle;
pub mod locale;
pub mod models;
pub mod panel;
pub mod params;
pub mod provider;

// Re-export commonly used types
pub use config::Config;
pub use display::{
    ConvertResult, OperationStatus, PanelView, ReverseConvertResult, TimezoneList,
    ValidationResult,
};
pub use error::{ConvertError, Result};
pub use host::{Host, HostLink, HotkeySettings, LastPluginEnterAction, PluginAction};
pub use lifecycle::{Activation, Attachment, LifecycleBridge};
pub use locale::Locale;
pub use models::{
    FormattedResult, MultiZoneResults, ReverseResult, TimestampUnit, TimezoneOption,
    ZoneConversion,
};
pub use panel::{PanelController, PanelOptions, UiEvent};
pub use params::{
    ConvertTimestamp, CurrentTime, ListTimezones, MultiConvert, ReverseConvert,
    ValidateTimestamp,
};
pub use provider::{Provider, ProviderBuilder};
