//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly; wrapper types add
//! context for a specific output (a conversion summary, a selector list, the
//! whole panel). Everything renders as markdown for the terminal renderer.
//!
//! ```text
//! ┌──────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models   │    │ Wrapper Types   │    │   Formatted     │
//! │ (FormattedResult)│───▶│ (ConvertResult, │───▶│    Output       │
//! │                  │    │  PanelView)     │    │   (Terminal)    │
//! └──────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (TimezoneList)
//! - [`results`]: Operation result types (ConvertResult, ReverseConvertResult,
//!   ValidationResult)
//! - [`status`]: Status messages (OperationStatus)
//! - [`panel`]: The interactive panel (PanelView)
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use tsconv_core::display::OperationStatus;
//!
//! let success = OperationStatus::success("Converted!".to_string());
//! assert_eq!(format!("{}", success), "Success: Converted!\n");
//! ```

pub mod collections;
pub mod models;
pub mod panel;
pub mod results;
pub mod status;

pub use collections::TimezoneList;
pub use panel::PanelView;
pub use results::{ConvertResult, ReverseConvertResult, ValidationResult};
pub use status::OperationStatus;
