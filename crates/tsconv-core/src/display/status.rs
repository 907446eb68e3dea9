//! Status and confirmation message types for operation feedback.

use std::fmt;

use crate::panel::{Severity, Toast};

/// Wrapper type for displaying a one-line status message.
pub struct OperationStatus {
    pub message: String,
    pub severity: Severity,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            severity: Severity::Success,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            severity: Severity::Error,
        }
    }

    pub fn warning(message: String) -> Self {
        Self {
            message,
            severity: Severity::Warning,
        }
    }

    pub fn info(message: String) -> Self {
        Self {
            message,
            severity: Severity::Info,
        }
    }

    pub fn is_success(&self) -> bool {
        self.severity == Severity::Success
    }
}

impl From<&Toast> for OperationStatus {
    fn from(toast: &Toast) -> Self {
        Self {
            message: toast.message.clone(),
            severity: toast.severity,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.severity {
            Severity::Success => "Success:",
            Severity::Error => "Error:",
            Severity::Warning => "Warning:",
            Severity::Info => "Info:",
        };
        writeln!(f, "{prefix} {}", self.message)
    }
}
