//! Errors raised at the external collaborator boundaries.

use thiserror::Error;

/// Failures of the map, calendar and notification collaborators.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum IntegrationError {
    #[error("could not open browser for {url}: {message}")]
    BrowserUnavailable { url: String, message: String },

    #[error("invalid calendar date {value:?}: {reason}")]
    InvalidDate { value: String, reason: String },

    #[error("invalid calendar time {value:?}: {reason}")]
    InvalidTime { value: String, reason: String },

    #[error("calendar export failed: {message}")]
    CalendarExport { message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntegrationError {
    /// Creates browser unavailable error.
    #[must_use]
    pub fn browser(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BrowserUnavailable {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates calendar export error.
    #[must_use]
    pub fn export(message: impl Into<String>) -> Self {
        Self::CalendarExport {
            message: message.into(),
        }
    }

    /// Returns a short title for the warning toast.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::BrowserUnavailable { .. } => "Directions",
            Self::InvalidDate { .. }
            | Self::InvalidTime { .. }
            | Self::CalendarExport { .. }
            | Self::Io(_) => "Calendar",
        }
    }
}
