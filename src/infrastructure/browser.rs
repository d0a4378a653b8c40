//! System browser adapter.

use tracing::debug;

use crate::domain::errors::IntegrationError;
use crate::domain::ports::BrowserPort;

/// Opens URLs in the platform's default browser.
#[derive(Debug, Clone, Default)]
pub struct SystemBrowser;

impl SystemBrowser {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl BrowserPort for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), IntegrationError> {
        debug!(url, "Launching system browser");
        opener::open_browser(url).map_err(|e| IntegrationError::browser(url, e.to_string()))
    }
}
