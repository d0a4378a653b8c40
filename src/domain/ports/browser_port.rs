use crate::domain::errors::IntegrationError;

/// Port for opening external pages.
pub trait BrowserPort: Send + Sync {
    /// Opens `url` in a new browsing context.
    ///
    /// # Errors
    /// Returns error if no browser could be launched.
    fn open(&self, url: &str) -> Result<(), IntegrationError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Browser that records opened URLs, optionally failing every call.
    #[derive(Default, Clone)]
    pub struct MockBrowser {
        pub opened: Arc<Mutex<Vec<String>>>,
        fail: bool,
    }

    impl MockBrowser {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing() -> Self {
            Self {
                opened: Arc::default(),
                fail: true,
            }
        }

        pub fn urls(&self) -> Vec<String> {
            self.opened.lock().unwrap().clone()
        }
    }

    impl BrowserPort for MockBrowser {
        fn open(&self, url: &str) -> Result<(), IntegrationError> {
            if self.fail {
                return Err(IntegrationError::browser(url, "popup blocked"));
            }
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }
}
