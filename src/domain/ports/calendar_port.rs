//! Calendar integration port definition.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::errors::IntegrationError;

/// Request to add an event to the guest's calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarRequest {
    pub event_name: String,
    /// Compact date, `YYYYMMDD`.
    pub date: String,
    /// Twelve hour clock time, e.g. `11:00 AM`.
    pub time: String,
    pub details: String,
    pub location: Option<String>,
}

impl CalendarRequest {
    #[must_use]
    pub fn new(
        event_name: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        let event_name = event_name.into();
        let details = format!("Join us for our 25th Wedding Anniversary - {event_name}");
        Self {
            event_name,
            date: date.into(),
            time: time.into(),
            details,
            location: None,
        }
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Port for calendar integrations.
#[async_trait]
pub trait CalendarPort: Send + Sync {
    /// Adds the event and returns where it was written.
    async fn add_event(&self, request: &CalendarRequest) -> Result<PathBuf, IntegrationError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use tokio::sync::Mutex;

    /// Calendar that keeps requests in memory.
    #[derive(Default)]
    pub struct MockCalendar {
        pub requests: Mutex<Vec<CalendarRequest>>,
        fail: bool,
    }

    impl MockCalendar {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing() -> Self {
            Self {
                requests: Mutex::default(),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl CalendarPort for MockCalendar {
        async fn add_event(&self, request: &CalendarRequest) -> Result<PathBuf, IntegrationError> {
            if self.fail {
                return Err(IntegrationError::export("read-only calendar"));
            }
            self.requests.lock().await.push(request.clone());
            Ok(PathBuf::from(format!("{}.ics", request.event_name)))
        }
    }
}
