//! User-visible acknowledgments.

use std::time::{Duration, Instant};

use super::entities::{EventId, RsvpResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcknowledgmentLevel {
    Info,
    Warn,
    Error,
}

/// A confirmation shown to the guest.
#[derive(Debug, Clone)]
pub struct Acknowledgment {
    pub level: AcknowledgmentLevel,
    pub title: String,
    pub message: String,
    pub created_at: Instant,
    pub displayed_at: Option<Instant>,
    pub duration: Duration,
}

impl Acknowledgment {
    #[must_use]
    pub fn new(
        level: AcknowledgmentLevel,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
            created_at: Instant::now(),
            displayed_at: None,
            duration: Duration::from_secs(5),
        }
    }

    /// Confirmation that a response was recorded for `event`.
    #[must_use]
    pub fn rsvp_recorded(event: EventId, response: RsvpResponse) -> Self {
        Self::new(
            AcknowledgmentLevel::Info,
            "RSVP",
            format!(
                "Thank you! Your response for {} has been recorded: {}",
                event.acknowledgment_label(),
                response
            ),
        )
    }

    /// Confirmation of a calendar request.
    #[must_use]
    pub fn calendar_requested(event_name: &str, date: &str, time: &str) -> Self {
        Self::new(
            AcknowledgmentLevel::Info,
            "Calendar",
            format!("Adding \"{event_name}\" to calendar for {date} at {time}"),
        )
    }

    #[must_use]
    pub fn download_requested() -> Self {
        Self::new(
            AcknowledgmentLevel::Info,
            "Invitation",
            "Downloading invitation card...",
        )
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.displayed_at
            .is_some_and(|start| start.elapsed() > self.duration)
    }

    pub fn mark_displayed(&mut self) {
        if self.displayed_at.is_none() {
            self.displayed_at = Some(Instant::now());
        }
    }
}
