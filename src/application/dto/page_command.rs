//! Page commands and their outcomes.

use crate::domain::entities::{EventId, RsvpResponse};
use crate::domain::{Acknowledgment, CalendarRequest};

/// A user intent addressed to the page controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCommand {
    /// Record an RSVP response for one event.
    RecordRsvp {
        event: EventId,
        response: RsvpResponse,
    },
    /// Ask for the event to be added to a calendar.
    AddToCalendar {
        event_name: String,
        date: String,
        time: String,
        location: Option<String>,
    },
    /// Open map directions to an address.
    OpenDirections { address: String },
    /// Ask for the invitation card.
    DownloadInvitation,
}

impl PageCommand {
    /// Returns a short name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RecordRsvp { .. } => "record_rsvp",
            Self::AddToCalendar { .. } => "add_to_calendar",
            Self::OpenDirections { .. } => "open_directions",
            Self::DownloadInvitation => "download_invitation",
        }
    }
}

/// Effects produced by dispatching a command.
#[derive(Debug, Default)]
pub struct DispatchOutcome {
    /// Acknowledgment to show the guest.
    pub acknowledgment: Option<Acknowledgment>,
    /// Calendar work to hand to the background worker.
    pub calendar_request: Option<CalendarRequest>,
}

impl DispatchOutcome {
    #[must_use]
    pub fn acknowledged(acknowledgment: Acknowledgment) -> Self {
        Self {
            acknowledgment: Some(acknowledgment),
            calendar_request: None,
        }
    }

    #[must_use]
    pub fn with_calendar_request(mut self, request: CalendarRequest) -> Self {
        self.calendar_request = Some(request);
        self
    }
}
