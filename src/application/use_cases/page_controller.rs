//! Page controller: owns RSVP state and routes page commands.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::{DispatchOutcome, PageCommand};
use crate::application::services::{RsvpStore, maps_search_url};
use crate::domain::entities::{EventId, RsvpResponse, RsvpStatus};
use crate::domain::ports::BrowserPort;
use crate::domain::{Acknowledgment, AcknowledgmentLevel, CalendarRequest};

/// Owns the RSVP state of the page and performs its side effects.
pub struct PageController {
    store: RsvpStore,
    browser: Arc<dyn BrowserPort>,
    calendar_export: bool,
}

impl PageController {
    /// Creates a controller with every event unset.
    #[must_use]
    pub fn new(browser: Arc<dyn BrowserPort>) -> Self {
        Self::with_store(RsvpStore::new(), browser)
    }

    /// Creates a controller over an existing store.
    #[must_use]
    pub fn with_store(store: RsvpStore, browser: Arc<dyn BrowserPort>) -> Self {
        Self {
            store,
            browser,
            calendar_export: false,
        }
    }

    /// Forwards calendar requests to the exporter when enabled.
    #[must_use]
    pub const fn with_calendar_export(mut self, enabled: bool) -> Self {
        self.calendar_export = enabled;
        self
    }

    #[must_use]
    pub fn status(&self, event: EventId) -> RsvpStatus {
        self.store.status(event)
    }

    /// Returns both statuses in page order.
    #[must_use]
    pub fn snapshot(&self) -> [(EventId, RsvpStatus); 2] {
        self.store.snapshot()
    }

    #[must_use]
    pub const fn store(&self) -> &RsvpStore {
        &self.store
    }

    /// Routes `command` to the matching operation.
    pub fn dispatch(&mut self, command: PageCommand) -> DispatchOutcome {
        debug!(command = command.name(), "Dispatching page command");

        match command {
            PageCommand::RecordRsvp { event, response } => {
                DispatchOutcome::acknowledged(self.record_rsvp(event, response))
            }
            PageCommand::AddToCalendar {
                event_name,
                date,
                time,
                location,
            } => {
                let acknowledgment = self.request_add_to_calendar(&event_name, &date, &time);
                let outcome = DispatchOutcome::acknowledged(acknowledgment);

                if self.calendar_export {
                    let mut request = CalendarRequest::new(event_name, date, time);
                    if let Some(location) = location {
                        request = request.with_location(location);
                    }
                    outcome.with_calendar_request(request)
                } else {
                    outcome
                }
            }
            PageCommand::OpenDirections { address } => DispatchOutcome {
                acknowledgment: self.open_directions(&address),
                calendar_request: None,
            },
            PageCommand::DownloadInvitation => {
                info!("Invitation card requested");
                DispatchOutcome::acknowledged(Acknowledgment::download_requested())
            }
        }
    }

    /// Records `response` for `event` and returns the confirmation.
    pub fn record_rsvp(&mut self, event: EventId, response: RsvpResponse) -> Acknowledgment {
        let previous = self.store.record(event, response);

        if previous.is_unset() {
            info!(event = %event, response = %response, "RSVP recorded");
        } else {
            info!(
                event = %event,
                previous = %previous,
                response = %response,
                "RSVP overwritten"
            );
        }

        Acknowledgment::rsvp_recorded(event, response)
    }

    /// Returns the confirmation for a calendar request. State is untouched.
    #[must_use]
    pub fn request_add_to_calendar(
        &self,
        event_name: &str,
        date: &str,
        time: &str,
    ) -> Acknowledgment {
        info!(event = event_name, date, time, "Calendar add requested");
        Acknowledgment::calendar_requested(event_name, date, time)
    }

    /// Opens map directions to `address`.
    ///
    /// Returns a warning when no browser could be opened.
    pub fn open_directions(&self, address: &str) -> Option<Acknowledgment> {
        let url = maps_search_url(address);
        debug!(url = %url, "Opening directions");

        match self.browser.open(&url) {
            Ok(()) => None,
            Err(e) => {
                warn!(error = %e, "Failed to open directions");
                Some(Acknowledgment::new(
                    AcknowledgmentLevel::Warn,
                    e.title(),
                    format!("Could not open directions. Search for: {address}"),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockBrowser;

    const ADDRESS: &str = "Khalihan Luxury Farm Stay cafe & Restaurant";

    fn controller() -> (PageController, MockBrowser) {
        let browser = MockBrowser::new();
        (PageController::new(Arc::new(browser.clone())), browser)
    }

    fn record(event: EventId, response: RsvpResponse) -> PageCommand {
        PageCommand::RecordRsvp { event, response }
    }

    fn calendar_command() -> PageCommand {
        PageCommand::AddToCalendar {
            event_name: "Haldi Ceremony".to_string(),
            date: "20260214".to_string(),
            time: "11:00 AM".to_string(),
            location: Some(ADDRESS.to_string()),
        }
    }

    #[test]
    fn test_initial_state_is_unset() {
        let (controller, _) = controller();
        for id in EventId::ALL {
            assert_eq!(controller.status(id), RsvpStatus::Unset);
        }
    }

    #[test]
    fn test_record_rsvp_leaves_other_event_unchanged() {
        let (mut controller, _) = controller();

        let outcome = controller.dispatch(record(EventId::Haldi, RsvpResponse::Attending));

        assert_eq!(
            controller.status(EventId::Haldi),
            RsvpStatus::Responded(RsvpResponse::Attending)
        );
        assert_eq!(controller.status(EventId::Main), RsvpStatus::Unset);

        let ack = outcome.acknowledgment.unwrap();
        assert!(ack.message.contains("Haldi Ceremony"));
        assert!(ack.message.ends_with("Attending"));
        assert!(outcome.calendar_request.is_none());
    }

    #[test]
    fn test_record_rsvp_is_idempotent() {
        let (mut controller, _) = controller();

        controller.record_rsvp(EventId::Main, RsvpResponse::UnableToAttend);
        controller.record_rsvp(EventId::Main, RsvpResponse::UnableToAttend);

        assert_eq!(
            controller.status(EventId::Main),
            RsvpStatus::Responded(RsvpResponse::UnableToAttend)
        );
    }

    #[test]
    fn test_both_events_respond_independently() {
        let (mut controller, _) = controller();

        controller.dispatch(record(EventId::Haldi, RsvpResponse::Attending));
        let outcome = controller.dispatch(record(EventId::Main, RsvpResponse::UnableToAttend));

        assert_eq!(
            controller.snapshot(),
            [
                (EventId::Haldi, RsvpStatus::Responded(RsvpResponse::Attending)),
                (
                    EventId::Main,
                    RsvpStatus::Responded(RsvpResponse::UnableToAttend)
                ),
            ]
        );
        assert_eq!(
            outcome.acknowledgment.unwrap().message,
            "Thank you! Your response for Main Function has been recorded: Unable to Attend"
        );
    }

    #[test]
    fn test_calendar_request_does_not_touch_rsvp_state() {
        let (mut controller, _) = controller();
        controller.record_rsvp(EventId::Haldi, RsvpResponse::Attending);
        let before = controller.store().clone();

        let outcome = controller.dispatch(calendar_command());

        assert_eq!(controller.store(), &before);
        assert_eq!(
            outcome.acknowledgment.unwrap().message,
            "Adding \"Haldi Ceremony\" to calendar for 20260214 at 11:00 AM"
        );
        assert!(outcome.calendar_request.is_none());
    }

    #[test]
    fn test_calendar_request_forwarded_when_export_enabled() {
        let (controller, _) = controller();
        let mut controller = controller.with_calendar_export(true);

        let outcome = controller.dispatch(calendar_command());

        let request = outcome.calendar_request.unwrap();
        assert_eq!(request.event_name, "Haldi Ceremony");
        assert_eq!(request.time, "11:00 AM");
        assert_eq!(request.location.as_deref(), Some(ADDRESS));
    }

    #[test]
    fn test_directions_open_encoded_maps_url() {
        let (mut controller, browser) = controller();

        let outcome = controller.dispatch(PageCommand::OpenDirections {
            address: ADDRESS.to_string(),
        });

        assert!(outcome.acknowledgment.is_none());
        assert_eq!(
            browser.urls(),
            vec![
                "https://www.google.com/maps/search/?api=1&query=Khalihan%20Luxury%20Farm%20Stay%20cafe%20%26%20Restaurant"
                    .to_string()
            ]
        );
    }

    #[test]
    fn test_directions_failure_warns_without_state_change() {
        let mut controller = PageController::new(Arc::new(MockBrowser::failing()));
        controller.record_rsvp(EventId::Main, RsvpResponse::Attending);
        let before = controller.store().clone();

        let outcome = controller.dispatch(PageCommand::OpenDirections {
            address: ADDRESS.to_string(),
        });

        let ack = outcome.acknowledgment.unwrap();
        assert_eq!(ack.level, AcknowledgmentLevel::Warn);
        assert_eq!(ack.title, "Directions");
        assert_eq!(controller.store(), &before);
    }

    #[test]
    fn test_download_invitation_acknowledged() {
        let (mut controller, _) = controller();
        let outcome = controller.dispatch(PageCommand::DownloadInvitation);
        assert_eq!(
            outcome.acknowledgment.unwrap().message,
            "Downloading invitation card..."
        );
        assert_eq!(controller.store().responded_count(), 0);
    }
}
