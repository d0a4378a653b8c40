//! In-memory RSVP state container.

use std::collections::HashMap;

use crate::domain::entities::{EventId, RsvpResponse, RsvpStatus};

/// Holds the RSVP status of every event for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsvpStore {
    statuses: HashMap<EventId, RsvpStatus>,
}

impl Default for RsvpStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RsvpStore {
    /// Creates a store with every event unset.
    #[must_use]
    pub fn new() -> Self {
        Self {
            statuses: EventId::ALL
                .into_iter()
                .map(|id| (id, RsvpStatus::Unset))
                .collect(),
        }
    }

    #[must_use]
    pub fn status(&self, event: EventId) -> RsvpStatus {
        self.statuses.get(&event).copied().unwrap_or_default()
    }

    /// Records `response` for `event`, replacing any previous response.
    ///
    /// Returns the previous status.
    pub fn record(&mut self, event: EventId, response: RsvpResponse) -> RsvpStatus {
        self.statuses
            .insert(event, RsvpStatus::Responded(response))
            .unwrap_or_default()
    }

    /// Returns every event with its status, in page order.
    #[must_use]
    pub fn snapshot(&self) -> [(EventId, RsvpStatus); 2] {
        EventId::ALL.map(|id| (id, self.status(id)))
    }

    /// Number of events that have a response.
    #[must_use]
    pub fn responded_count(&self) -> usize {
        self.statuses.values().filter(|s| !s.is_unset()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_events_start_unset() {
        let store = RsvpStore::new();
        for id in EventId::ALL {
            assert_eq!(store.status(id), RsvpStatus::Unset);
        }
        assert_eq!(store.responded_count(), 0);
    }

    #[test]
    fn test_record_only_touches_one_event() {
        let mut store = RsvpStore::new();

        let previous = store.record(EventId::Main, RsvpResponse::UnableToAttend);

        assert_eq!(previous, RsvpStatus::Unset);
        assert_eq!(
            store.status(EventId::Main),
            RsvpStatus::Responded(RsvpResponse::UnableToAttend)
        );
        assert_eq!(store.status(EventId::Haldi), RsvpStatus::Unset);
        assert_eq!(store.responded_count(), 1);
    }

    #[test]
    fn test_record_overwrites() {
        let mut store = RsvpStore::new();
        store.record(EventId::Haldi, RsvpResponse::Attending);

        let previous = store.record(EventId::Haldi, RsvpResponse::UnableToAttend);

        assert_eq!(previous, RsvpStatus::Responded(RsvpResponse::Attending));
        assert_eq!(
            store.status(EventId::Haldi),
            RsvpStatus::Responded(RsvpResponse::UnableToAttend)
        );
    }

    #[test]
    fn test_snapshot_in_page_order() {
        let mut store = RsvpStore::new();
        store.record(EventId::Haldi, RsvpResponse::Attending);

        assert_eq!(
            store.snapshot(),
            [
                (EventId::Haldi, RsvpStatus::Responded(RsvpResponse::Attending)),
                (EventId::Main, RsvpStatus::Unset),
            ]
        );
    }
}
