//! RSVP response and status entities.

use serde::{Deserialize, Serialize};

/// A guest's attendance response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RsvpResponse {
    /// The guest will attend.
    Attending,
    /// The guest cannot attend.
    UnableToAttend,
}

impl RsvpResponse {
    /// Returns the text shown for the response.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Attending => "Attending",
            Self::UnableToAttend => "Unable to Attend",
        }
    }
}

impl std::fmt::Display for RsvpResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Flat view of the per-event RSVP state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsvpState {
    Unset,
    RespondedAttending,
    RespondedDeclined,
}

/// Recorded RSVP for one event.
///
/// Starts as [`RsvpStatus::Unset`] and never goes back to it once a response
/// is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RsvpStatus {
    #[default]
    Unset,
    Responded(RsvpResponse),
}

impl RsvpStatus {
    #[must_use]
    pub const fn is_unset(self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns the recorded response, if any.
    #[must_use]
    pub const fn response(self) -> Option<RsvpResponse> {
        match self {
            Self::Unset => None,
            Self::Responded(response) => Some(response),
        }
    }

    #[must_use]
    pub const fn state(self) -> RsvpState {
        match self {
            Self::Unset => RsvpState::Unset,
            Self::Responded(RsvpResponse::Attending) => RsvpState::RespondedAttending,
            Self::Responded(RsvpResponse::UnableToAttend) => RsvpState::RespondedDeclined,
        }
    }
}

impl From<RsvpResponse> for RsvpStatus {
    fn from(response: RsvpResponse) -> Self {
        Self::Responded(response)
    }
}

impl std::fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unset => f.write_str("Awaiting response"),
            Self::Responded(response) => write!(f, "{response}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_labels() {
        assert_eq!(RsvpResponse::Attending.label(), "Attending");
        assert_eq!(RsvpResponse::UnableToAttend.to_string(), "Unable to Attend");
    }

    #[test]
    fn test_status_default_is_unset() {
        let status = RsvpStatus::default();
        assert!(status.is_unset());
        assert_eq!(status.response(), None);
        assert_eq!(status.state(), RsvpState::Unset);
    }

    #[test]
    fn test_status_state_mapping() {
        assert_eq!(
            RsvpStatus::from(RsvpResponse::Attending).state(),
            RsvpState::RespondedAttending
        );
        assert_eq!(
            RsvpStatus::from(RsvpResponse::UnableToAttend).state(),
            RsvpState::RespondedDeclined
        );
    }
}
