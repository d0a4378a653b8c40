//! Domain layer with invitation entities and port definitions.

/// Acknowledgment definitions.
pub mod acknowledgment;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Port definitions.
pub mod ports;

pub use acknowledgment::{Acknowledgment, AcknowledgmentLevel};
pub use entities::{EventDescriptor, EventId, Invitation, RsvpResponse, RsvpStatus};
pub use errors::IntegrationError;
pub use ports::{AcknowledgmentPort, BrowserPort, CalendarPort, CalendarRequest};
