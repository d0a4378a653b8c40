//! Domain entity definitions.

mod event;
mod invitation;
mod rsvp;

pub use event::{CalendarSlot, ColorTheme, EventDescriptor, EventIcon, EventId};
pub use invitation::Invitation;
pub use rsvp::{RsvpResponse, RsvpState, RsvpStatus};
