mod event_section;
mod footer_bar;
mod header_bar;

pub use event_section::{EventControl, EventIntent, EventSection};
pub use footer_bar::{FooterBar, FooterBarStyle};
pub use header_bar::{HeaderBar, HeaderBarStyle};
