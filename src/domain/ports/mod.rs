mod acknowledgment_port;
mod browser_port;
mod calendar_port;

pub use acknowledgment_port::AcknowledgmentPort;
pub use browser_port::BrowserPort;
pub use calendar_port::{CalendarPort, CalendarRequest};
