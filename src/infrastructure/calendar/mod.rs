//! Calendar export.

mod exporter;
pub mod ics;

pub use exporter::IcsCalendarExporter;
