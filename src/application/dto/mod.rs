//! Data transfer objects for the application layer.

mod page_command;

pub use page_command::{DispatchOutcome, PageCommand};
