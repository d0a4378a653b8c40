//! Jubilee - a silver jubilee invitation for the terminal.
//!
//! Guests browse the two events of the celebration, record an RSVP for each,
//! add them to a calendar and open directions to the venue. The crate follows
//! a layered layout: domain entities and ports, an application layer owning
//! the RSVP state, infrastructure adapters, and a ratatui presentation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "jubilee";
