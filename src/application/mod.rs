//! Application layer with the page controller, services and DTOs.

/// Data transfer objects.
pub mod dto;
/// Application services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{DispatchOutcome, PageCommand};
pub use services::{NotificationManager, RsvpStore};
pub use use_cases::PageController;
