//! Domain error types.

mod integration_error;

pub use integration_error::IntegrationError;
