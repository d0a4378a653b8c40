//! Infrastructure layer with external service adapters.

/// System browser launcher.
pub mod browser;
/// Calendar export.
pub mod calendar;
/// Application configuration.
pub mod config;
/// System notifications.
pub mod notifications;

pub use browser::SystemBrowser;
pub use calendar::IcsCalendarExporter;
pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use notifications::DesktopNotificationService;
