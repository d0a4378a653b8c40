//! Desktop notifications with conditional compilation.

use crate::domain::Acknowledgment;
use crate::domain::ports::AcknowledgmentPort;

#[cfg(feature = "notify")]
mod notify_impl {
    use super::*;
    use notify_rust::Notification;

    /// Mirrors acknowledgments as desktop notifications.
    #[derive(Debug, Clone, Default)]
    pub struct DesktopNotificationService {
        enabled: bool,
    }

    impl DesktopNotificationService {
        #[must_use]
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }
    }

    impl AcknowledgmentPort for DesktopNotificationService {
        fn acknowledge(&self, acknowledgment: &Acknowledgment) {
            if !self.enabled {
                return;
            }

            let title = acknowledgment.title.clone();
            let body = acknowledgment.message.clone();

            tokio::task::spawn_blocking(move || {
                if let Err(e) = Notification::new()
                    .summary(&title)
                    .body(&body)
                    .appname("Jubilee")
                    .show()
                {
                    tracing::warn!(error = %e, "Failed to show desktop notification");
                }
            });
        }
    }
}

#[cfg(not(feature = "notify"))]
mod stub_impl {
    use super::*;

    /// Desktop notifications are compiled out; acknowledgments stay in the terminal.
    #[derive(Debug, Clone, Default)]
    pub struct DesktopNotificationService;

    impl DesktopNotificationService {
        #[must_use]
        pub fn new(_enabled: bool) -> Self {
            Self
        }
    }

    impl AcknowledgmentPort for DesktopNotificationService {
        fn acknowledge(&self, _acknowledgment: &Acknowledgment) {}
    }
}

#[cfg(feature = "notify")]
pub use notify_impl::DesktopNotificationService;
#[cfg(not(feature = "notify"))]
pub use stub_impl::DesktopNotificationService;
