use std::collections::VecDeque;
use std::time::Duration;

use crate::domain::{Acknowledgment, AcknowledgmentLevel};

/// Queue of toasts shown one at a time.
#[derive(Debug)]
pub struct NotificationManager {
    queue: VecDeque<Acknowledgment>,
    default_duration: Duration,
    enabled: bool,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

impl NotificationManager {
    #[must_use]
    pub fn new(default_duration: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            default_duration,
            enabled: true,
        }
    }

    /// Drops info toasts while keeping warnings and errors.
    #[must_use]
    pub const fn with_info_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn push(&mut self, acknowledgment: Acknowledgment) {
        if !self.enabled && acknowledgment.level == AcknowledgmentLevel::Info {
            return;
        }
        self.queue
            .push_back(acknowledgment.with_duration(self.default_duration));
    }

    pub fn info(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(Acknowledgment::new(AcknowledgmentLevel::Info, title, message));
    }

    pub fn warn(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(Acknowledgment::new(AcknowledgmentLevel::Warn, title, message));
    }

    pub fn tick(&mut self) {
        if let Some(front) = self.queue.front_mut() {
            front.mark_displayed();
            if front.is_expired() {
                self.queue.pop_front();
                if let Some(next) = self.queue.front_mut() {
                    next.mark_displayed();
                }
            }
        }
    }

    /// Dismisses the toast on screen.
    pub fn dismiss(&mut self) -> bool {
        let dismissed = self.queue.pop_front().is_some();
        if let Some(next) = self.queue.front_mut() {
            next.mark_displayed();
        }
        dismissed
    }

    #[must_use]
    pub fn current(&self) -> Option<&Acknowledgment> {
        self.queue.front()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.queue.is_empty()
    }
}
