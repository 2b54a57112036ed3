use std::time::{Duration, Instant};

/// Visual weight of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Success and informational messages
    Default,
    /// Validation and request failures
    Destructive,
}

/// A single transient message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    shown_at: Instant,
}

impl Notification {
    fn is_expired(&self, duration: Duration) -> bool {
        self.shown_at.elapsed() >= duration
    }
}

/// Holds at most one notification; a newer one replaces the older
#[derive(Debug)]
pub struct NotificationState {
    current: Option<Notification>,
    duration: Duration,
}

impl NotificationState {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    pub fn show(&mut self, title: &str, description: &str) {
        self.push(title, description, Severity::Default);
    }

    pub fn show_destructive(&mut self, title: &str, description: &str) {
        self.push(title, description, Severity::Destructive);
    }

    fn push(&mut self, title: &str, description: &str, severity: Severity) {
        log::debug!("Notification [{:?}] {}: {}", severity, title, description);
        self.current = Some(Notification {
            title: title.to_string(),
            description: description.to_string(),
            severity,
            shown_at: Instant::now(),
        });
    }

    /// The visible notification, if it has not expired yet
    pub fn current(&self) -> Option<&Notification> {
        self.current
            .as_ref()
            .filter(|n| !n.is_expired(self.duration))
    }

    /// Drop an expired notification. Returns true if one was removed.
    pub fn clear_expired(&mut self) -> bool {
        if self
            .current
            .as_ref()
            .is_some_and(|n| n.is_expired(self.duration))
        {
            self.current = None;
            return true;
        }
        false
    }
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::config::DEFAULT_NOTIFICATION_MS))
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
