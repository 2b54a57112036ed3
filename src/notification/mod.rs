//! Notification module for career-mentor
//!
//! Provides transient toast messages (title, description, severity) used for
//! validation failures and request outcomes.

mod render;
mod state;

pub use render::render_notification;
pub use state::{Notification, NotificationState, Severity};
