//! Stateful controllers behind the console views.

use std::time::Duration;

pub mod list;
pub mod register;

/// How long a transient notification stays visible before it is cleared.
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(3000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
}

/// Transient, time-limited message shown after an action.
///
/// The generation ties the notification to its own expiry task: a timer
/// fired for an older generation leaves a newer notification alone.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub(crate) generation: u64,
}
