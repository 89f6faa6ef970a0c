/// Notification values displayed by the toast slot
use std::sync::atomic::{AtomicU64, Ordering};

/// Severity of a notification. Controls the CSS class on the toast, which
/// styles the color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl Default for NotificationKind {
    fn default() -> Self {
        NotificationKind::Info
    }
}

impl NotificationKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}

static NEXT_SEQ: AtomicU64 = AtomicU64::new(0);

/// A single user-visible notification. The toast slot shows one at a time;
/// presenting a new one replaces whatever is currently on screen.
///
/// Each constructed value carries a unique presentation sequence number, so
/// two notifications with the same message never compare equal. The toast
/// keys its timers on the slot value; the sequence number guarantees a
/// repeat of identical content still restarts the display cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    seq: u64,
}

impl Notification {
    fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Notification {
            message: message.into(),
            kind,
            seq: NEXT_SEQ.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Notification::new(message, NotificationKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notification::new(message, NotificationKind::Error)
    }
}
