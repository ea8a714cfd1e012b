//! User-facing notifications
//!
//! Updates never print anything themselves. They emit `Cmd::Notify` and the
//! runtime hands the notification to a `NotificationSink`.

use std::sync::Mutex;

/// Whether an operation succeeded or failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let marker = match self.kind {
            NotificationKind::Success => '✓',
            NotificationKind::Error => '✗',
        };
        write!(f, "{} {}", marker, self.message)
    }
}

/// Fire-and-forget destination for notifications
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: &Notification);
}

/// Logs notifications through tracing
#[derive(Debug, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, notification: &Notification) {
        match notification.kind {
            NotificationKind::Success => tracing::info!("{}", notification.message),
            NotificationKind::Error => tracing::warn!("{}", notification.message),
        }
    }
}

/// Prints notifications to the terminal and logs them
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn notify(&self, notification: &Notification) {
        TracingSink.notify(notification);
        if notification.is_error() {
            eprintln!("{}", notification);
        } else {
            println!("{}", notification);
        }
    }
}

/// Keeps every notification, for tests
#[derive(Debug, Default)]
pub struct RecordingSink {
    received: Mutex<Vec<Notification>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications received so far, oldest first
    pub fn received(&self) -> Vec<Notification> {
        self.received
            .lock()
            .map(|list| list.clone())
            .unwrap_or_default()
    }

    /// The most recent notification
    pub fn last(&self) -> Option<Notification> {
        self.received().pop()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: &Notification) {
        if let Ok(mut list) = self.received.lock() {
            list.push(notification.clone());
        }
    }
}
