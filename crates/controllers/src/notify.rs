//! Transient user notifications.
//!
//! Controllers post short-lived confirmation and error messages to a
//! broadcast bus; rendering them (snackbar, toast, log line) is the
//! view's concern. Delivery is best-effort: with no live subscriber a
//! message is simply dropped.

use tokio::sync::broadcast;

/// Broadcast channel capacity for notifications.
const NOTIFICATION_CHANNEL_CAPACITY: usize = 16;

/// A single transient message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
}

/// Fan-out bus for transient notifications.
#[derive(Debug, Clone)]
pub struct NotificationBus {
    tx: broadcast::Sender<Notification>,
}

impl NotificationBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(NOTIFICATION_CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Subscribe to notifications posted after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }

    /// Post a message to every current subscriber.
    pub fn post(&self, message: impl Into<String>) {
        let _ = self.tx.send(Notification {
            message: message.into(),
        });
    }
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new()
    }
}
