use crate::notification::{Notification, NotificationKind, DEFAULT_DURATION_MS};
use uuid::Uuid;

/// Queue of live notifications. Messages accumulate and expire
/// independently; the surface never blocks a new message on an old one.
#[derive(Debug, Default)]
pub struct NotificationSurface {
    queue: Vec<Notification>,
}

impl NotificationSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a message built from its parts. `duration_ms` falls back to
    /// the default display window.
    pub fn notify(
        &mut self,
        title: impl Into<String>,
        description: Option<String>,
        kind: NotificationKind,
        duration_ms: Option<i64>,
    ) -> Uuid {
        self.push(Notification::new(
            title,
            description,
            kind,
            duration_ms.unwrap_or(DEFAULT_DURATION_MS),
        ))
    }

    /// Enqueue an already-built message and return its id.
    pub fn push(&mut self, notification: Notification) -> Uuid {
        let id = notification.id;
        self.queue.push(notification);
        id
    }

    /// Messages still within their display window, oldest first.
    pub fn visible(&self) -> Vec<&Notification> {
        self.queue.iter().filter(|n| !n.is_expired()).collect()
    }

    /// Drop expired messages, returning how many were removed.
    pub fn sweep_expired(&mut self) -> usize {
        let initial_count = self.queue.len();
        self.queue.retain(|n| !n.is_expired());
        initial_count - self.queue.len()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
