use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default auto-dismiss window.
pub const DEFAULT_DURATION_MS: i64 = 3000;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient user-facing status message. Never persisted; expires on its
/// own schedule independent of any other message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub kind: NotificationKind,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        kind: NotificationKind,
        duration_ms: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description,
            kind,
            created_at: now,
            expires_at: now + Duration::milliseconds(duration_ms),
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(
            title,
            Some(description.into()),
            NotificationKind::Success,
            DEFAULT_DURATION_MS,
        )
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(
            title,
            Some(description.into()),
            NotificationKind::Error,
            DEFAULT_DURATION_MS,
        )
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}
