pub mod notification;
pub mod surface;

pub use notification::{Notification, NotificationKind, DEFAULT_DURATION_MS};
pub use surface::NotificationSurface;
