use rideover_core::CoreError;
use rideover_notify::{Notification, NotificationSurface};

/// Single dispatch point for the failure taxonomy. Validation failures
/// surface as a destructive notification: the operation is aborted and
/// state left unchanged. External-load failures are logged and the page
/// degrades without notifying.
pub fn report(err: CoreError, notifications: &mut NotificationSurface) {
    match err {
        CoreError::Validation(message) => {
            notifications.push(Notification::error("Error", message));
        }
        CoreError::ExternalLoad(message) => {
            tracing::error!("External resource failed to load: {}", message);
        }
    }
}
