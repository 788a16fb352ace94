use crate::session::Session;

/// Tab-scoped key-value storage primitive: flat string entries,
/// last-write-wins, no expiry.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Repository trait for the single user session
pub trait SessionRepository: Send + Sync {
    /// Load the current session, if one exists.
    fn load(&self) -> Option<Session>;

    /// Persist the session, replacing any previous one. The write is
    /// immediately visible to the next `load`.
    fn save(&self, session: &Session);

    /// Delete the session. Subsequent loads return `None`.
    fn clear(&self);
}
