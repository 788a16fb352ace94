use rideover_core::repository::KeyValueStore;
use std::collections::HashMap;
use std::sync::Mutex;

/// Storage key for the serialized session.
pub const USER_KEY: &str = "user";
/// Storage keys carrying the booking locations from the home page to the
/// ride page.
pub const PICKUP_KEY: &str = "pickup";
pub const DESTINATION_KEY: &str = "destination";

/// In-memory stand-in for tab-scoped browser storage: a flat string map
/// with last-write-wins semantics and no expiry.
#[derive(Debug, Default)]
pub struct LocalStore {
    entries: Mutex<HashMap<String, String>>,
}

impl LocalStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}
