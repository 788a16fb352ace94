use crate::local_store::{LocalStore, USER_KEY};
use rideover_core::repository::{KeyValueStore, SessionRepository};
use rideover_core::session::Session;
use std::sync::Arc;

/// Session persistence over the tab-scoped store: key `user` holds the
/// serialized session JSON. No caching layer sits in front of the store,
/// so every write is visible to the next load.
pub struct LocalSessionRepository {
    store: Arc<LocalStore>,
}

impl LocalSessionRepository {
    pub fn new(store: Arc<LocalStore>) -> Self {
        Self { store }
    }
}

impl SessionRepository for LocalSessionRepository {
    fn load(&self) -> Option<Session> {
        let raw = self.store.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!("Discarding undecodable session payload: {}", err);
                None
            }
        }
    }

    fn save(&self, session: &Session) {
        match serde_json::to_string(session) {
            Ok(raw) => {
                self.store.set(USER_KEY, &raw);
                tracing::debug!("Session saved for {}", session.email);
            }
            Err(err) => tracing::error!("Failed to serialize session: {}", err),
        }
    }

    fn clear(&self) {
        self.store.remove(USER_KEY);
        tracing::debug!("Session cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> LocalSessionRepository {
        LocalSessionRepository::new(Arc::new(LocalStore::new()))
    }

    #[test]
    fn load_after_save_returns_the_session_unchanged() {
        let repo = repo();
        let mut session = Session::new("Ama Serwaa", "ama@example.com");
        session.phone = Some("+233 20 123 4567".to_string());

        repo.save(&session);
        assert_eq!(repo.load(), Some(session));
    }

    #[test]
    fn load_after_clear_returns_none() {
        let repo = repo();
        repo.save(&Session::new("Kofi Badu", "kofi@example.com"));
        repo.clear();
        assert_eq!(repo.load(), None);
    }

    #[test]
    fn save_fully_overwrites_the_previous_session() {
        let repo = repo();
        let mut first = Session::new("Ama Serwaa", "ama@example.com");
        first.address = Some("East Legon".to_string());
        repo.save(&first);

        let second = Session::new("Ama S.", "ama@example.com");
        repo.save(&second);

        let loaded = repo.load().unwrap();
        assert_eq!(loaded, second);
        assert_eq!(loaded.address, None);
    }

    #[test]
    fn undecodable_payload_is_treated_as_absent() {
        let store = Arc::new(LocalStore::new());
        store.set(USER_KEY, "not json");
        let repo = LocalSessionRepository::new(store);
        assert_eq!(repo.load(), None);
    }
}
