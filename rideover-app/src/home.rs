use crate::routes;
use rideover_core::repository::KeyValueStore;
use rideover_store::local_store::{DESTINATION_KEY, PICKUP_KEY};

/// Hero booking form on the landing page.
#[derive(Debug, Clone, Default)]
pub struct HomePage {
    pub pickup: String,
    pub destination: String,
}

impl HomePage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Carry the entered locations over to the ride page. Does nothing
    /// until both fields are filled in.
    pub fn book_ride(&self, store: &dyn KeyValueStore) -> Option<&'static str> {
        if self.pickup.is_empty() || self.destination.is_empty() {
            return None;
        }

        store.set(PICKUP_KEY, &self.pickup);
        store.set(DESTINATION_KEY, &self.destination);
        Some(routes::RIDE_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rideover_store::LocalStore;

    #[test]
    fn both_locations_are_required_before_navigating() {
        let store = LocalStore::new();
        let mut page = HomePage::new();
        page.pickup = "Accra Mall".to_string();

        assert_eq!(page.book_ride(&store), None);
        assert_eq!(store.get(PICKUP_KEY), None);

        page.destination = "Labadi Beach".to_string();
        assert_eq!(page.book_ride(&store), Some(routes::RIDE_PATH));
        assert_eq!(store.get(PICKUP_KEY), Some("Accra Mall".to_string()));
        assert_eq!(store.get(DESTINATION_KEY), Some("Labadi Beach".to_string()));
    }
}
