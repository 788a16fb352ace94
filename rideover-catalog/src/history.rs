use rideover_shared::money::Pesewas;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RideStatus {
    Completed,
    Cancelled,
}

/// A past ride shown on the profile page. Static mock data: read-only,
/// never persisted or mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RideHistoryEntry {
    pub id: String,
    pub date: String,
    pub time: String,
    pub from: String,
    pub to: String,
    pub price_pesewas: Pesewas,
    pub status: RideStatus,
    pub driver: String,
    pub rating: u8,
}

pub fn ride_history() -> Vec<RideHistoryEntry> {
    vec![
        RideHistoryEntry {
            id: "1".to_string(),
            date: "2023-06-15".to_string(),
            time: "14:30".to_string(),
            from: "Accra Mall, Accra".to_string(),
            to: "Kotoka International Airport, Accra".to_string(),
            price_pesewas: 4500,
            status: RideStatus::Completed,
            driver: "John Mensah".to_string(),
            rating: 5,
        },
        RideHistoryEntry {
            id: "2".to_string(),
            date: "2023-06-10".to_string(),
            time: "09:15".to_string(),
            from: "University of Ghana, Legon".to_string(),
            to: "Makola Market, Accra".to_string(),
            price_pesewas: 3500,
            status: RideStatus::Completed,
            driver: "Kwame Asante".to_string(),
            rating: 4,
        },
        RideHistoryEntry {
            id: "3".to_string(),
            date: "2023-06-05".to_string(),
            time: "18:45".to_string(),
            from: "A&C Mall, East Legon".to_string(),
            to: "Labadi Beach Hotel, Accra".to_string(),
            price_pesewas: 3000,
            status: RideStatus::Completed,
            driver: "Abena Owusu".to_string(),
            rating: 5,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_entries_are_completed_rides_with_valid_ratings() {
        let history = ride_history();
        assert_eq!(history.len(), 3);
        for entry in &history {
            assert_eq!(entry.status, RideStatus::Completed);
            assert!(entry.rating >= 1 && entry.rating <= 5);
        }
    }
}
