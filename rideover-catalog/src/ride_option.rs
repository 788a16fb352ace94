use rideover_shared::money::Pesewas;
use serde::{Deserialize, Serialize};

/// Ride classes offered at booking time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RideOptionId {
    Standard,
    Premium,
    Okada,
}

impl RideOptionId {
    /// Display order on the booking page.
    pub const ALL: [RideOptionId; 3] = [Self::Standard, Self::Premium, Self::Okada];
}

/// A bookable ride class. Read-only reference data with no lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RideOption {
    pub id: RideOptionId,
    pub name: String,
    pub base_fare_pesewas: Pesewas,
    pub eta: String,
    pub description: String,
}

impl RideOption {
    /// Catalog entry for a ride class. Total over the id enum.
    pub fn get(id: RideOptionId) -> RideOption {
        match id {
            RideOptionId::Standard => RideOption {
                id,
                name: "Standard".to_string(),
                base_fare_pesewas: 2500,
                eta: "15-20 min".to_string(),
                description: "Affordable, everyday rides".to_string(),
            },
            RideOptionId::Premium => RideOption {
                id,
                name: "Premium".to_string(),
                base_fare_pesewas: 3500,
                eta: "15-20 min".to_string(),
                description: "Luxury vehicles with top-rated drivers".to_string(),
            },
            RideOptionId::Okada => RideOption {
                id,
                name: "Okada".to_string(),
                base_fare_pesewas: 1500,
                eta: "10-15 min".to_string(),
                description: "Quick motorcycle rides to beat traffic".to_string(),
            },
        }
    }

    /// The full catalog, in display order.
    pub fn catalog() -> Vec<RideOption> {
        RideOptionId::ALL.iter().map(|id| RideOption::get(*id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_three_entries_in_display_order() {
        let catalog = RideOption::catalog();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog[0].id, RideOptionId::Standard);
        assert_eq!(catalog[1].id, RideOptionId::Premium);
        assert_eq!(catalog[2].id, RideOptionId::Okada);
    }

    #[test]
    fn base_fares_match_the_published_prices() {
        assert_eq!(RideOption::get(RideOptionId::Standard).base_fare_pesewas, 2500);
        assert_eq!(RideOption::get(RideOptionId::Premium).base_fare_pesewas, 3500);
        assert_eq!(RideOption::get(RideOptionId::Okada).base_fare_pesewas, 1500);
    }
}
