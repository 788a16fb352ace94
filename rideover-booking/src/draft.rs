use rideover_catalog::{PaymentMethodId, RideOptionId};
use serde::{Deserialize, Serialize};

/// Wizard position within the ride page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStep {
    Details,
    Review,
}

/// An in-progress ride request before confirmation. Ephemeral: it lives
/// for one ride-page visit, apart from the pickup/destination carry-over
/// held in the key-value store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDraft {
    pub pickup: String,
    pub destination: String,
    pub ride_option: RideOptionId,
    pub payment_method: PaymentMethodId,
    pub step: BookingStep,
}

impl BookingDraft {
    pub fn new(pickup: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            pickup: pickup.into(),
            destination: destination.into(),
            ride_option: RideOptionId::Standard,
            payment_method: PaymentMethodId::Card,
            step: BookingStep::Details,
        }
    }

    /// Both locations are required before the draft can reach review.
    pub fn has_locations(&self) -> bool {
        !self.pickup.is_empty() && !self.destination.is_empty()
    }
}
