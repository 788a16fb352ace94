use crate::draft::{BookingDraft, BookingStep};
use chrono::{DateTime, Utc};
use rideover_catalog::pricing::{self, FareBreakdown, PricingRules};
use rideover_catalog::{PaymentMethodId, RideOption, RideOptionId};
use rideover_core::latency::SimulatedDelay;
use rideover_core::CoreError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Drives a draft through the two-step booking wizard.
#[derive(Debug)]
pub struct BookingFlow {
    pub draft: BookingDraft,
}

impl BookingFlow {
    pub fn new(pickup: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            draft: BookingDraft::new(pickup, destination),
        }
    }

    pub fn step(&self) -> BookingStep {
        self.draft.step
    }

    pub fn select_ride(&mut self, id: RideOptionId) {
        self.draft.ride_option = id;
    }

    pub fn select_payment(&mut self, id: PaymentMethodId) {
        self.draft.payment_method = id;
    }

    /// Transition: Details → Review. Requires both locations; failure
    /// leaves the draft in the details step.
    pub fn advance(&mut self) -> Result<(), BookingError> {
        if self.draft.step != BookingStep::Details {
            return Err(BookingError::InvalidTransition {
                from: format!("{:?}", self.draft.step),
                to: "REVIEW".to_string(),
            });
        }

        if !self.draft.has_locations() {
            return Err(BookingError::MissingLocations);
        }

        self.draft.step = BookingStep::Review;
        Ok(())
    }

    /// Transition: Review → Details, keeping everything entered so far.
    pub fn edit_details(&mut self) -> Result<(), BookingError> {
        if self.draft.step != BookingStep::Review {
            return Err(BookingError::InvalidTransition {
                from: format!("{:?}", self.draft.step),
                to: "DETAILS".to_string(),
            });
        }

        self.draft.step = BookingStep::Details;
        Ok(())
    }

    /// Itemized fare for the currently selected ride class.
    pub fn fare(&self, rules: &PricingRules) -> FareBreakdown {
        pricing::quote(&RideOption::get(self.draft.ride_option), rules)
    }

    /// Confirm the reviewed booking after the simulated backend call. The
    /// receipt is returned to the caller and nowhere else: completed
    /// bookings are not persisted.
    pub async fn confirm(
        &mut self,
        rules: &PricingRules,
        delay: &SimulatedDelay,
    ) -> Result<BookingReceipt, BookingError> {
        if self.draft.step != BookingStep::Review {
            return Err(BookingError::InvalidTransition {
                from: format!("{:?}", self.draft.step),
                to: "CONFIRMED".to_string(),
            });
        }

        delay.wait().await;

        Ok(BookingReceipt {
            id: Uuid::new_v4(),
            pickup: self.draft.pickup.clone(),
            destination: self.draft.destination.clone(),
            ride_option: self.draft.ride_option,
            payment_method: self.draft.payment_method,
            fare: self.fare(rules),
            confirmed_at: Utc::now(),
        })
    }
}

/// Outcome of a confirmed booking, handed back to the caller for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingReceipt {
    pub id: Uuid,
    pub pickup: String,
    pub destination: String,
    pub ride_option: RideOptionId,
    pub payment_method: PaymentMethodId,
    pub fare: FareBreakdown,
    pub confirmed_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("Please enter pickup and destination locations")]
    MissingLocations,

    #[error("Invalid booking step transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },
}

impl From<BookingError> for CoreError {
    fn from(err: BookingError) -> Self {
        CoreError::Validation(err.to_string())
    }
}
