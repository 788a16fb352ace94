use crate::error;
use crate::map::{MapLoader, MapState};
use crate::routes;
use rideover_booking::{BookingFlow, BookingStep};
use rideover_catalog::pricing::{FareBreakdown, PricingRules};
use rideover_catalog::{PaymentMethod, PaymentMethodId, RideOption, RideOptionId};
use rideover_core::latency::SimulatedDelay;
use rideover_core::repository::KeyValueStore;
use rideover_core::CoreError;
use rideover_notify::{Notification, NotificationSurface};
use rideover_shared::money::format_pesewas;
use rideover_store::app_config::MapSettings;
use rideover_store::local_store::{DESTINATION_KEY, PICKUP_KEY};

/// Ride page controller: the booking wizard next to the map widget.
#[derive(Debug)]
pub struct RidePage {
    pub flow: BookingFlow,
    pub map: MapState,
}

impl RidePage {
    /// Mount the page, seeding the draft from the locations carried over
    /// from the home page.
    pub fn mount(store: &dyn KeyValueStore) -> Self {
        let pickup = store.get(PICKUP_KEY).unwrap_or_default();
        let destination = store.get(DESTINATION_KEY).unwrap_or_default();

        Self {
            flow: BookingFlow::new(pickup, destination),
            map: MapState::Loading,
        }
    }

    /// Initialize the mapping widget. Failure degrades to the placeholder:
    /// logged, not notified, not retried.
    pub async fn init_map(
        &mut self,
        loader: &dyn MapLoader,
        settings: &MapSettings,
        notifications: &mut NotificationSurface,
    ) {
        match loader.load(settings).await {
            Ok(view) => {
                let view = if self.flow.draft.has_locations() {
                    view.with_trip_overlay()
                } else {
                    view
                };
                self.map = MapState::Ready(view);
            }
            Err(err) => {
                error::report(CoreError::ExternalLoad(err.to_string()), notifications);
                self.map = MapState::Placeholder;
            }
        }
    }

    /// Choices offered by the review step's radio groups.
    pub fn ride_options(&self) -> Vec<RideOption> {
        RideOption::catalog()
    }

    pub fn payment_methods(&self) -> Vec<PaymentMethod> {
        PaymentMethod::catalog()
    }

    pub fn select_ride(&mut self, id: RideOptionId) {
        self.flow.select_ride(id);
    }

    pub fn select_payment(&mut self, id: PaymentMethodId) {
        self.flow.select_payment(id);
    }

    /// Fare panel contents for the review step.
    pub fn fare(&self, rules: &PricingRules) -> FareBreakdown {
        self.flow.fare(rules)
    }

    /// The single booking button: advances details to review, then
    /// confirms. Returns the path to navigate to once the ride is booked.
    pub async fn book_ride(
        &mut self,
        rules: &PricingRules,
        delay: &SimulatedDelay,
        notifications: &mut NotificationSurface,
    ) -> Option<&'static str> {
        match self.flow.step() {
            BookingStep::Details => {
                if let Err(err) = self.flow.advance() {
                    error::report(err.into(), notifications);
                }
                None
            }
            BookingStep::Review => match self.flow.confirm(rules, delay).await {
                Ok(receipt) => {
                    tracing::info!(
                        "Ride booked from {} to {} for {}",
                        receipt.pickup,
                        receipt.destination,
                        format_pesewas(receipt.fare.total_pesewas())
                    );
                    notifications.push(Notification::success(
                        "Success",
                        "Your ride has been booked successfully!",
                    ));
                    Some(routes::HOME_PATH)
                }
                Err(err) => {
                    error::report(err.into(), notifications);
                    None
                }
            },
        }
    }

    /// Review step's edit button.
    pub fn edit_details(&mut self, notifications: &mut NotificationSurface) {
        if let Err(err) = self.flow.edit_details() {
            error::report(err.into(), notifications);
        }
    }
}
