use crate::map::{MapLoader, WidgetLoader};
use rideover_catalog::pricing::PricingRules;
use rideover_core::latency::SimulatedDelay;
use rideover_core::repository::SessionRepository;
use rideover_store::app_config::{Config, MapSettings};
use rideover_store::{LocalSessionRepository, LocalStore};
use std::sync::Arc;

/// Shared wiring for the page controllers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<LocalStore>,
    pub sessions: Arc<dyn SessionRepository>,
    pub map_loader: Arc<dyn MapLoader>,
    pub pricing: PricingRules,
    pub map: MapSettings,
    pub register_delay: SimulatedDelay,
    pub login_delay: SimulatedDelay,
    pub booking_delay: SimulatedDelay,
    pub profile_save_delay: SimulatedDelay,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let store = Arc::new(LocalStore::new());
        let sessions: Arc<dyn SessionRepository> =
            Arc::new(LocalSessionRepository::new(store.clone()));

        Self {
            store,
            sessions,
            map_loader: Arc::new(WidgetLoader),
            pricing: config.pricing,
            map: config.map,
            register_delay: SimulatedDelay::from_millis(config.simulation.register_delay_ms),
            login_delay: SimulatedDelay::from_millis(config.simulation.login_delay_ms),
            booking_delay: SimulatedDelay::from_millis(config.simulation.booking_delay_ms),
            profile_save_delay: SimulatedDelay::from_millis(
                config.simulation.profile_save_delay_ms,
            ),
        }
    }

    /// Whether a user is currently signed in, read synchronously from the
    /// session store. This is the routing gate's input.
    pub fn session_present(&self) -> bool {
        self.sessions.load().is_some()
    }
}
