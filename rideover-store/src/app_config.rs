use rideover_catalog::pricing::PricingRules;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub pricing: PricingRules,
    pub map: MapSettings,
}

/// Fixed latencies standing in for backend round-trips.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SimulationConfig {
    pub register_delay_ms: u64,
    pub login_delay_ms: u64,
    pub booking_delay_ms: u64,
    pub profile_save_delay_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            register_delay_ms: 1500,
            login_delay_ms: 1500,
            booking_delay_ms: 2000,
            profile_save_delay_ms: 1000,
        }
    }
}

/// Settings handed to the third-party mapping widget.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MapSettings {
    pub api_key: String,
    pub zoom: u8,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            api_key: "GOOGLE_MAPS_API_KEY_PLACEHOLDER".to_string(),
            zoom: 12,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default").required(false))
            // Add in the current environment file
            // Default to 'development' env
            // Note that this file is _optional_
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of RIDEOVER)
            .add_source(config::Environment::with_prefix("RIDEOVER").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_constants() {
        let config = Config::default();
        assert_eq!(config.simulation.register_delay_ms, 1500);
        assert_eq!(config.simulation.booking_delay_ms, 2000);
        assert_eq!(config.simulation.profile_save_delay_ms, 1000);
        assert_eq!(config.pricing.distance_charge_pesewas, 1000);
        assert_eq!(config.pricing.service_fee_pesewas, 250);
        assert_eq!(config.map.zoom, 12);
    }
}
