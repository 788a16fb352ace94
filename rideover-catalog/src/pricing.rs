use crate::ride_option::RideOption;
use rideover_shared::money::Pesewas;
use serde::{Deserialize, Serialize};

/// Fixed fare components applied to every quote. The demo route has a
/// constant length, so the distance charge is a constant too.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingRules {
    pub distance_charge_pesewas: Pesewas,
    pub service_fee_pesewas: Pesewas,
    pub route_distance_km: f64,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            distance_charge_pesewas: 1000,
            service_fee_pesewas: 250,
            route_distance_km: 5.2,
        }
    }
}

/// Itemized fare shown in the review step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FareBreakdown {
    pub base_fare_pesewas: Pesewas,
    pub distance_charge_pesewas: Pesewas,
    pub service_fee_pesewas: Pesewas,
}

impl FareBreakdown {
    pub fn total_pesewas(&self) -> Pesewas {
        self.base_fare_pesewas + self.distance_charge_pesewas + self.service_fee_pesewas
    }
}

/// Quote a fare for the selected ride class.
pub fn quote(option: &RideOption, rules: &PricingRules) -> FareBreakdown {
    FareBreakdown {
        base_fare_pesewas: option.base_fare_pesewas,
        distance_charge_pesewas: rules.distance_charge_pesewas,
        service_fee_pesewas: rules.service_fee_pesewas,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ride_option::RideOptionId;

    #[test]
    fn total_is_base_plus_distance_plus_service_fee() {
        let rules = PricingRules::default();

        let standard = quote(&RideOption::get(RideOptionId::Standard), &rules);
        assert_eq!(standard.total_pesewas(), 2500 + 1000 + 250);

        let premium = quote(&RideOption::get(RideOptionId::Premium), &rules);
        assert_eq!(premium.total_pesewas(), 3500 + 1000 + 250);

        let okada = quote(&RideOption::get(RideOptionId::Okada), &rules);
        assert_eq!(okada.total_pesewas(), 1500 + 1000 + 250);
    }

    #[test]
    fn quote_carries_the_rule_constants() {
        let rules = PricingRules {
            distance_charge_pesewas: 700,
            service_fee_pesewas: 300,
            route_distance_km: 3.0,
        };
        let fare = quote(&RideOption::get(RideOptionId::Standard), &rules);
        assert_eq!(fare.distance_charge_pesewas, 700);
        assert_eq!(fare.service_fee_pesewas, 300);
        assert_eq!(fare.total_pesewas(), 2500 + 700 + 300);
    }
}
