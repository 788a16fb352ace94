pub mod account;
pub mod history;
pub mod payment;
pub mod pricing;
pub mod ride_option;

pub use payment::{PaymentMethod, PaymentMethodId};
pub use pricing::{FareBreakdown, PricingRules};
pub use ride_option::{RideOption, RideOptionId};
