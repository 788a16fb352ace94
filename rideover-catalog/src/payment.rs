use serde::{Deserialize, Serialize};

/// Accepted payment instruments.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethodId {
    Card,
    Mobile,
    Wallet,
}

impl PaymentMethodId {
    pub const ALL: [PaymentMethodId; 3] = [Self::Card, Self::Mobile, Self::Wallet];
}

/// Read-only payment method reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: PaymentMethodId,
    pub name: String,
}

impl PaymentMethod {
    pub fn get(id: PaymentMethodId) -> PaymentMethod {
        let name = match id {
            PaymentMethodId::Card => "Credit Card",
            PaymentMethodId::Mobile => "Mobile Money",
            PaymentMethodId::Wallet => "RideOver Wallet",
        };
        PaymentMethod {
            id,
            name: name.to_string(),
        }
    }

    pub fn catalog() -> Vec<PaymentMethod> {
        PaymentMethodId::ALL.iter().map(|id| PaymentMethod::get(*id)).collect()
    }
}
