use rideover_shared::money::Pesewas;
use serde::{Deserialize, Serialize};

/// A wallet ledger line. The sign of the amount carries the direction:
/// ride payments are negative, top-ups positive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletTransaction {
    pub label: String,
    pub occurred: String,
    pub amount_pesewas: Pesewas,
}

/// Wallet balance and recent activity shown on the profile page.
/// Static mock data, like the ride history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletSummary {
    pub balance_pesewas: Pesewas,
    pub recent_transactions: Vec<WalletTransaction>,
}

pub fn wallet_summary() -> WalletSummary {
    WalletSummary {
        balance_pesewas: 12000,
        recent_transactions: vec![
            WalletTransaction {
                label: "Ride Payment".to_string(),
                occurred: "June 15, 2023 • 14:30".to_string(),
                amount_pesewas: -4500,
            },
            WalletTransaction {
                label: "Added Money".to_string(),
                occurred: "June 12, 2023 • 10:15".to_string(),
                amount_pesewas: 10000,
            },
            WalletTransaction {
                label: "Ride Payment".to_string(),
                occurred: "June 10, 2023 • 09:15".to_string(),
                amount_pesewas: -3500,
            },
        ],
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MembershipTier {
    Silver,
    Gold,
}

/// Loyalty standing shown on the rewards tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardsAccount {
    pub points: u32,
    pub tier: MembershipTier,
    pub next_tier_at: u32,
}

impl RewardsAccount {
    pub fn points_to_next_tier(&self) -> u32 {
        self.next_tier_at.saturating_sub(self.points)
    }
}

pub fn rewards_account() -> RewardsAccount {
    RewardsAccount {
        points: 350,
        tier: MembershipTier::Silver,
        next_tier_at: 500,
    }
}

/// A redeemable reward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardOffer {
    pub name: String,
    pub description: String,
    pub cost_points: u32,
}

pub fn reward_offers() -> Vec<RewardOffer> {
    vec![
        RewardOffer {
            name: "Free Ride".to_string(),
            description: "Get a free ride up to ₵50".to_string(),
            cost_points: 500,
        },
        RewardOffer {
            name: "Discount Coupon".to_string(),
            description: "20% off your next 3 rides".to_string(),
            cost_points: 300,
        },
        RewardOffer {
            name: "Priority Pickup".to_string(),
            description: "Get priority driver matching for 1 week".to_string(),
            cost_points: 200,
        },
        RewardOffer {
            name: "Wallet Credit".to_string(),
            description: "₵25 added to your wallet".to_string(),
            cost_points: 250,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silver_member_needs_150_points_for_gold() {
        let account = rewards_account();
        assert_eq!(account.tier, MembershipTier::Silver);
        assert_eq!(account.points_to_next_tier(), 150);
    }

    #[test]
    fn ride_payments_are_debits() {
        let wallet = wallet_summary();
        assert!(wallet
            .recent_transactions
            .iter()
            .filter(|tx| tx.label == "Ride Payment")
            .all(|tx| tx.amount_pesewas < 0));
    }
}
