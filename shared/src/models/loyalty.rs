//! Loyalty Program Models

use serde::{Deserialize, Serialize};

/// Points-earning rule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EarningRule {
    /// points = floor(total / amount_per_point) * points_per_unit.
    /// A non-positive amount_per_point is treated as 1 at accrual time.
    AmountBased {
        amount_per_point: f64,
        points_per_unit: i64,
    },
    /// Flat points per completed order regardless of amount
    PurchaseBased { points: i64 },
}

/// Redeemable reward in a program's catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reward {
    pub id: i64,
    pub name: String,
    pub points_cost: i64,
    /// Optional linked catalog product
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
}

/// Loyalty program. At most one program is active at a time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoyaltyProgram {
    pub id: i64,
    pub name: String,
    pub rule: EarningRule,
    pub rewards: Vec<Reward>,
    pub is_active: bool,
}

impl LoyaltyProgram {
    pub fn reward(&self, reward_id: i64) -> Option<&Reward> {
        self.rewards.iter().find(|r| r.id == reward_id)
    }
}
