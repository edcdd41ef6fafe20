//! Customer (loyalty ledger) Model

use serde::{Deserialize, Serialize};

/// Loyalty customer record, keyed by phone.
///
/// Created lazily on the first qualifying sale; mutated only by accrual and
/// redemption. Order history is append-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    /// Unique key, exactly 9 digits
    pub phone: String,
    pub name: String,
    /// Points balance, never negative
    pub points: i64,
    /// Order ids, appended per qualifying sale
    pub orders: Vec<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Customer {
    /// New customer seeded from a first qualifying order
    pub fn new(phone: String, name: String, timestamp: i64) -> Self {
        Self {
            phone,
            name,
            points: 0,
            orders: Vec::new(),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }
}
