//! Cash Session (Till) Model

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::order::PaymentMethod;

/// Cash session status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SessionStatus {
    #[serde(rename = "OPEN")]
    #[default]
    Open,
    #[serde(rename = "CLOSED")]
    Closed,
}

/// Direction of a manual cash movement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementDirection {
    In,
    Out,
}

/// Manual cash movement (ingress/egress) recorded against an open session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CashMovement {
    pub direction: MovementDirection,
    pub amount: f64,
    pub description: String,
    pub timestamp: i64,
}

/// Drawer-custody period from open to close.
///
/// `expected_cash` is always re-derived from the full formula
/// (opening float + cash sales + movement ins - movement outs), never
/// incremented in place. The stored `variance` at close is the exact
/// unrounded difference; tolerance applies only to the user-facing label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CashSession {
    pub id: i64,
    pub status: SessionStatus,
    pub opened_at: i64,
    /// Cash declared at drawer opening
    pub opening_float: f64,
    /// Completed sales per payment method
    #[serde(default)]
    pub sales_by_method: HashMap<PaymentMethod, f64>,
    /// Sum across methods
    pub total_sales: f64,
    /// Running estimated profit of completed sales
    pub total_profit: f64,
    #[serde(default)]
    pub movements: Vec<CashMovement>,
    pub expected_cash: f64,
    /// Sealed at close
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counted_cash: Option<f64>,
    /// counted - expected, exact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variance: Option<f64>,
}

impl CashSession {
    pub fn new(id: i64, opening_float: f64, timestamp: i64) -> Self {
        Self {
            id,
            status: SessionStatus::Open,
            opened_at: timestamp,
            opening_float,
            sales_by_method: HashMap::new(),
            total_sales: 0.0,
            total_profit: 0.0,
            movements: Vec::new(),
            expected_cash: opening_float,
            closed_at: None,
            counted_cash: None,
            variance: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == SessionStatus::Open
    }
}

/// User-facing classification of the close variance.
///
/// Presentation only; the stored variance stays exact.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VarianceClass {
    Perfect,
    Surplus,
    Shortage,
}

/// Tolerance for labeling a close as "perfect" (0.1 currency units)
pub const VARIANCE_TOLERANCE: f64 = 0.1;

impl VarianceClass {
    pub fn classify(variance: f64) -> Self {
        if variance.abs() <= VARIANCE_TOLERANCE {
            VarianceClass::Perfect
        } else if variance > 0.0 {
            VarianceClass::Surplus
        } else {
            VarianceClass::Shortage
        }
    }
}
