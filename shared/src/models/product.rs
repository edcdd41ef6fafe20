//! Product Model

use serde::{Deserialize, Serialize};

/// Catalog product.
///
/// Stock is mutated only by sale registration; no other path decrements it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Selling price
    pub price: f64,
    /// Recorded cost basis for profit estimation. Items lacking one
    /// contribute zero cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    /// Units on hand, floored at zero
    pub stock: i32,
}
