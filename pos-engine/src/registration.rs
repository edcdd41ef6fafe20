//! Sale registration
//!
//! The bookkeeping transform run exactly once per order, at the moment a
//! payment is confirmed. It stamps profit and points on the order, decrements
//! catalog stock and runs loyalty accrual.
//!
//! This function never fails: unmatched products and malformed phone numbers
//! degrade to zero effect. A lost sale must never block checkout completion.
//! Deciding *when* it is safe to run is the status machine's job, not this
//! function's.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::loyalty;
use crate::money::{to_decimal, to_f64};
use shared::models::{Customer, LoyaltyProgram, Product};
use shared::order::Order;

/// The three values sale registration is allowed to touch
#[derive(Debug, Clone)]
pub struct Registration {
    pub order: Order,
    pub catalog: HashMap<String, Product>,
    pub customers: HashMap<String, Customer>,
}

/// Register a sale.
///
/// 1. Estimated profit = total - sum(quantity * cost basis); items without a
///    cost basis contribute zero cost.
/// 2. Stock decrement per line item, floored at zero. Zero-price reward items
///    consume physical inventory like any other line.
/// 3. Loyalty accrual per the active program.
pub fn register_sale(
    mut order: Order,
    mut catalog: HashMap<String, Product>,
    mut customers: HashMap<String, Customer>,
    program: Option<&LoyaltyProgram>,
    timestamp: i64,
) -> Registration {
    // 1. Estimated profit
    let mut cost = Decimal::ZERO;
    for item in &order.items {
        match catalog.get(&item.product_id) {
            Some(product) => {
                let basis = product.cost.map(to_decimal).unwrap_or(Decimal::ZERO);
                cost += basis * Decimal::from(item.quantity);
            }
            None => {
                debug!(
                    order_id = order.id,
                    product_id = %item.product_id,
                    "product not in catalog, contributes zero cost"
                );
            }
        }
    }
    order.estimated_profit = Some(to_f64(to_decimal(order.total) - cost));

    // 2. Stock decrement, floored at zero
    for item in &order.items {
        if let Some(product) = catalog.get_mut(&item.product_id) {
            product.stock = (product.stock - item.quantity).max(0);
        }
    }

    // 3. Loyalty accrual
    let points = loyalty::accrue(&mut customers, &order, program, timestamp);
    order.earned_points = Some(points);

    Registration {
        order,
        catalog,
        customers,
    }
}
