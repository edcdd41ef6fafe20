//! Loyalty accrual, redemption and program activation
//!
//! Pure functions over the customer ledger and program set. Accrual never
//! fails: a missing program, an unqualified phone or a misconfigured rule
//! degrade to zero effect so checkout always completes.

use std::collections::HashMap;

use rust_decimal::prelude::*;
use tracing::debug;

use crate::error::ActionError;
use crate::money::to_decimal;
use shared::models::{Customer, EarningRule, LoyaltyProgram, Reward};
use shared::order::Order;
use shared::util::is_loyalty_phone;

/// Points earned for an order total under a rule.
///
/// A non-positive amount_per_point is a catalog misconfiguration; it is
/// treated as 1 so the division can never fail checkout.
pub fn points_for(total: f64, rule: &EarningRule) -> i64 {
    match rule {
        EarningRule::AmountBased {
            amount_per_point,
            points_per_unit,
        } => {
            let unit = if *amount_per_point > 0.0 {
                *amount_per_point
            } else {
                1.0
            };
            let units = (to_decimal(total) / to_decimal(unit)).floor();
            units.to_i64().unwrap_or(0) * points_per_unit
        }
        EarningRule::PurchaseBased { points } => *points,
    }
}

/// Accrue points for a completed order into the customer ledger.
///
/// Returns the points earned. Creates the customer lazily on the first
/// qualifying sale; existing customers have points incremented and the order
/// appended, never replaced. Without an active program or a 9-digit phone the
/// ledger is left untouched and zero is returned.
pub fn accrue(
    customers: &mut HashMap<String, Customer>,
    order: &Order,
    program: Option<&LoyaltyProgram>,
    timestamp: i64,
) -> i64 {
    let Some(program) = program else {
        return 0;
    };

    let Some(phone) = order.customer.phone.as_deref() else {
        return 0;
    };
    if !is_loyalty_phone(phone) {
        debug!(order_id = order.id, "phone does not qualify for loyalty, skipping accrual");
        return 0;
    }

    let points = points_for(order.total, &program.rule);

    let customer = customers.entry(phone.to_string()).or_insert_with(|| {
        Customer::new(phone.to_string(), order.customer.name.clone(), timestamp)
    });
    customer.points += points;
    customer.orders.push(order.id);
    customer.updated_at = timestamp;

    debug!(
        order_id = order.id,
        phone = %phone,
        points,
        balance = customer.points,
        "loyalty points accrued"
    );

    points
}

/// Redeem a reward against a customer's balance.
///
/// Fails with `InsufficientPoints` leaving the balance unchanged; on success
/// the cost is deducted in full (no partial deduction).
pub fn redeem(
    customer: &mut Customer,
    reward: &Reward,
    timestamp: i64,
) -> Result<(), ActionError> {
    if customer.points < reward.points_cost {
        return Err(ActionError::InsufficientPoints {
            have: customer.points,
            need: reward.points_cost,
        });
    }
    customer.points -= reward.points_cost;
    customer.updated_at = timestamp;
    Ok(())
}

/// Activate one program, deactivating all others atomically.
///
/// The membership check runs before any flag is touched, so a failed call
/// leaves every program exactly as it was.
pub fn set_active(programs: &mut [LoyaltyProgram], program_id: i64) -> Result<(), ActionError> {
    if !programs.iter().any(|p| p.id == program_id) {
        return Err(ActionError::ProgramNotFound(program_id));
    }
    for program in programs.iter_mut() {
        program.is_active = program.id == program_id;
    }
    Ok(())
}

/// The single active program, if any
pub fn active_program(programs: &[LoyaltyProgram]) -> Option<&LoyaltyProgram> {
    programs.iter().find(|p| p.is_active)
}
