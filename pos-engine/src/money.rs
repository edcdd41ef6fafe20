//! Money calculation utilities using rust_decimal for precision
//!
//! All arithmetic is done with `Decimal` internally, then converted to `f64`
//! for storage/serialization. Order totals and the expected-cash figure are
//! always recomputed from their full formulas; nothing monetary is
//! incremented in place.

use rust_decimal::prelude::*;

use crate::error::ActionError;
use shared::models::till::{CashSession, MovementDirection};
use shared::order::{ItemInput, Order, PaymentInput, PaymentMethod};

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Maximum allowed price per item
const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per item
const MAX_QUANTITY: i32 = 9999;
/// Maximum allowed cash amount (tendered, float, movement)
const MAX_AMOUNT: f64 = 1_000_000.0;

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
fn require_finite(value: f64, field_name: &str) -> Result<(), ActionError> {
    if !value.is_finite() {
        return Err(ActionError::InvalidOperation(format!(
            "{} must be a finite number, got {}",
            field_name, value
        )));
    }
    Ok(())
}

/// Validate an ItemInput before it enters an order
pub fn validate_item_input(item: &ItemInput) -> Result<(), ActionError> {
    require_finite(item.price, "price")?;
    if item.price < 0.0 {
        return Err(ActionError::InvalidOperation(format!(
            "price must be non-negative, got {}",
            item.price
        )));
    }
    if item.price > MAX_PRICE {
        return Err(ActionError::InvalidOperation(format!(
            "price exceeds maximum allowed ({}), got {}",
            MAX_PRICE, item.price
        )));
    }

    if item.quantity <= 0 {
        return Err(ActionError::InvalidOperation(format!(
            "quantity must be positive, got {}",
            item.quantity
        )));
    }
    if item.quantity > MAX_QUANTITY {
        return Err(ActionError::InvalidOperation(format!(
            "quantity exceeds maximum allowed ({}), got {}",
            MAX_QUANTITY, item.quantity
        )));
    }

    for addon in &item.addons {
        require_finite(addon.price, "addon price")?;
        if addon.price < 0.0 {
            return Err(ActionError::InvalidOperation(format!(
                "addon price must be non-negative, got {}",
                addon.price
            )));
        }
        if addon.price > MAX_PRICE {
            return Err(ActionError::InvalidOperation(format!(
                "addon price exceeds maximum allowed ({}), got {}",
                MAX_PRICE, addon.price
            )));
        }
    }

    Ok(())
}

/// Validate a cash amount (opening float, counted cash, movement amount)
pub fn validate_cash_amount(amount: f64, allow_zero: bool) -> Result<(), ActionError> {
    if !amount.is_finite() {
        return Err(ActionError::InvalidAmount);
    }
    if amount < 0.0 || (!allow_zero && amount == 0.0) {
        return Err(ActionError::InvalidAmount);
    }
    if amount > MAX_AMOUNT {
        return Err(ActionError::InvalidAmount);
    }
    Ok(())
}

/// Validate a PaymentInput against the order total.
///
/// Cash payments need either the exact-amount flag or a sufficient tendered
/// amount; non-cash methods ignore tendered.
pub fn validate_payment_input(payment: &PaymentInput, total: f64) -> Result<(), ActionError> {
    if let Some(t) = payment.tendered {
        require_finite(t, "tendered")?;
        if t < 0.0 {
            return Err(ActionError::InvalidOperation(
                "tendered amount must be non-negative".to_string(),
            ));
        }
        if t > MAX_AMOUNT {
            return Err(ActionError::InvalidOperation(format!(
                "tendered exceeds maximum allowed ({}), got {}",
                MAX_AMOUNT, t
            )));
        }
    }

    if payment.method == PaymentMethod::Cash && !payment.exact_amount {
        let tendered = payment.tendered.ok_or_else(|| {
            ActionError::InvalidOperation(
                "cash payment requires a tendered amount or the exact-amount flag".to_string(),
            )
        })?;
        if to_decimal(tendered) < to_decimal(total) - MONEY_TOLERANCE {
            return Err(ActionError::InvalidOperation(format!(
                "tendered {:.2} is less than total {:.2}",
                tendered, total
            )));
        }
    }

    Ok(())
}

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Line total: (unit price + addon prices) * quantity
pub fn line_total(item: &shared::order::OrderItem) -> Decimal {
    let addons: Decimal = item.addons.iter().map(|a| to_decimal(a.price)).sum();
    let unit = to_decimal(item.price) + addons;
    unit * Decimal::from(item.quantity)
}

/// Recompute the order total from its items.
///
/// total = sum((item.price + sum(addon.price)) * quantity)
pub fn recalculate_total(order: &mut Order) {
    let total: Decimal = order.items.iter().map(line_total).sum();
    order.total = to_f64(total);
}

/// Change due on a cash payment, never negative
pub fn change_due(tendered: f64, total: f64) -> f64 {
    let diff = to_decimal(tendered) - to_decimal(total);
    to_f64(diff.max(Decimal::ZERO))
}

/// Expected cash on hand, re-derived from the full formula:
/// opening float + cash-method sales + movement ins - movement outs.
pub fn expected_cash(session: &CashSession) -> f64 {
    let cash_sales = session
        .sales_by_method
        .get(&PaymentMethod::Cash)
        .copied()
        .map(to_decimal)
        .unwrap_or(Decimal::ZERO);

    let mut ins = Decimal::ZERO;
    let mut outs = Decimal::ZERO;
    for movement in &session.movements {
        match movement.direction {
            MovementDirection::In => ins += to_decimal(movement.amount),
            MovementDirection::Out => outs += to_decimal(movement.amount),
        }
    }

    to_f64(to_decimal(session.opening_float) + cash_sales + ins - outs)
}
