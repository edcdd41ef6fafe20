//! Cash session (till) operations
//!
//! Open, record-sale, manual movement and close over `CashSession`. Expected
//! cash is recomputed from the full formula after every mutation, never
//! incremented in place, so it cannot drift. The variance stored at close is
//! the exact difference; the 0.1 tolerance only affects the user-facing
//! label (`VarianceClass`).

use tracing::info;

use crate::error::ActionError;
use crate::money::{expected_cash, to_decimal, to_f64, validate_cash_amount};
use shared::models::till::{CashMovement, CashSession, MovementDirection, SessionStatus};
use shared::order::PaymentMethod;
use shared::util::snowflake_id;

/// Open a new session. Fails if one is already open.
pub fn open(
    current: Option<&CashSession>,
    opening_float: f64,
    timestamp: i64,
) -> Result<CashSession, ActionError> {
    if current.is_some_and(CashSession::is_open) {
        return Err(ActionError::SessionAlreadyOpen);
    }
    validate_cash_amount(opening_float, true)?;

    let session = CashSession::new(snowflake_id(), opening_float, timestamp);
    info!(
        session_id = session.id,
        opening_float, "cash session opened"
    );
    Ok(session)
}

/// Record a completed sale into an open session.
///
/// Per-method and overall totals accumulate with decimal arithmetic; the
/// expected-cash figure is then re-derived from the full formula.
pub fn record_sale(
    session: &mut CashSession,
    method: PaymentMethod,
    amount: f64,
    profit: f64,
) -> Result<(), ActionError> {
    if !session.is_open() {
        return Err(ActionError::SessionClosed);
    }

    let entry = session.sales_by_method.entry(method).or_insert(0.0);
    *entry = to_f64(to_decimal(*entry) + to_decimal(amount));
    session.total_sales = to_f64(to_decimal(session.total_sales) + to_decimal(amount));
    session.total_profit = to_f64(to_decimal(session.total_profit) + to_decimal(profit));

    session.expected_cash = expected_cash(session);
    Ok(())
}

/// Append a manual cash movement (ingress/egress) to an open session.
pub fn add_movement(
    session: &mut CashSession,
    direction: MovementDirection,
    amount: f64,
    description: String,
    timestamp: i64,
) -> Result<(), ActionError> {
    if !session.is_open() {
        return Err(ActionError::SessionClosed);
    }
    validate_cash_amount(amount, false)?;

    session.movements.push(CashMovement {
        direction,
        amount,
        description,
        timestamp,
    });
    session.expected_cash = expected_cash(session);
    Ok(())
}

/// Close the session against a counted cash amount.
///
/// Returns the exact variance (counted - expected) and seals the session;
/// a sealed session rejects every further operation.
pub fn close(
    session: &mut CashSession,
    counted_cash: f64,
    timestamp: i64,
) -> Result<f64, ActionError> {
    if !session.is_open() {
        return Err(ActionError::SessionClosed);
    }
    validate_cash_amount(counted_cash, true)?;

    // Re-derive once more before reconciling
    session.expected_cash = expected_cash(session);
    let variance = to_f64(to_decimal(counted_cash) - to_decimal(session.expected_cash));

    session.status = SessionStatus::Closed;
    session.closed_at = Some(timestamp);
    session.counted_cash = Some(counted_cash);
    session.variance = Some(variance);

    info!(
        session_id = session.id,
        expected = session.expected_cash,
        counted = counted_cash,
        variance,
        "cash session closed"
    );
    Ok(variance)
}
