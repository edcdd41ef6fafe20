//! Order entity and status machine
//!
//! The `Order` struct is pure data plus the invariant-preserving mutators:
//! status changes always go through `push_status` (history stays coupled to
//! the current status), and the total is only ever recomputed from the items,
//! never patched incrementally.

pub mod status;
pub mod types;

// Re-exports
pub use status::{Channel, OrderStatus, PrepArea};
pub use types::*;

use serde::{Deserialize, Serialize};

/// A single customer order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Snowflake id, assigned at confirmation time
    pub id: i64,
    /// Fixed at creation, never changes
    pub channel: Channel,
    pub status: OrderStatus,
    pub customer: CustomerInfo,
    pub items: Vec<OrderItem>,
    /// Always equals the recomputed sum over items; never stored stale
    pub total: f64,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tendered: Option<f64>,
    #[serde(default)]
    pub exact_amount: bool,
    /// Append-only status log; the last entry always matches `status`
    pub history: Vec<StatusEntry>,
    pub estimated_minutes: i32,
    /// Fixed creation timestamp. Elapsed time is derived at render time.
    pub created_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_cook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_driver: Option<String>,
    /// Kitchen lane, derived from the channel
    pub prep_area: PrepArea,
    /// Present iff status is Paid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement: Option<Settlement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_reason: Option<String>,
    /// Stamped at sale registration only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earned_points: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_profit: Option<f64>,
}

impl Order {
    /// Create an order in its entry status, history seeded with one entry.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        channel: Channel,
        customer: CustomerInfo,
        payment_method: PaymentMethod,
        tendered: Option<f64>,
        exact_amount: bool,
        estimated_minutes: i32,
        actor_role: ActorRole,
        timestamp: i64,
    ) -> Self {
        let entry = OrderStatus::entry_for(channel, payment_method);
        Self {
            id,
            channel,
            status: entry,
            customer,
            items: Vec::new(),
            total: 0.0,
            payment_method,
            tendered,
            exact_amount,
            history: vec![StatusEntry {
                status: entry,
                timestamp,
                actor_role,
            }],
            estimated_minutes,
            created_at: timestamp,
            assigned_cook: None,
            assigned_driver: None,
            prep_area: PrepArea::from(channel),
            settlement: None,
            cancel_reason: None,
            earned_points: None,
            estimated_profit: None,
        }
    }

    /// Set the status and append the matching history entry.
    ///
    /// This is the only legal way to change `status`; callers must have
    /// checked the transition table first.
    pub fn push_status(&mut self, status: OrderStatus, actor_role: ActorRole, timestamp: i64) {
        self.status = status;
        self.history.push(StatusEntry {
            status,
            timestamp,
            actor_role,
        });
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn is_paid(&self) -> bool {
        self.status == OrderStatus::Paid
    }

    /// Any line not yet transmitted to the kitchen
    pub fn has_unsent_items(&self) -> bool {
        self.items.iter().any(|i| !i.sent_to_kitchen)
    }

    /// Mark every line as transmitted to the kitchen
    pub fn mark_all_sent(&mut self) {
        for item in &mut self.items {
            item.sent_to_kitchen = true;
        }
    }

    /// Elapsed seconds since creation, derived from the fixed creation
    /// timestamp (never stored as a counter).
    pub fn elapsed_seconds(&self, now_millis: i64) -> i64 {
        ((now_millis - self.created_at) / 1000).max(0)
    }
}
