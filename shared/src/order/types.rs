//! Shared types for orders and payment settlement

use serde::{Deserialize, Serialize};

use super::status::{Channel, OrderStatus};

// ============================================================================
// Payment
// ============================================================================

/// Payment method
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    Card,
    /// Pay-now wallet, variant A
    Yape,
    /// Pay-now wallet, variant B
    Plin,
    Online,
}

impl PaymentMethod {
    /// Pay-now methods settle through the gateway before the kitchen sees
    /// the order.
    pub fn is_pay_now(self) -> bool {
        matches!(
            self,
            PaymentMethod::Yape | PaymentMethod::Plin | PaymentMethod::Online
        )
    }
}

/// Payment input for confirming an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentInput {
    pub method: PaymentMethod,
    /// Cash tendered by the customer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tendered: Option<f64>,
    /// Customer pays the exact total, no change due
    #[serde(default)]
    pub exact_amount: bool,
}

/// Proof-of-payment attached to a paid order. Immutable once attached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settlement {
    pub method: PaymentMethod,
    pub total: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tendered: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<f64>,
    pub timestamp: i64,
}

// ============================================================================
// Line items
// ============================================================================

/// Per-item add-on (sauce, condiment) with its own price
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddOn {
    pub name: String,
    pub price: f64,
}

/// Item input - for placing orders or adding items (without instance_id)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemInput {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addons: Vec<AddOn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Order line item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub product_id: String,
    /// Content-addressed hash of the identity-defining fields. Lines with the
    /// same instance_id merge by quantity.
    pub instance_id: String,
    pub name: String,
    /// Unit price
    pub price: f64,
    pub quantity: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addons: Vec<AddOn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Whether this line has been transmitted to the kitchen
    #[serde(default)]
    pub sent_to_kitchen: bool,
}

// ============================================================================
// Actors and history
// ============================================================================

/// Staff role dispatching an action
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActorRole {
    Admin,
    Manager,
    Cashier,
    Waiter,
    Cook,
    Driver,
}

/// One entry of the append-only status history
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct StatusEntry {
    pub status: OrderStatus,
    pub timestamp: i64,
    pub actor_role: ActorRole,
}

/// Cook / driver assignment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StaffAssignment {
    /// Dine-in only
    Cook(String),
    /// Delivery only
    Driver(String),
}

// ============================================================================
// Customer info and drafts
// ============================================================================

/// Customer details captured on the order
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CustomerInfo {
    pub name: String,
    /// 9 digits to qualify for loyalty matching
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Delivery orders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Dine-in orders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
}

/// Order draft - everything PlaceOrder needs. Carries no id; the id is
/// assigned at confirmation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDraft {
    pub channel: Channel,
    pub customer: CustomerInfo,
    pub items: Vec<ItemInput>,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tendered: Option<f64>,
    #[serde(default)]
    pub exact_amount: bool,
    /// Estimated preparation time in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<i32>,
}
