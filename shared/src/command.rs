//! Command envelope: typed actions, metadata, responses and state events
//!
//! This is the protocol the UI layer speaks to the engine. The action enum is
//! closed; every payload the engine can receive is representable here, so the
//! dispatcher is total by construction.

use serde::{Deserialize, Serialize};

use crate::models::till::MovementDirection;
use crate::order::{
    ActorRole, ItemInput, OrderDraft, OrderStatus, PaymentInput, StaffAssignment,
};

// ============================================================================
// Actions
// ============================================================================

/// Typed action dispatched into the store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Assigns an id, computes the entry status, seeds history
    PlaceOrder { draft: OrderDraft },
    /// Explicit staff transition, checked against the transition table
    UpdateOrderStatus {
        order_id: i64,
        new_status: OrderStatus,
    },
    /// Dine-in re-orders; merged by instance id and marked unsent
    AddItems {
        order_id: i64,
        items: Vec<ItemInput>,
    },
    /// Kitchen transmission: clears the unsent flags
    MarkItemsSent { order_id: i64 },
    /// Dine-in pre-bill; rejected while unsent items exist
    RequestBill { order_id: i64 },
    /// Settles the order, runs sale registration, records into the session
    ConfirmPayment {
        order_id: i64,
        payment: PaymentInput,
    },
    CancelOrder {
        order_id: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
    AssignStaff {
        order_id: i64,
        assignment: StaffAssignment,
    },
    OpenCashSession { opening_float: f64 },
    CloseCashSession { counted_cash: f64 },
    AddCashMovement {
        direction: MovementDirection,
        amount: f64,
        description: String,
    },
    RedeemReward { phone: String, reward_id: i64 },
    SetActiveLoyaltyProgram { program_id: i64 },
}

/// Metadata accompanying every dispatch.
///
/// Handlers never read the clock; the timestamp is fixed here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionMetadata {
    /// Unique per dispatch; duplicates are acknowledged without re-applying
    pub command_id: String,
    pub actor_id: i64,
    pub actor_name: String,
    pub actor_role: ActorRole,
    pub timestamp: i64,
}

impl ActionMetadata {
    pub fn new(actor_id: i64, actor_name: impl Into<String>, actor_role: ActorRole) -> Self {
        Self {
            command_id: uuid::Uuid::new_v4().to_string(),
            actor_id,
            actor_name: actor_name.into(),
            actor_role,
            timestamp: crate::util::now_millis(),
        }
    }
}

/// Wire envelope: one action plus its metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Command {
    pub metadata: ActionMetadata,
    pub action: Action,
}

// ============================================================================
// Responses
// ============================================================================

/// Command response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    /// The command ID this responds to
    pub command_id: String,
    pub success: bool,
    /// New order ID (only for PlaceOrder)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,
    /// Error details if failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CommandError>,
    /// Transient user-facing notifications; never part of authoritative state
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub toasts: Vec<Toast>,
}

impl CommandResponse {
    pub fn success(command_id: String, order_id: Option<i64>) -> Self {
        Self {
            command_id,
            success: true,
            order_id,
            error: None,
            toasts: Vec::new(),
        }
    }

    pub fn error(command_id: String, error: CommandError) -> Self {
        let toast = Toast::danger(error.message.clone());
        Self {
            command_id,
            success: false,
            order_id: None,
            error: Some(error),
            toasts: vec![toast],
        }
    }

    /// Duplicate command: acknowledged, nothing re-applied
    pub fn duplicate(command_id: String) -> Self {
        Self {
            command_id,
            success: true,
            order_id: None,
            error: None,
            toasts: Vec::new(),
        }
    }

    pub fn with_toasts(mut self, toasts: Vec<Toast>) -> Self {
        self.toasts = toasts;
        self
    }
}

/// Command error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandError {
    pub code: CommandErrorCode,
    pub message: String,
}

impl CommandError {
    pub fn new(code: CommandErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Command error codes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandErrorCode {
    OrderNotFound,
    InvalidTransition,
    UnsentItems,
    NoOpenSession,
    SessionAlreadyOpen,
    SessionClosed,
    CustomerNotFound,
    RewardNotFound,
    ProgramNotFound,
    InsufficientPoints,
    InvalidAmount,
    InvalidOperation,
    DuplicateCommand,
    InternalError,
}

// ============================================================================
// Toasts
// ============================================================================

/// Severity tag for transient notifications
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ToastSeverity {
    Success,
    Info,
    Danger,
}

/// Transient user-facing notification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Toast {
    pub severity: ToastSeverity,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: ToastSeverity::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: ToastSeverity::Info,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            severity: ToastSeverity::Danger,
            message: message.into(),
        }
    }
}

// ============================================================================
// State events
// ============================================================================

/// Event broadcast to subscribers after a successful dispatch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StateEvent {
    OrderPlaced { order_id: i64 },
    OrderStatusChanged { order_id: i64, status: OrderStatus },
    OrderItemsChanged { order_id: i64 },
    OrderPaid { order_id: i64 },
    OrderCancelled { order_id: i64 },
    StaffAssigned { order_id: i64 },
    SessionOpened { session_id: i64 },
    SessionClosed { session_id: i64, variance: f64 },
    CashMovementRecorded { session_id: i64 },
    CustomerUpdated { phone: String },
    ProgramActivated { program_id: i64 },
}
