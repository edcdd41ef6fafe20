//! Shared types for the POS core
//!
//! Domain data types used across the workspace: order entity and status
//! machine, catalog/customer/loyalty/till models, the command envelope
//! consumed by the engine, and id/time utilities.

pub mod command;
pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use command::{
    Action, ActionMetadata, Command, CommandError, CommandErrorCode, CommandResponse, StateEvent,
    Toast, ToastSeverity,
};
pub use order::{Channel, Order, OrderStatus, PaymentMethod, PrepArea};
