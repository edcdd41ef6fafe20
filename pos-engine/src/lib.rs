//! POS engine
//!
//! The order state machine and cash-session reconciliation engine behind the
//! typed action protocol in `shared`:
//!
//! - **actions**: one handler per action, validated against a state snapshot
//! - **store**: single-writer dispatcher; clone-validate-swap plus event broadcast
//! - **money**: rust_decimal arithmetic behind an f64-at-rest boundary
//! - **registration**: the sale-registration transform run once per paid order
//! - **loyalty**: accrual, redemption and the single-active-program swap
//! - **till**: cash session open/record/move/close with full-formula recompute
//!
//! # Data Flow
//!
//! ```text
//! Action + ActionMetadata
//!     → Store::dispatch
//!         → handler validates against a cloned state
//!         → on success the clone replaces the live state atomically
//!         → StateEvent broadcast to subscribers
//!     → CommandResponse (typed error + toasts on failure)
//! ```

pub mod actions;
pub mod error;
pub mod items;
pub mod loyalty;
pub mod money;
pub mod registration;
pub mod status;
pub mod store;
pub mod till;

// Re-exports
pub use error::ActionError;
pub use store::{AppState, Store};

// Re-export shared types for convenience
pub use shared::command::{
    Action, ActionMetadata, CommandError, CommandErrorCode, CommandResponse, StateEvent, Toast,
};
pub use shared::order::{Channel, Order, OrderStatus, PaymentMethod};
