//! Engine error types
//!
//! `ActionError` covers every expected domain condition; handlers return it
//! instead of panicking. The store maps it onto the wire `CommandError`.

use shared::command::{CommandError, CommandErrorCode};
use shared::order::OrderStatus;
use thiserror::Error;

/// Error produced by an action handler. The state is untouched whenever one
/// of these is returned.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ActionError {
    #[error("order {0} not found")]
    OrderNotFound(i64),

    #[error("illegal transition {from:?} -> {to:?}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("order {0} has items not yet sent to the kitchen")]
    UnsentItems(i64),

    #[error("no cash session is open")]
    NoOpenSession,

    #[error("a cash session is already open")]
    SessionAlreadyOpen,

    #[error("cash session is closed")]
    SessionClosed,

    #[error("customer {0} not found")]
    CustomerNotFound(String),

    #[error("reward {0} not found in the active program")]
    RewardNotFound(i64),

    #[error("loyalty program {0} not found")]
    ProgramNotFound(i64),

    #[error("insufficient points: have {have}, need {need}")]
    InsufficientPoints { have: i64, need: i64 },

    #[error("invalid amount")]
    InvalidAmount,

    #[error("{0}")]
    InvalidOperation(String),
}

impl From<ActionError> for CommandError {
    fn from(err: ActionError) -> Self {
        let code = match &err {
            ActionError::OrderNotFound(_) => CommandErrorCode::OrderNotFound,
            ActionError::InvalidTransition { .. } => CommandErrorCode::InvalidTransition,
            ActionError::UnsentItems(_) => CommandErrorCode::UnsentItems,
            ActionError::NoOpenSession => CommandErrorCode::NoOpenSession,
            ActionError::SessionAlreadyOpen => CommandErrorCode::SessionAlreadyOpen,
            ActionError::SessionClosed => CommandErrorCode::SessionClosed,
            ActionError::CustomerNotFound(_) => CommandErrorCode::CustomerNotFound,
            ActionError::RewardNotFound(_) => CommandErrorCode::RewardNotFound,
            ActionError::ProgramNotFound(_) => CommandErrorCode::ProgramNotFound,
            ActionError::InsufficientPoints { .. } => CommandErrorCode::InsufficientPoints,
            ActionError::InvalidAmount => CommandErrorCode::InvalidAmount,
            ActionError::InvalidOperation(_) => CommandErrorCode::InvalidOperation,
        };
        CommandError::new(code, err.to_string())
    }
}
