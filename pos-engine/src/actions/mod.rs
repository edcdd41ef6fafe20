//! Action handler implementations
//!
//! One file per action. Each handler validates against the state snapshot it
//! is given and mutates it only after every check has passed; the store
//! hands handlers a clone, so a returned error leaves the live state
//! untouched.

use crate::error::ActionError;
use crate::store::AppState;
use shared::command::{Action, ActionMetadata, StateEvent, Toast};

mod add_cash_movement;
mod add_items;
mod assign_staff;
mod cancel_order;
mod close_cash_session;
mod confirm_payment;
mod mark_items_sent;
mod open_cash_session;
mod place_order;
mod redeem_reward;
mod request_bill;
mod set_active_program;
mod update_order_status;

pub use add_cash_movement::AddCashMovementAction;
pub use add_items::AddItemsAction;
pub use assign_staff::AssignStaffAction;
pub use cancel_order::CancelOrderAction;
pub use close_cash_session::CloseCashSessionAction;
pub use confirm_payment::ConfirmPaymentAction;
pub use mark_items_sent::MarkItemsSentAction;
pub use open_cash_session::OpenCashSessionAction;
pub use place_order::PlaceOrderAction;
pub use redeem_reward::RedeemRewardAction;
pub use request_bill::RequestBillAction;
pub use set_active_program::SetActiveProgramAction;
pub use update_order_status::UpdateOrderStatusAction;

/// What a successful handler hands back to the store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outcome {
    /// New order ID (only for PlaceOrder)
    pub order_id: Option<i64>,
    /// Broadcast to subscribers after the state swap
    pub events: Vec<StateEvent>,
    /// Transient notifications returned in the response
    pub toasts: Vec<Toast>,
}

impl Outcome {
    pub fn event(event: StateEvent) -> Self {
        Self {
            order_id: None,
            events: vec![event],
            toasts: Vec::new(),
        }
    }

    pub fn with_toast(mut self, toast: Toast) -> Self {
        self.toasts.push(toast);
        self
    }
}

/// ActionHandler enum - dispatches to concrete handler implementations
pub enum ActionHandler {
    PlaceOrder(PlaceOrderAction),
    UpdateOrderStatus(UpdateOrderStatusAction),
    AddItems(AddItemsAction),
    MarkItemsSent(MarkItemsSentAction),
    RequestBill(RequestBillAction),
    ConfirmPayment(ConfirmPaymentAction),
    CancelOrder(CancelOrderAction),
    AssignStaff(AssignStaffAction),
    OpenCashSession(OpenCashSessionAction),
    CloseCashSession(CloseCashSessionAction),
    AddCashMovement(AddCashMovementAction),
    RedeemReward(RedeemRewardAction),
    SetActiveProgram(SetActiveProgramAction),
}

impl ActionHandler {
    pub fn execute(
        &self,
        state: &mut AppState,
        metadata: &ActionMetadata,
    ) -> Result<Outcome, ActionError> {
        match self {
            ActionHandler::PlaceOrder(action) => action.execute(state, metadata),
            ActionHandler::UpdateOrderStatus(action) => action.execute(state, metadata),
            ActionHandler::AddItems(action) => action.execute(state, metadata),
            ActionHandler::MarkItemsSent(action) => action.execute(state, metadata),
            ActionHandler::RequestBill(action) => action.execute(state, metadata),
            ActionHandler::ConfirmPayment(action) => action.execute(state, metadata),
            ActionHandler::CancelOrder(action) => action.execute(state, metadata),
            ActionHandler::AssignStaff(action) => action.execute(state, metadata),
            ActionHandler::OpenCashSession(action) => action.execute(state, metadata),
            ActionHandler::CloseCashSession(action) => action.execute(state, metadata),
            ActionHandler::AddCashMovement(action) => action.execute(state, metadata),
            ActionHandler::RedeemReward(action) => action.execute(state, metadata),
            ActionHandler::SetActiveProgram(action) => action.execute(state, metadata),
        }
    }
}

/// Convert an Action into its handler.
///
/// This is the only place with a match on the Action enum; the closed enum
/// makes dispatch total at compile time.
impl From<&Action> for ActionHandler {
    fn from(action: &Action) -> Self {
        match action {
            Action::PlaceOrder { draft } => ActionHandler::PlaceOrder(PlaceOrderAction {
                draft: draft.clone(),
            }),
            Action::UpdateOrderStatus {
                order_id,
                new_status,
            } => ActionHandler::UpdateOrderStatus(UpdateOrderStatusAction {
                order_id: *order_id,
                new_status: *new_status,
            }),
            Action::AddItems { order_id, items } => ActionHandler::AddItems(AddItemsAction {
                order_id: *order_id,
                items: items.clone(),
            }),
            Action::MarkItemsSent { order_id } => {
                ActionHandler::MarkItemsSent(MarkItemsSentAction {
                    order_id: *order_id,
                })
            }
            Action::RequestBill { order_id } => ActionHandler::RequestBill(RequestBillAction {
                order_id: *order_id,
            }),
            Action::ConfirmPayment { order_id, payment } => {
                ActionHandler::ConfirmPayment(ConfirmPaymentAction {
                    order_id: *order_id,
                    payment: payment.clone(),
                })
            }
            Action::CancelOrder { order_id, reason } => {
                ActionHandler::CancelOrder(CancelOrderAction {
                    order_id: *order_id,
                    reason: reason.clone(),
                })
            }
            Action::AssignStaff {
                order_id,
                assignment,
            } => ActionHandler::AssignStaff(AssignStaffAction {
                order_id: *order_id,
                assignment: assignment.clone(),
            }),
            Action::OpenCashSession { opening_float } => {
                ActionHandler::OpenCashSession(OpenCashSessionAction {
                    opening_float: *opening_float,
                })
            }
            Action::CloseCashSession { counted_cash } => {
                ActionHandler::CloseCashSession(CloseCashSessionAction {
                    counted_cash: *counted_cash,
                })
            }
            Action::AddCashMovement {
                direction,
                amount,
                description,
            } => ActionHandler::AddCashMovement(AddCashMovementAction {
                direction: *direction,
                amount: *amount,
                description: description.clone(),
            }),
            Action::RedeemReward { phone, reward_id } => {
                ActionHandler::RedeemReward(RedeemRewardAction {
                    phone: phone.clone(),
                    reward_id: *reward_id,
                })
            }
            Action::SetActiveLoyaltyProgram { program_id } => {
                ActionHandler::SetActiveProgram(SetActiveProgramAction {
                    program_id: *program_id,
                })
            }
        }
    }
}
