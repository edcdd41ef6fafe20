//! AssignStaff command handler
//!
//! Cook assignment for dine-in, driver assignment for delivery.

use crate::actions::Outcome;
use crate::error::ActionError;
use crate::status::{ensure_active, load_order_mut};
use crate::store::AppState;
use shared::command::{ActionMetadata, StateEvent};
use shared::order::{Channel, StaffAssignment};

/// AssignStaff action
#[derive(Debug, Clone)]
pub struct AssignStaffAction {
    pub order_id: i64,
    pub assignment: StaffAssignment,
}

impl AssignStaffAction {
    pub fn execute(
        &self,
        state: &mut AppState,
        _metadata: &ActionMetadata,
    ) -> Result<Outcome, ActionError> {
        let order = load_order_mut(&mut state.orders, self.order_id)?;
        ensure_active(order)?;

        match (&self.assignment, order.channel) {
            (StaffAssignment::Cook(name), Channel::DineIn) => {
                order.assigned_cook = Some(name.clone());
            }
            (StaffAssignment::Driver(name), Channel::Delivery) => {
                order.assigned_driver = Some(name.clone());
            }
            (StaffAssignment::Cook(_), channel) => {
                return Err(ActionError::InvalidOperation(format!(
                    "cook assignment is dine-in only, order is {:?}",
                    channel
                )));
            }
            (StaffAssignment::Driver(_), channel) => {
                return Err(ActionError::InvalidOperation(format!(
                    "driver assignment is delivery only, order is {:?}",
                    channel
                )));
            }
        }

        Ok(Outcome::event(StateEvent::StaffAssigned {
            order_id: self.order_id,
        }))
    }
}
