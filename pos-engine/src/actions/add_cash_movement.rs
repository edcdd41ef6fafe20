//! AddCashMovement command handler
//!
//! Manual cash ingress/egress against the open session.

use crate::actions::Outcome;
use crate::error::ActionError;
use crate::store::AppState;
use crate::till;
use shared::command::{ActionMetadata, StateEvent};
use shared::models::till::MovementDirection;

/// AddCashMovement action
#[derive(Debug, Clone)]
pub struct AddCashMovementAction {
    pub direction: MovementDirection,
    pub amount: f64,
    pub description: String,
}

impl AddCashMovementAction {
    pub fn execute(
        &self,
        state: &mut AppState,
        metadata: &ActionMetadata,
    ) -> Result<Outcome, ActionError> {
        let session = state.session.as_mut().ok_or(ActionError::NoOpenSession)?;

        till::add_movement(
            session,
            self.direction,
            self.amount,
            self.description.clone(),
            metadata.timestamp,
        )?;

        Ok(Outcome::event(StateEvent::CashMovementRecorded {
            session_id: session.id,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::OpenCashSessionAction;
    use shared::order::ActorRole;

    fn metadata() -> ActionMetadata {
        ActionMetadata {
            command_id: "cmd-1".to_string(),
            actor_id: 1,
            actor_name: "Test Operator".to_string(),
            actor_role: ActorRole::Cashier,
            timestamp: 1_000,
        }
    }

    #[test]
    fn test_movement_updates_expected_cash() {
        let mut state = AppState::default();
        OpenCashSessionAction {
            opening_float: 100.0,
        }
        .execute(&mut state, &metadata())
        .unwrap();

        AddCashMovementAction {
            direction: MovementDirection::Out,
            amount: 20.0,
            description: "petty cash".to_string(),
        }
        .execute(&mut state, &metadata())
        .unwrap();

        let session = state.session.as_ref().unwrap();
        assert_eq!(session.expected_cash, 80.0);
        assert_eq!(session.movements.len(), 1);
        assert_eq!(session.movements[0].description, "petty cash");
    }

    #[test]
    fn test_movement_without_session_rejected() {
        let mut state = AppState::default();
        let result = AddCashMovementAction {
            direction: MovementDirection::In,
            amount: 20.0,
            description: "x".to_string(),
        }
        .execute(&mut state, &metadata());

        assert_eq!(result.unwrap_err(), ActionError::NoOpenSession);
    }
}
