//! SetActiveLoyaltyProgram command handler
//!
//! Activating one program deactivates every other in the same dispatch;
//! there is no observable window with two active programs.

use crate::actions::Outcome;
use crate::error::ActionError;
use crate::loyalty;
use crate::store::AppState;
use shared::command::{ActionMetadata, StateEvent};

/// SetActiveLoyaltyProgram action
#[derive(Debug, Clone)]
pub struct SetActiveProgramAction {
    pub program_id: i64,
}

impl SetActiveProgramAction {
    pub fn execute(
        &self,
        state: &mut AppState,
        _metadata: &ActionMetadata,
    ) -> Result<Outcome, ActionError> {
        loyalty::set_active(&mut state.programs, self.program_id)?;

        Ok(Outcome::event(StateEvent::ProgramActivated {
            program_id: self.program_id,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{EarningRule, LoyaltyProgram};
    use shared::order::ActorRole;

    fn metadata() -> ActionMetadata {
        ActionMetadata {
            command_id: "cmd-1".to_string(),
            actor_id: 1,
            actor_name: "Test Operator".to_string(),
            actor_role: ActorRole::Admin,
            timestamp: 1_000,
        }
    }

    fn program(id: i64, is_active: bool) -> LoyaltyProgram {
        LoyaltyProgram {
            id,
            name: format!("Program {}", id),
            rule: EarningRule::PurchaseBased { points: 1 },
            rewards: vec![],
            is_active,
        }
    }

    #[test]
    fn test_exactly_one_active_after_switch() {
        let mut state = AppState::default();
        state.programs = vec![program(1, true), program(2, false), program(3, false)];

        SetActiveProgramAction { program_id: 3 }
            .execute(&mut state, &metadata())
            .unwrap();

        let active: Vec<i64> = state
            .programs
            .iter()
            .filter(|p| p.is_active)
            .map(|p| p.id)
            .collect();
        assert_eq!(active, vec![3]);
    }

    #[test]
    fn test_unknown_program_leaves_flags() {
        let mut state = AppState::default();
        state.programs = vec![program(1, true)];

        let result = SetActiveProgramAction { program_id: 9 }.execute(&mut state, &metadata());
        assert_eq!(result.unwrap_err(), ActionError::ProgramNotFound(9));
        assert!(state.programs[0].is_active);
    }
}
