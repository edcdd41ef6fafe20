//! RedeemReward command handler
//!
//! Deducts a reward's cost from a customer's balance. Insufficient balance
//! fails the whole operation; there is no partial deduction.

use crate::actions::Outcome;
use crate::error::ActionError;
use crate::loyalty;
use crate::store::AppState;
use shared::command::{ActionMetadata, StateEvent, Toast};

/// RedeemReward action
#[derive(Debug, Clone)]
pub struct RedeemRewardAction {
    pub phone: String,
    pub reward_id: i64,
}

impl RedeemRewardAction {
    pub fn execute(
        &self,
        state: &mut AppState,
        metadata: &ActionMetadata,
    ) -> Result<Outcome, ActionError> {
        // 1. Reward must exist in the active program's catalog
        let program = loyalty::active_program(&state.programs).ok_or_else(|| {
            ActionError::InvalidOperation("no active loyalty program".to_string())
        })?;
        let reward = program
            .reward(self.reward_id)
            .ok_or(ActionError::RewardNotFound(self.reward_id))?
            .clone();

        // 2. Customer lookup by exact phone equality
        let customer = state
            .customers
            .get_mut(&self.phone)
            .ok_or_else(|| ActionError::CustomerNotFound(self.phone.clone()))?;

        // 3. Deduct, all or nothing
        loyalty::redeem(customer, &reward, metadata.timestamp)?;

        Ok(
            Outcome::event(StateEvent::CustomerUpdated {
                phone: self.phone.clone(),
            })
            .with_toast(Toast::success(format!("Redeemed {}", reward.name))),
        )
    }
}
