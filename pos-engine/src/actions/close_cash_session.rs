//! CloseCashSession command handler
//!
//! Counted-vs-expected reconciliation. The sealed session moves to the
//! archive; the variance label in the toast uses the presentation tolerance
//! while the stored variance stays exact.

use crate::actions::Outcome;
use crate::error::ActionError;
use crate::store::AppState;
use crate::till;
use shared::command::{ActionMetadata, StateEvent, Toast};
use shared::models::till::VarianceClass;

/// CloseCashSession action
#[derive(Debug, Clone)]
pub struct CloseCashSessionAction {
    pub counted_cash: f64,
}

impl CloseCashSessionAction {
    pub fn execute(
        &self,
        state: &mut AppState,
        metadata: &ActionMetadata,
    ) -> Result<Outcome, ActionError> {
        let mut session = state.session.take().ok_or(ActionError::NoOpenSession)?;

        let variance = match till::close(&mut session, self.counted_cash, metadata.timestamp) {
            Ok(variance) => variance,
            Err(err) => {
                state.session = Some(session);
                return Err(err);
            }
        };

        let session_id = session.id;
        state.closed_sessions.push(session);

        let toast = match VarianceClass::classify(variance) {
            VarianceClass::Perfect => Toast::success("Session closed: perfect cash match"),
            VarianceClass::Surplus => {
                Toast::info(format!("Session closed: surplus of {:.2}", variance))
            }
            VarianceClass::Shortage => {
                Toast::danger(format!("Session closed: shortage of {:.2}", -variance))
            }
        };

        Ok(
            Outcome::event(StateEvent::SessionClosed {
                session_id,
                variance,
            })
            .with_toast(toast),
        )
    }
}
