//! OpenCashSession command handler

use crate::actions::Outcome;
use crate::error::ActionError;
use crate::store::AppState;
use crate::till;
use shared::command::{ActionMetadata, StateEvent, Toast};

/// OpenCashSession action
#[derive(Debug, Clone)]
pub struct OpenCashSessionAction {
    pub opening_float: f64,
}

impl OpenCashSessionAction {
    pub fn execute(
        &self,
        state: &mut AppState,
        metadata: &ActionMetadata,
    ) -> Result<Outcome, ActionError> {
        let session = till::open(state.session.as_ref(), self.opening_float, metadata.timestamp)?;
        let session_id = session.id;
        state.session = Some(session);

        Ok(
            Outcome::event(StateEvent::SessionOpened { session_id })
                .with_toast(Toast::success("Cash session opened")),
        )
    }
}
