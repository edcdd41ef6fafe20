//! Application state store and dispatcher
//!
//! `Store::dispatch` is the sole path through which core mutations happen:
//!
//! ```text
//! dispatch(action, metadata)
//!     ├─ 1. Idempotency check (command_id)
//!     ├─ 2. Convert action to its handler
//!     ├─ 3. Execute against a clone of the state
//!     ├─ 4. On success: clone replaces live state, events broadcast
//!     └─ 5. CommandResponse (typed error + toasts on failure)
//! ```
//!
//! The dispatcher is total: the action enum is closed, every variant is
//! handled exhaustively and no payload panics. It is also single-writer by
//! construction (`&mut self`): no optimistic-lock or version protection
//! exists behind it, so two terminals racing to submit conflicting
//! transitions must be serialized in front of the store (a single backend
//! authority or a per-order mutex).

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::actions::ActionHandler;
use shared::command::{Action, ActionMetadata, CommandResponse, StateEvent};
use shared::models::{CashSession, Customer, LoyaltyProgram, Product};
use shared::order::Order;

#[cfg(test)]
mod tests;

/// Event broadcast channel capacity
const EVENT_CHANNEL_CAPACITY: usize = 1024;

/// The full application state: the blob a persistence layer loads and saves.
///
/// Catalog stock and customer balances are mutated only by sale
/// registration; no other path touches them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    pub orders: HashMap<i64, Order>,
    pub catalog: HashMap<String, Product>,
    pub customers: HashMap<String, Customer>,
    pub programs: Vec<LoyaltyProgram>,
    /// At most one open session at a time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<CashSession>,
    /// Sealed sessions, newest last
    #[serde(default)]
    pub closed_sessions: Vec<CashSession>,
}

impl AppState {
    pub fn order(&self, order_id: i64) -> Option<&Order> {
        self.orders.get(&order_id)
    }

    /// Orders still in flight
    pub fn active_orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.values().filter(|o| !o.is_terminal())
    }
}

/// Single-writer state store.
///
/// The `epoch` is a unique identifier generated on each startup, letting
/// subscribers detect a restart.
pub struct Store {
    state: AppState,
    /// Command ids already applied; duplicates are acknowledged, not re-run
    processed: HashSet<String>,
    event_tx: broadcast::Sender<StateEvent>,
    epoch: String,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("orders", &self.state.orders.len())
            .field("processed", &self.processed.len())
            .field("event_tx", &"<broadcast::Sender>")
            .field("epoch", &self.epoch)
            .finish()
    }
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    /// Start from a loaded state blob
    pub fn with_state(state: AppState) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let epoch = uuid::Uuid::new_v4().to_string();
        tracing::info!(epoch = %epoch, "store started with new epoch");
        Self {
            state,
            processed: HashSet::new(),
            event_tx,
            epoch,
        }
    }

    /// Get the store epoch (unique instance ID)
    pub fn epoch(&self) -> &str {
        &self.epoch
    }

    /// Current state snapshot
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Subscribe to event broadcasts
    pub fn subscribe(&self) -> broadcast::Receiver<StateEvent> {
        self.event_tx.subscribe()
    }

    /// Execute an action and return the response.
    ///
    /// Handlers run against a clone of the state; the clone replaces the
    /// live state only when the handler succeeds, so a failed action can
    /// never leave partially-applied mutations behind.
    pub fn dispatch(&mut self, action: Action, metadata: ActionMetadata) -> CommandResponse {
        debug!(command_id = %metadata.command_id, action = ?action, "processing action");

        // 1. Idempotency check
        if self.processed.contains(&metadata.command_id) {
            warn!(command_id = %metadata.command_id, "duplicate command");
            return CommandResponse::duplicate(metadata.command_id);
        }

        // 2. Convert to handler
        let handler = ActionHandler::from(&action);

        // 3. Execute against a clone
        let mut next = self.state.clone();
        match handler.execute(&mut next, &metadata) {
            Ok(outcome) => {
                // 4. Swap and broadcast
                self.state = next;
                self.processed.insert(metadata.command_id.clone());
                for event in outcome.events {
                    if self.event_tx.send(event).is_err() {
                        // No active receivers; boards simply resync on connect
                        break;
                    }
                }
                CommandResponse::success(metadata.command_id, outcome.order_id)
                    .with_toasts(outcome.toasts)
            }
            Err(err) => {
                warn!(command_id = %metadata.command_id, error = %err, "action rejected");
                CommandResponse::error(metadata.command_id, err.into())
            }
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
