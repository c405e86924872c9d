//! Forwards user intents to the engine hooks.
//!
//! The engine is authoritative: nothing here validates an intent or touches
//! local state. Any visible result arrives with a later snapshot.
use std::sync::Arc;

use engine_api::{HookError, Intent};

use crate::store::StateStore;

#[derive(Debug)]
pub enum DispatchOutcome {
    Delivered,
    /// Hooks not established yet (or already released); nothing was called.
    NoHooks,
    Failed(HookError),
}

#[derive(Clone)]
pub struct IntentDispatcher {
    store: Arc<StateStore>,
}

impl IntentDispatcher {
    pub fn new(store: Arc<StateStore>) -> Self {
        Self { store }
    }

    pub fn dispatch(&self, intent: Intent) -> DispatchOutcome {
        let Some(hooks) = self.store.hooks() else {
            tracing::debug!("Ignoring {:?}: engine hooks not established", intent);
            return DispatchOutcome::NoHooks;
        };

        match hooks.dispatch(&intent) {
            Ok(()) => {
                tracing::debug!("Dispatched {:?}", intent);
                DispatchOutcome::Delivered
            }
            Err(err) => {
                tracing::warn!("Intent {:?} failed: {}", intent, err);
                DispatchOutcome::Failed(err)
            }
        }
    }

    pub fn use_item(&self, slug: &str) -> DispatchOutcome {
        self.dispatch(Intent::use_item(slug))
    }
}
