//! Hooks that forward intents to the replay task.
use engine_api::{HookError, Hooks, Intent};
use tokio::sync::mpsc;

/// Channel-backed hooks. Dropping every clone stops the replay task.
pub struct ChannelHooks {
    tx: mpsc::UnboundedSender<Intent>,
}

impl ChannelHooks {
    pub fn new(tx: mpsc::UnboundedSender<Intent>) -> Self {
        Self { tx }
    }
}

impl Hooks for ChannelHooks {
    fn use_item(&self, slug: &str) -> Result<(), HookError> {
        self.dispatch(&Intent::use_item(slug))
    }

    fn dispatch(&self, intent: &Intent) -> Result<(), HookError> {
        self.tx
            .send(intent.clone())
            .map_err(|_| HookError::Disconnected)
    }
}
