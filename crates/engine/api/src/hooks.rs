//! Capabilities the engine exposes back to the UI.
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::HookError;

/// User-originated request sent to the engine.
///
/// Intents have no local effect; the result shows up in a later snapshot.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum Intent {
    UseItem { slug: String },
}

impl Intent {
    pub fn use_item(slug: impl Into<String>) -> Self {
        Intent::UseItem { slug: slug.into() }
    }
}

/// Capability object returned by the engine at startup.
///
/// Engines are free to carry more methods on their concrete type; the shell
/// only ever calls through this trait.
pub trait Hooks: Send + Sync {
    fn use_item(&self, slug: &str) -> Result<(), HookError>;

    /// Route a tagged intent to the matching capability.
    fn dispatch(&self, intent: &Intent) -> Result<(), HookError> {
        match intent {
            Intent::UseItem { slug } => self.use_item(slug),
        }
    }
}

pub type SharedHooks = Arc<dyn Hooks>;
