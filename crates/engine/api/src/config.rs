//! Configuration handed to the engine at startup.
use std::fmt;
use std::sync::Arc;

use crate::snapshot::StateSnapshot;
use crate::surface::SurfaceHandle;

/// Callback the engine invokes with every state snapshot it produces.
pub type UpdateCallback = Arc<dyn Fn(StateSnapshot) + Send + Sync>;

/// Everything the engine needs to start: a seed, the two surfaces it owns,
/// and the channel back into the UI.
///
/// Built once per mount and moved into [`EngineClient::start`](crate::EngineClient::start).
pub struct Configuration {
    pub seed: u64,
    pub viewport: SurfaceHandle,
    pub minimap: SurfaceHandle,
    pub on_update_state: UpdateCallback,
}

impl Configuration {
    pub fn new(
        seed: u64,
        viewport: SurfaceHandle,
        minimap: SurfaceHandle,
        on_update_state: UpdateCallback,
    ) -> Self {
        Self {
            seed,
            viewport,
            minimap,
            on_update_state,
        }
    }

    /// Push a snapshot into the UI.
    pub fn push(&self, snapshot: StateSnapshot) {
        (self.on_update_state)(snapshot);
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("seed", &self.seed)
            .field("viewport", &self.viewport.id())
            .field("minimap", &self.minimap.id())
            .finish_non_exhaustive()
    }
}
