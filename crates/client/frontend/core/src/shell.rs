//! Root HUD component.
use std::sync::Arc;

use engine_api::EngineClient;
use tokio::sync::watch;

use crate::config::FrontendConfig;
use crate::dispatch::{DispatchOutcome, IntentDispatcher};
use crate::mount::{MountController, MountStatus, Surfaces};
use crate::store::{HudState, StateStore};
use crate::view_model::HudView;

/// Root component tying the engine boundary to the HUD.
///
/// Owns the state store, the mount lifecycle and the dispatcher. Rendering
/// goes through [`HudShell::view`], which never touches the engine, so a
/// frontend can re-render as often as it likes without re-mounting.
///
/// Dropping the shell unmounts it.
pub struct HudShell {
    store: Arc<StateStore>,
    mount: MountController,
    dispatcher: IntentDispatcher,
}

impl HudShell {
    pub fn new(engine: Arc<dyn EngineClient>, config: &FrontendConfig) -> Self {
        let store = Arc::new(StateStore::new().with_snapshot_logging(config.log_snapshots));
        Self {
            mount: MountController::new(engine, config.seed),
            dispatcher: IntentDispatcher::new(Arc::clone(&store)),
            store,
        }
    }

    /// Start the engine on the given surfaces. No-op after the first call.
    pub fn mount(&mut self, surfaces: Surfaces) -> bool {
        self.mount.attach(surfaces, &self.store)
    }

    pub fn unmount(&mut self) {
        self.mount.detach(&self.store);
    }

    pub fn status(&self) -> MountStatus {
        self.mount.status()
    }

    pub fn seed(&self) -> Option<u64> {
        self.mount.seed()
    }

    pub fn state(&self) -> Arc<HudState> {
        self.store.current()
    }

    /// View of the latest state.
    pub fn view(&self) -> HudView {
        HudView::from_state(&self.store.current())
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<HudState>> {
        self.store.subscribe()
    }

    pub fn dispatcher(&self) -> &IntentDispatcher {
        &self.dispatcher
    }

    pub fn use_item(&self, slug: &str) -> DispatchOutcome {
        self.dispatcher.use_item(slug)
    }
}

impl Drop for HudShell {
    fn drop(&mut self) {
        self.mount.detach(&self.store);
    }
}
