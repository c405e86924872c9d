//! Mount lifecycle: start the engine exactly once and tear it down safely.
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, PoisonError, Weak};

use engine_api::{
    Configuration, EngineClient, SharedHooks, Startup, SurfaceHandle, UpdateCallback,
};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::config::SeedSource;
use crate::error::StoreError;
use crate::store::StateStore;

/// The two drawable regions resolved by the hosting frontend.
#[derive(Clone, Debug)]
pub struct Surfaces {
    pub viewport: SurfaceHandle,
    pub minimap: SurfaceHandle,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MountStatus {
    /// Not mounted yet.
    Detached,
    /// Engine started, hooks not delivered yet.
    Starting,
    /// Engine started and hooks stored.
    Ready,
    /// Startup failed; the shell keeps running without hooks.
    Failed,
    Unmounted,
}

pub struct MountController {
    engine: Arc<dyn EngineClient>,
    seed_source: SeedSource,
    status: Arc<Mutex<MountStatus>>,
    seed: Option<u64>,
    pending_hooks: Option<JoinHandle<()>>,
}

impl MountController {
    pub fn new(engine: Arc<dyn EngineClient>, seed_source: SeedSource) -> Self {
        Self {
            engine,
            seed_source,
            status: Arc::new(Mutex::new(MountStatus::Detached)),
            seed: None,
            pending_hooks: None,
        }
    }

    /// Build the configuration and start the engine.
    ///
    /// Only the first call does anything; it returns true when it invoked the
    /// engine's entry point. Startup failures are logged, never returned.
    pub fn attach(&mut self, surfaces: Surfaces, store: &Arc<StateStore>) -> bool {
        let status = self.status();
        if status != MountStatus::Detached {
            tracing::debug!("Mount requested while {:?}; engine not restarted", status);
            return false;
        }

        let seed = self.seed_source.resolve();
        self.seed = Some(seed);
        set_status(&self.status, MountStatus::Starting);

        let config = Configuration::new(
            seed,
            surfaces.viewport,
            surfaces.minimap,
            update_callback(store),
        );

        tracing::info!("Starting engine: seed={}", seed);
        let engine = &self.engine;
        let started = panic::catch_unwind(AssertUnwindSafe(|| engine.start(config)));

        match started {
            Ok(Ok(Startup::Ready(hooks))) => self.store_hooks(hooks, store),
            Ok(Ok(Startup::Pending(rx))) => self.await_hooks(rx, store),
            Ok(Err(err)) => {
                tracing::error!("Engine startup failed: {}", err);
                set_status(&self.status, MountStatus::Failed);
            }
            Err(_) => {
                tracing::error!("Engine panicked during startup");
                set_status(&self.status, MountStatus::Failed);
            }
        }

        true
    }

    /// Stop applying engine pushes and release the hooks. Idempotent.
    pub fn detach(&mut self, store: &StateStore) {
        if self.status() == MountStatus::Unmounted {
            return;
        }

        store.detach();
        if let Some(task) = self.pending_hooks.take() {
            task.abort();
        }
        set_status(&self.status, MountStatus::Unmounted);
        tracing::info!("HUD unmounted");
    }

    pub fn status(&self) -> MountStatus {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Seed handed to the engine, once mounted.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn store_hooks(&self, hooks: SharedHooks, store: &StateStore) {
        if store.install_hooks(hooks) {
            set_status(&self.status, MountStatus::Ready);
            tracing::info!("Engine hooks established");
        }
    }

    fn await_hooks(&mut self, rx: oneshot::Receiver<SharedHooks>, store: &Arc<StateStore>) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::error!("Engine hooks are pending but no async runtime is available");
            set_status(&self.status, MountStatus::Failed);
            return;
        };

        let store = Arc::downgrade(store);
        let status = Arc::clone(&self.status);

        self.pending_hooks = Some(runtime.spawn(async move {
            match rx.await {
                Ok(hooks) => {
                    let installed = store
                        .upgrade()
                        .is_some_and(|store| store.install_hooks(hooks));
                    if installed {
                        transition(&status, MountStatus::Starting, MountStatus::Ready);
                        tracing::info!("Engine hooks established");
                    } else {
                        tracing::debug!("Engine hooks arrived after unmount; discarded");
                    }
                }
                Err(_) => {
                    tracing::warn!("Engine dropped its hooks before delivering them");
                    transition(&status, MountStatus::Starting, MountStatus::Failed);
                }
            }
        }));
    }
}

/// Callback handed to the engine. Holds the store weakly and goes quiet once
/// the store is detached or gone.
fn update_callback(store: &Arc<StateStore>) -> UpdateCallback {
    let store: Weak<StateStore> = Arc::downgrade(store);
    Arc::new(move |snapshot| {
        let Some(store) = store.upgrade() else {
            tracing::debug!("Snapshot pushed after the HUD was dropped; ignored");
            return;
        };

        match store.apply(snapshot) {
            Ok(revision) => tracing::trace!("Applied snapshot revision {}", revision),
            Err(StoreError::Detached) => {
                tracing::debug!("Snapshot pushed after unmount; ignored")
            }
            Err(err) => tracing::warn!("Snapshot rejected: {}", err),
        }
    })
}

fn set_status(status: &Mutex<MountStatus>, next: MountStatus) {
    *status.lock().unwrap_or_else(PoisonError::into_inner) = next;
}

fn transition(status: &Mutex<MountStatus>, from: MountStatus, to: MountStatus) {
    let mut current = status.lock().unwrap_or_else(PoisonError::into_inner);
    if *current == from {
        *current = to;
    }
}
