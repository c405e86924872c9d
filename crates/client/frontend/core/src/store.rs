//! Single source of UI truth: the latest merged state and the engine hooks.
//!
//! Every accepted push builds a new [`HudState`] and swaps the shared `Arc`,
//! so a state handed to a renderer is never mutated afterwards. Subscribers
//! sit on a `watch` channel and only ever observe the newest value;
//! intermediate states are dropped, not queued.
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use engine_api::{SCHEMA_VERSION, SharedHooks, StateSnapshot, Stats};
use tokio::sync::watch;

use crate::error::StoreError;

/// Merged view of everything the engine has pushed so far.
///
/// Top-level keys merge by presence: an omitted key keeps the previous value,
/// an explicit `null` clears it, and a present value replaces it wholesale.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HudState {
    /// Number of snapshots folded into this state.
    pub revision: u64,
    pub stats: Option<Stats>,
    pub notifications: Option<Vec<String>>,
}

impl HudState {
    /// Build the state that results from applying `snapshot` on top of this one.
    pub fn next(&self, snapshot: StateSnapshot) -> HudState {
        HudState {
            revision: self.revision + 1,
            stats: snapshot.stats.resolve(self.stats.clone()),
            notifications: snapshot.notifications.resolve(self.notifications.clone()),
        }
    }
}

pub struct StateStore {
    state: watch::Sender<Arc<HudState>>,
    hooks: RwLock<Option<SharedHooks>>,
    live: AtomicBool,
    log_snapshots: bool,
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStore {
    pub fn new() -> Self {
        let (state, _) = watch::channel(Arc::new(HudState::default()));
        Self {
            state,
            hooks: RwLock::new(None),
            live: AtomicBool::new(true),
            log_snapshots: false,
        }
    }

    pub fn with_snapshot_logging(mut self, enabled: bool) -> Self {
        self.log_snapshots = enabled;
        self
    }

    /// Fold a pushed snapshot into the store and wake subscribers.
    ///
    /// Returns the new revision.
    pub fn apply(&self, snapshot: StateSnapshot) -> Result<u64, StoreError> {
        if snapshot.version > SCHEMA_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: snapshot.version,
                supported: SCHEMA_VERSION,
            });
        }

        if self.log_snapshots {
            tracing::trace!("Snapshot received: {:?}", snapshot);
        }

        let mut outcome = Err(StoreError::Detached);
        // Liveness is checked under the channel lock so a concurrent detach
        // either happens before this push or after it, never in the middle.
        self.state.send_if_modified(|current| {
            if !self.live.load(Ordering::SeqCst) {
                return false;
            }
            let next = current.next(snapshot);
            outcome = Ok(next.revision);
            *current = Arc::new(next);
            true
        });

        outcome
    }

    /// Latest state.
    pub fn current(&self) -> Arc<HudState> {
        Arc::clone(&self.state.borrow())
    }

    /// Receiver woken on every accepted push. The current value counts as seen.
    pub fn subscribe(&self) -> watch::Receiver<Arc<HudState>> {
        self.state.subscribe()
    }

    /// Store the engine hooks. Returns false (and drops them) once detached.
    pub fn install_hooks(&self, hooks: SharedHooks) -> bool {
        let mut slot = self.hooks.write().unwrap_or_else(PoisonError::into_inner);
        if !self.is_live() {
            return false;
        }
        *slot = Some(hooks);
        true
    }

    pub fn hooks(&self) -> Option<SharedHooks> {
        self.hooks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::SeqCst)
    }

    /// Stop accepting pushes and release the hooks. Idempotent.
    pub fn detach(&self) {
        self.state.send_if_modified(|_| {
            self.live.store(false, Ordering::SeqCst);
            false
        });

        let released = self
            .hooks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if released.is_some() {
            tracing::debug!("Engine hooks released");
        }
    }
}
