//! Engine entry point.
use std::fmt;

use tokio::sync::oneshot;

use crate::config::Configuration;
use crate::error::EngineError;
use crate::hooks::SharedHooks;

/// How the engine hands back its hooks.
pub enum Startup {
    /// Hooks are available immediately.
    Ready(SharedHooks),
    /// Hooks arrive later; the sender side is owned by the engine.
    Pending(oneshot::Receiver<SharedHooks>),
}

impl fmt::Debug for Startup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Startup::Ready(_) => f.write_str("Startup::Ready"),
            Startup::Pending(_) => f.write_str("Startup::Pending"),
        }
    }
}

/// Client-side handle to an engine implementation.
///
/// Injected into the shell instead of being looked up globally, so tests can
/// swap in a fake engine.
pub trait EngineClient: Send + Sync {
    /// Start the engine. Called at most once per mount.
    ///
    /// The engine takes ownership of `config`, keeps the update callback, and
    /// may call it from any thread for as long as it runs.
    fn start(&self, config: Configuration) -> Result<Startup, EngineError>;
}
