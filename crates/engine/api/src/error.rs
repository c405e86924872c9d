//! Error types crossing the engine boundary.
use thiserror::Error;

/// Failure to start the engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine entry point unavailable: {0}")]
    Unavailable(String),

    #[error("engine startup failed: {reason}")]
    StartFailed { reason: String },

    #[error("engine returned malformed hooks: {0}")]
    MalformedHooks(String),

    #[error("engine has already been started")]
    AlreadyStarted,
}

/// Failure reported by a hooks call.
#[derive(Debug, Error)]
pub enum HookError {
    #[error("engine is no longer accepting intents")]
    Disconnected,

    #[error("engine rejected intent: {reason}")]
    Rejected { reason: String },
}
