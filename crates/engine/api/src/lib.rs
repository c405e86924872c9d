//! Contract between the HUD shell and the external simulation/rendering engine.
//!
//! The engine is opaque. The shell reaches it only through [`EngineClient`],
//! hands it a [`Configuration`] once at mount, receives [`StateSnapshot`]s
//! through the update callback, and issues [`Intent`]s through the [`Hooks`]
//! returned from startup.
pub mod config;
pub mod engine;
pub mod error;
pub mod hooks;
pub mod snapshot;
pub mod surface;

pub use config::{Configuration, UpdateCallback};
pub use engine::{EngineClient, Startup};
pub use error::{EngineError, HookError};
pub use hooks::{Hooks, Intent, SharedHooks};
pub use snapshot::{Field, Health, Item, SCHEMA_VERSION, StateSnapshot, Stats};
pub use surface::{Surface, SurfaceHandle, SurfaceId, SurfaceSize};
