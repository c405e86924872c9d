//! Scripted engine that drives the HUD without a real simulation.
//!
//! Replays a sequence of state snapshots on a fixed tick, fills the viewport
//! and minimap surfaces with a walking marker, and answers item intents
//! with follow-up snapshots. Used by the `canvas-hud` binary and as a
//! stand-in engine in tests.
mod canvas;
mod config;
mod engine;
mod error;
mod hooks;
mod script;
mod world;

pub use config::ReplayConfig;
pub use engine::ReplayEngine;
pub use error::ReplayError;
pub use hooks::ChannelHooks;
pub use script::ReplayScript;
