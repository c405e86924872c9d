//! Terminal UI frontend for the canvas HUD.
//!
//! This crate provides a terminal-based host for the HUD shell. It implements
//! the `hud_frontend_core::Frontend` trait for pure UI rendering.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Creates the viewport and minimap surfaces the engine draws into
//! - Mounts the shell it receives, but does NOT own the engine
//! - Redraws on store changes and turns keys and clicks into intents

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;
mod state;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};
pub use event::{EventLoop, Outcome};
pub use state::AppState;

// Re-export for convenience (used in main.rs)
pub use hud_frontend_core::FrontendConfig;
