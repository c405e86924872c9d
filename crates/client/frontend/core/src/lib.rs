//! Cross-frontend primitives for the HUD shell.
//!
//! Houses the state store, mount lifecycle, intent dispatch, and the view
//! model that terminal and future graphical frontends render from.
pub mod config;
pub mod dispatch;
pub mod error;
pub mod frontend;
pub mod mount;
pub mod shell;
pub mod store;
pub mod view_model;

pub use config::{FrontendConfig, SeedSource};
pub use dispatch::{DispatchOutcome, IntentDispatcher};
pub use error::StoreError;
pub use frontend::Frontend;
pub use mount::{MountController, MountStatus, Surfaces};
pub use shell::HudShell;
pub use store::{HudState, StateStore};
pub use view_model::HudView;
