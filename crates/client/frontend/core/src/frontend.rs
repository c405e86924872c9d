//! Trait describing a runnable HUD front-end.
use anyhow::Result;
use async_trait::async_trait;

use crate::shell::HudShell;

/// Frontend abstraction for UI layers.
///
/// A frontend hosts the shell: it resolves the two surfaces, mounts the
/// shell onto them, renders [`HudShell::view`] whenever the store changes,
/// and turns user input into intents.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, shell: HudShell) -> Result<()>;
}
