//! Glue code tying the shell, its surfaces, and the terminal UI together.
use anyhow::Result;
use async_trait::async_trait;

use engine_api::{Surface, SurfaceId};
use hud_frontend_core::{Frontend, HudShell, Surfaces};

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::presentation::terminal;

/// Terminal host for the HUD shell.
pub struct CliFrontend {
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(cli_config: CliConfig) -> Self {
        Self { cli_config }
    }

    /// Surfaces sized from the configuration.
    pub fn surfaces(&self) -> Surfaces {
        Surfaces {
            viewport: Surface::handle(SurfaceId::Viewport, self.cli_config.ui.viewport),
            minimap: Surface::handle(SurfaceId::Minimap, self.cli_config.ui.minimap),
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, mut shell: HudShell) -> Result<()> {
        tracing::info!("CLI frontend starting...");

        // Mount before the terminal takes over so startup logs land first
        let surfaces = self.surfaces();
        shell.mount(surfaces.clone());
        tracing::info!("HUD mounted: status={:?}", shell.status());

        let event_loop = EventLoop::new(shell, surfaces, self.cli_config.clone());

        let mut terminal = terminal::init()?;
        let guard = terminal::TerminalGuard::new();

        let mut shell = event_loop.run(&mut terminal).await?;
        shell.unmount();

        guard.finish()?;
        tracing::info!("CLI frontend exiting");

        Ok(())
    }
}
