//! CLI-specific configuration for terminal UI.
use std::env;

use engine_api::SurfaceSize;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
    /// Log directory name; a timestamped one is generated when unset.
    pub session_id: Option<String>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `HUD_VIEWPORT_WIDTH` / `HUD_VIEWPORT_HEIGHT` - Viewport surface in cells (default: 60x30)
    /// - `HUD_MINIMAP_WIDTH` / `HUD_MINIMAP_HEIGHT` - Minimap surface in cells (default: 20x10)
    /// - `HUD_NOTIFICATION_PANEL_HEIGHT` - Notification panel height in lines (default: 8, min: 3)
    /// - `HUD_SESSION_ID` - Session name used for the log directory
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(width) = read_env::<u16>("HUD_VIEWPORT_WIDTH") {
            config.ui.viewport.width = width.max(1);
        }
        if let Some(height) = read_env::<u16>("HUD_VIEWPORT_HEIGHT") {
            config.ui.viewport.height = height.max(1);
        }
        if let Some(width) = read_env::<u16>("HUD_MINIMAP_WIDTH") {
            config.ui.minimap.width = width.max(1);
        }
        if let Some(height) = read_env::<u16>("HUD_MINIMAP_HEIGHT") {
            config.ui.minimap.height = height.max(1);
        }
        if let Some(height) = read_env::<u16>("HUD_NOTIFICATION_PANEL_HEIGHT") {
            config.ui.notification_panel_height = height.max(3);
        }

        config.session_id = env::var("HUD_SESSION_ID")
            .ok()
            .filter(|id| !id.trim().is_empty());

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    pub viewport: SurfaceSize,
    pub minimap: SurfaceSize,
    /// Height of the notification panel in lines (including borders).
    pub notification_panel_height: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            viewport: SurfaceSize::new(60, 30),
            minimap: SurfaceSize::new(20, 10),
            notification_panel_height: 8,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
