//! Canvas HUD binary.
//!
//! Composition root that assembles:
//! 1. Engine - the scripted replay engine (`engine-replay` feature)
//! 2. Frontend (UI) - terminal HUD (`frontend-cli` feature)
//!
//! Both are built independently and injected into [`HudClient`].
//!
//! # Examples
//!
//! ```bash
//! # Built-in demo script
//! cargo run -p hud-client
//!
//! # Custom script, fixed seed, looping
//! HUD_REPLAY_SCRIPT=demo.jsonl HUD_SEED=42 HUD_REPLAY_LOOP=1 cargo run -p hud-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(all(feature = "frontend-cli", feature = "engine-replay"))]
    {
        run_cli().await?;
    }

    #[cfg(not(all(feature = "frontend-cli", feature = "engine-replay")))]
    {
        compile_error!("The binary needs the `frontend-cli` and `engine-replay` features");
    }

    Ok(())
}

/// Run the replay engine behind the terminal HUD.
#[cfg(all(feature = "frontend-cli", feature = "engine-replay"))]
async fn run_cli() -> Result<()> {
    use anyhow::Context;
    use engine_replay::{ReplayConfig, ReplayEngine, ReplayScript};
    use hud_client::HudClient;
    use hud_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};

    // 1. Load configuration from environment
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();
    let replay_config = ReplayConfig::from_env();

    // 2. Setup logging
    let _log_guard = logging::setup_logging(&cli_config.session_id)?;

    tracing::info!("Starting canvas HUD");
    tracing::info!("Seed source: {:?}", frontend_config.seed);
    tracing::info!(
        "Replay: tick={:?}, loop={}",
        replay_config.tick,
        replay_config.looping
    );

    // 3. Build Engine (independent layer)
    let script = match &replay_config.script_path {
        Some(path) => ReplayScript::from_path(path)
            .with_context(|| format!("Failed to load replay script {}", path.display()))?,
        None => ReplayScript::demo(),
    };
    tracing::info!("Replay script loaded: {} steps", script.len());
    let engine = ReplayEngine::new(script, replay_config);

    // 4. Build Frontend (independent layer)
    let frontend = CliFrontend::new(cli_config);

    // 5. Build and run
    let client = HudClient::builder()
        .engine(engine)
        .frontend(frontend)
        .config(frontend_config)
        .build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
