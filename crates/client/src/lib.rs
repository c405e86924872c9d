//! Top-level client wiring an engine to a HUD frontend.
//!
//! # Architecture
//!
//! ```text
//! HudClient (composition root)
//!   ├─→ Engine (injected EngineClient; owns the world, draws the surfaces)
//!   └─→ Frontend (hosts the HudShell: mounts it, renders it, forwards input)
//! ```
//!
//! The client never starts the engine itself. It hands the engine to a fresh
//! [`HudShell`], and the frontend mounts that shell once its surfaces exist.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from hud-frontend-core
pub use hud_frontend_core::Frontend;

use std::sync::Arc;

use anyhow::Result;
use engine_api::EngineClient;
use hud_frontend_core::{FrontendConfig, HudShell};

pub struct HudClient {
    engine: Arc<dyn EngineClient>,
    frontend: Box<dyn Frontend>,
    config: FrontendConfig,
}

impl HudClient {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Build the shell and transfer control to the frontend until it exits.
    ///
    /// The shell is unmounted when the frontend returns, whatever the result.
    pub async fn run(self) -> Result<()> {
        let HudClient {
            engine,
            mut frontend,
            config,
        } = self;

        let shell = HudShell::new(engine, &config);
        let result = frontend.run(shell).await;

        if let Err(err) = &result {
            tracing::error!("Frontend error: {:#}", err);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use engine_api::{
        Configuration, EngineError, HookError, Hooks, StateSnapshot, Startup, Surface,
        SurfaceId, SurfaceSize,
    };
    use hud_frontend_core::{MountStatus, SeedSource, Surfaces};

    use super::*;

    struct NoopHooks;

    impl Hooks for NoopHooks {
        fn use_item(&self, _slug: &str) -> Result<(), HookError> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingEngine {
        starts: AtomicUsize,
        config: Mutex<Option<Configuration>>,
    }

    impl EngineClient for CountingEngine {
        fn start(&self, config: Configuration) -> Result<Startup, EngineError> {
            self.starts.fetch_add(1, Ordering::SeqCst);
            *self.config.lock().unwrap() = Some(config);
            Ok(Startup::Ready(Arc::new(NoopHooks)))
        }
    }

    /// Mounts twice and records what it saw.
    #[derive(Default)]
    struct ProbeFrontend {
        seen: Arc<Mutex<Vec<MountStatus>>>,
    }

    #[async_trait]
    impl Frontend for ProbeFrontend {
        async fn run(&mut self, mut shell: HudShell) -> Result<()> {
            let surfaces = Surfaces {
                viewport: Surface::handle(SurfaceId::Viewport, SurfaceSize::new(4, 4)),
                minimap: Surface::handle(SurfaceId::Minimap, SurfaceSize::new(2, 2)),
            };
            shell.mount(surfaces.clone());
            shell.mount(surfaces);
            self.seen.lock().unwrap().push(shell.status());
            Ok(())
        }
    }

    #[test]
    fn build_requires_engine_and_frontend() {
        assert!(HudClient::builder().build().is_err());
        assert!(
            HudClient::builder()
                .frontend(ProbeFrontend::default())
                .build()
                .is_err()
        );
        assert!(
            HudClient::builder()
                .engine(CountingEngine::default())
                .build()
                .is_err()
        );
    }

    #[tokio::test]
    async fn run_hands_a_fresh_shell_to_the_frontend() {
        let engine = Arc::new(CountingEngine::default());
        let frontend = ProbeFrontend::default();
        let seen = frontend.seen.clone();

        HudClient::builder()
            .shared_engine(engine.clone())
            .frontend(frontend)
            .config(FrontendConfig::new(SeedSource::Fixed(3), false))
            .build()
            .unwrap()
            .run()
            .await
            .unwrap();

        assert_eq!(engine.starts.load(Ordering::SeqCst), 1);
        assert_eq!(*seen.lock().unwrap(), vec![MountStatus::Ready]);

        let config = engine.config.lock().unwrap();
        let config = config.as_ref().unwrap();
        assert_eq!(config.seed, 3);

        // shell dropped with the frontend run: pushes are ignored now
        config.push(StateSnapshot::new().with_notifications(["late"]));
    }
}
