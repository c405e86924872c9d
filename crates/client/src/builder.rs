//! Client builder with dependency injection pattern.

use std::sync::Arc;

use anyhow::{Context, Result};
use engine_api::EngineClient;
use hud_frontend_core::FrontendConfig;

use crate::{Frontend, HudClient};

/// Builder for constructing a [`HudClient`] with proper validation.
///
/// Engine and frontend are required; the frontend configuration defaults to
/// [`FrontendConfig::default`].
#[derive(Default)]
pub struct ClientBuilder {
    engine: Option<Arc<dyn EngineClient>>,
    frontend: Option<Box<dyn Frontend>>,
    config: Option<FrontendConfig>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the engine (required).
    ///
    /// The engine is started by the shell when the frontend mounts it, never
    /// by the builder.
    pub fn engine(mut self, engine: impl EngineClient + 'static) -> Self {
        self.engine = Some(Arc::new(engine));
        self
    }

    /// Set an already shared engine (required unless [`Self::engine`] is used).
    pub fn shared_engine(mut self, engine: Arc<dyn EngineClient>) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    pub fn config(mut self, config: FrontendConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine or the frontend is not set.
    pub fn build(self) -> Result<HudClient> {
        let engine = self
            .engine
            .context("Engine is required. Use .engine() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(HudClient {
            engine,
            frontend,
            config: self.config.unwrap_or_default(),
        })
    }
}
