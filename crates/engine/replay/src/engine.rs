//! [`EngineClient`] implementation backed by a replay task.
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use engine_api::{Configuration, EngineClient, EngineError, Intent, SharedHooks, Startup};
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};

use crate::canvas::Painter;
use crate::config::ReplayConfig;
use crate::hooks::ChannelHooks;
use crate::script::ReplayScript;
use crate::world::ReplayWorld;

pub struct ReplayEngine {
    script: ReplayScript,
    config: ReplayConfig,
    started: AtomicBool,
}

impl ReplayEngine {
    pub fn new(script: ReplayScript, config: ReplayConfig) -> Self {
        Self {
            script,
            config,
            started: AtomicBool::new(false),
        }
    }
}

impl EngineClient for ReplayEngine {
    fn start(&self, config: Configuration) -> Result<Startup, EngineError> {
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|err| EngineError::Unavailable(err.to_string()))?;

        if self.started.swap(true, Ordering::SeqCst) {
            return Err(EngineError::AlreadyStarted);
        }

        tracing::info!(
            "Replay engine starting: seed={}, steps={}, tick={:?}",
            config.seed,
            self.script.len(),
            self.config.tick
        );

        let (intent_tx, intent_rx) = mpsc::unbounded_channel();
        let hooks: SharedHooks = Arc::new(ChannelHooks::new(intent_tx));

        let task = ReplayTask::new(self.script.clone(), self.config.clone(), config, intent_rx);
        runtime.spawn(task.run());

        Ok(Startup::Ready(hooks))
    }
}

struct ReplayTask {
    script: ReplayScript,
    settings: ReplayConfig,
    config: Configuration,
    intents: mpsc::UnboundedReceiver<Intent>,
    world: ReplayWorld,
    painter: Painter,
    cursor: usize,
    frame: u64,
}

impl ReplayTask {
    fn new(
        script: ReplayScript,
        settings: ReplayConfig,
        config: Configuration,
        intents: mpsc::UnboundedReceiver<Intent>,
    ) -> Self {
        let painter = Painter::new(config.seed);
        Self {
            script,
            settings,
            config,
            intents,
            world: ReplayWorld::default(),
            painter,
            cursor: 0,
            frame: 0,
        }
    }

    async fn run(mut self) {
        let mut ticker = time::interval(self.settings.tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = ticker.tick() => self.advance(),
                intent = self.intents.recv() => match intent {
                    Some(intent) => self.handle_intent(intent),
                    None => {
                        tracing::info!("Hooks released, replay engine stopping");
                        break;
                    }
                },
            }
        }
    }

    fn advance(&mut self) {
        self.painter.paint_viewport(&self.config.viewport, self.frame);
        self.painter.paint_minimap(&self.config.minimap, self.frame);
        self.frame += 1;

        if self.cursor >= self.script.len() {
            if !self.settings.looping || self.script.is_empty() {
                return;
            }
            self.cursor = 0;
        }

        if let Some(step) = self.script.step(self.cursor) {
            self.world.apply_step(step);
            self.cursor += 1;
            self.publish();
        }
    }

    fn handle_intent(&mut self, intent: Intent) {
        tracing::debug!("Replay engine received intent: {:?}", intent);
        match intent {
            Intent::UseItem { slug } => {
                if !self.world.use_item(&slug) {
                    tracing::debug!("Intent referenced unknown item {}", slug);
                }
            }
            other => {
                tracing::warn!("Replay engine ignoring unsupported intent: {:?}", other);
                return;
            }
        }
        self.publish();
    }

    fn publish(&mut self) {
        let snapshot = self.world.snapshot();
        self.config.push(snapshot);
    }
}
