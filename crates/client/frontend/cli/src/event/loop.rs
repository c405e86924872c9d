//! Event loop orchestrating store changes, user input, and rendering.
//!
//! This module coordinates three concerns:
//! - Redrawing whenever the store publishes a newer state
//! - Keyboard and mouse processing (selection, item use, notification scrolling)
//! - Re-blitting the engine surfaces on a fixed refresh interval

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use tokio::time::{self, Duration};

use hud_frontend_core::{DispatchOutcome, HudShell, Surfaces};

use crate::{
    config::CliConfig,
    input::{InputHandler, KeyAction, Scroll},
    presentation::{HitMap, ui},
    state::AppState,
};

const FRAME_INTERVAL_MS: u64 = 16;
/// Upper bound on events drained in one input tick.
const MAX_EVENTS_PER_TICK: usize = 1024;
/// The engine draws into the surfaces without necessarily pushing state.
const SURFACE_REFRESH_INTERVAL_MS: u64 = 100;

/// What the caller should do after an input event.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Redraw,
    Quit,
}

/// Event loop owning the mounted shell for the lifetime of the UI.
///
/// Rendering always reads the store's latest state, so a burst of snapshots
/// collapses into a single redraw of the newest one.
pub struct EventLoop {
    shell: HudShell,
    surfaces: Surfaces,
    input: InputHandler,
    app_state: AppState,
    /// Click targets of the last drawn frame.
    hit_map: HitMap,
    cli_config: CliConfig,
}

impl EventLoop {
    pub fn new(shell: HudShell, surfaces: Surfaces, cli_config: CliConfig) -> Self {
        Self {
            shell,
            surfaces,
            input: InputHandler::new(),
            app_state: AppState::new(),
            hit_map: HitMap::default(),
            cli_config,
        }
    }

    pub async fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> Result<HudShell> {
        let mut changes = self.shell.subscribe();

        // Initial render
        self.render(terminal)?;

        let mut surface_refresh =
            time::interval(Duration::from_millis(SURFACE_REFRESH_INTERVAL_MS));
        surface_refresh.set_missed_tick_behavior(time::MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                changed = changes.changed() => {
                    if changed.is_err() {
                        tracing::warn!("State store closed");
                        break;
                    }
                    self.render(terminal)?;
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(terminal)? {
                        break;
                    }
                }
                _ = surface_refresh.tick() => {
                    self.render(terminal)?;
                }
            }
        }

        Ok(self.shell)
    }

    /// Drain pending terminal input without blocking.
    fn handle_input_tick<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<bool> {
        let mut events = Vec::new();
        while events.len() < MAX_EVENTS_PER_TICK && term_event::poll(Duration::ZERO)? {
            events.push(term_event::read()?);
        }

        self.handle_events(terminal, events)
    }

    /// Apply a batch of events, drawing at most once unless a click has to
    /// resolve against a layout an earlier event in the batch changed.
    ///
    /// Returns `true` when the batch asked to quit.
    pub fn handle_events<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: impl IntoIterator<Item = TermEvent>,
    ) -> Result<bool> {
        let mut dirty = false;

        for event in events {
            if dirty && matches!(event, TermEvent::Mouse(_)) {
                self.render(terminal)?;
                dirty = false;
            }

            match self.handle_event(event) {
                Outcome::Quit => return Ok(true),
                Outcome::Redraw => dirty = true,
                Outcome::Continue => {}
            }
        }

        if dirty {
            self.render(terminal)?;
        }
        Ok(false)
    }

    /// Apply one terminal event.
    pub fn handle_event(&mut self, event: TermEvent) -> Outcome {
        let action = match event {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => self.input.handle_key(key),
            TermEvent::Mouse(mouse) => self.input.handle_mouse(mouse, &self.hit_map),
            TermEvent::Resize(_, _) => return Outcome::Redraw,
            _ => KeyAction::None,
        };

        self.apply(action)
    }

    fn apply(&mut self, action: KeyAction) -> Outcome {
        let item_count = self.shell.view().item_count();

        match action {
            KeyAction::Quit => {
                tracing::info!("Quit requested");
                Outcome::Quit
            }
            KeyAction::SelectNext => {
                self.app_state.select_next(item_count);
                Outcome::Redraw
            }
            KeyAction::SelectPrev => {
                self.app_state.select_prev(item_count);
                Outcome::Redraw
            }
            KeyAction::UseSelected => match self.app_state.selected {
                Some(index) => self.use_item(index),
                None => Outcome::Continue,
            },
            KeyAction::UseItem(index) => self.use_item(index),
            KeyAction::ScrollOlder(step) => {
                let lines = self.scroll_lines(step);
                let visible = self.hit_map.notification_rows();
                let total = self.shell.view().notifications.map_or(0, |feed| feed.len());
                self.app_state.scroll_notifications_older(lines, total, visible);
                Outcome::Redraw
            }
            KeyAction::ScrollNewer(step) => {
                let lines = self.scroll_lines(step);
                self.app_state.scroll_notifications_newer(lines);
                Outcome::Redraw
            }
            KeyAction::None => Outcome::Continue,
        }
    }

    fn scroll_lines(&self, step: Scroll) -> usize {
        match step {
            Scroll::Line => 1,
            Scroll::Page => self.hit_map.notification_rows().max(1),
        }
    }

    /// Forward the row's slug to the engine. The HUD itself stays unchanged
    /// until the engine pushes a snapshot reflecting the result.
    fn use_item(&mut self, index: usize) -> Outcome {
        let view = self.shell.view();
        let Some(slug) = view.item_slug(index) else {
            tracing::debug!("No item at row {}", index);
            return Outcome::Continue;
        };

        if let DispatchOutcome::Failed(err) = self.shell.use_item(slug) {
            tracing::warn!("Could not use {}: {}", slug, err);
        }

        self.app_state.selected = Some(index);
        Outcome::Redraw
    }

    /// Draw the latest state.
    pub fn render<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let view = self.shell.view();
        self.app_state.clamp(view.item_count());
        let feed_len = view.notifications.as_ref().map_or(0, Vec::len);
        let feed_rows = self.hit_map.notification_rows();
        if feed_rows > 0 {
            self.app_state.clamp_notification_scroll(feed_len, feed_rows);
        }

        let ctx = ui::RenderContext {
            view: &view,
            surfaces: &self.surfaces,
            selected: self.app_state.selected,
            notification_scroll: self.app_state.notification_scroll,
            notification_panel_height: self.cli_config.ui.notification_panel_height,
        };

        self.hit_map = ui::render(terminal, &ctx)?;
        Ok(())
    }

    pub fn shell(&self) -> &HudShell {
        &self.shell
    }

    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }
}
