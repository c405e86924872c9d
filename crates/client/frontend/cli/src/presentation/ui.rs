//! Main render entry point composing the HUD widgets.
//!
//! Layout:
//!
//! ```text
//! +----------------------+-----------+
//! |                      | minimap   |
//! |       viewport       | health    |
//! |                      | items     |
//! |                      | gold      |
//! +----------------------+-----------+
//! |          notifications           |
//! +----------------------------------+
//! ```
use anyhow::Result;
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
};

use engine_api::SurfaceSize;
use hud_frontend_core::{HudView, Surfaces};

use crate::presentation::{HitMap, theme::RatatuiTheme, widgets};

/// Narrowest side panel, so item rows stay readable.
const MIN_SIDE_PANEL_WIDTH: u16 = 28;
const HEALTH_PANEL_HEIGHT: u16 = 3;
const GOLD_PANEL_HEIGHT: u16 = 3;
/// Borders around a bordered panel.
const PANEL_CHROME: u16 = 2;

/// Everything a frame needs.
pub struct RenderContext<'a> {
    pub view: &'a HudView,
    pub surfaces: &'a Surfaces,
    pub selected: Option<usize>,
    /// Notifications hidden below the feed, counted from the newest.
    pub notification_scroll: usize,
    pub notification_panel_height: u16,
}

/// Draw one frame and return the click targets it produced.
pub fn render<B: Backend>(terminal: &mut Terminal<B>, ctx: &RenderContext) -> Result<HitMap> {
    let theme = RatatuiTheme::new();
    let mut hit_map = HitMap::default();

    terminal.draw(|frame| render_hud(frame, ctx, &theme, &mut hit_map))?;

    Ok(hit_map)
}

fn render_hud(frame: &mut Frame, ctx: &RenderContext, theme: &RatatuiTheme, hit_map: &mut HitMap) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                               // Canvas + stats
            Constraint::Length(ctx.notification_panel_height), // Notifications
        ])
        .split(frame.area());

    let minimap_size = ctx.surfaces.minimap.size();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(side_panel_width(minimap_size)),
        ])
        .split(rows[0]);

    widgets::surface::render(frame, columns[0], &ctx.surfaces.viewport, theme);
    render_side_panel(frame, columns[1], ctx, theme, hit_map);

    if let Some(notifications) = &ctx.view.notifications {
        widgets::notifications::render(
            frame,
            rows[1],
            notifications,
            ctx.notification_scroll,
            hit_map,
            theme,
        );
    }
}

fn render_side_panel(
    frame: &mut Frame,
    area: Rect,
    ctx: &RenderContext,
    theme: &RatatuiTheme,
    hit_map: &mut HitMap,
) {
    let item_count = ctx.view.items.as_ref().map_or(0, Vec::len);
    let minimap_height = minimap_panel_height(
        area.height,
        ctx.surfaces.minimap.size().height,
        item_count,
    );
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(minimap_height),
            Constraint::Length(HEALTH_PANEL_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(GOLD_PANEL_HEIGHT),
        ])
        .split(area);

    widgets::surface::render(frame, sections[0], &ctx.surfaces.minimap, theme);

    if let Some(health) = &ctx.view.health {
        widgets::health_bar::render(frame, sections[1], health, theme);
    }

    if let Some(items) = &ctx.view.items {
        widgets::inventory::render(frame, sections[2], items, ctx.selected, hit_map, theme);
    }

    if let Some(gold) = &ctx.view.gold {
        widgets::gold::render(frame, sections[3], gold, theme);
    }
}

fn side_panel_width(minimap: SurfaceSize) -> u16 {
    minimap.width.saturating_add(PANEL_CHROME).max(MIN_SIDE_PANEL_WIDTH)
}

/// The minimap gives up rows before the inventory does, so on short
/// terminals every item row keeps its place in the side panel.
fn minimap_panel_height(panel_height: u16, minimap_rows: u16, item_count: usize) -> u16 {
    let item_rows = u16::try_from(item_count.max(1)).unwrap_or(u16::MAX);
    let reserved = HEALTH_PANEL_HEIGHT
        .saturating_add(GOLD_PANEL_HEIGHT)
        .saturating_add(item_rows.saturating_add(PANEL_CHROME));

    minimap_rows
        .saturating_add(PANEL_CHROME)
        .min(panel_height.saturating_sub(reserved))
}
