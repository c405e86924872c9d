//! Health gauge labeled `current/max`.

use hud_frontend_core::view_model::HealthBarView;
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Gauge},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, health: &HealthBarView, theme: &RatatuiTheme) {
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Health"))
        .gauge_style(theme.health_style(health.percentage))
        .ratio(health.ratio())
        .label(health.label.clone());

    frame.render_widget(gauge, area);
}
