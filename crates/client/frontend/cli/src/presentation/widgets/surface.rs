//! Blits an engine-drawn surface into a bordered panel.

use engine_api::Surface;
use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, surface: &Surface, theme: &RatatuiTheme) {
    let lines: Vec<Line> = surface.rows().into_iter().map(Line::from).collect();

    let paragraph = Paragraph::new(lines)
        .style(theme.surface_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(surface.id().to_string()),
        );

    frame.render_widget(paragraph, area);
}
