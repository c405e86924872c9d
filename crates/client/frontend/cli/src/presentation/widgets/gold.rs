use hud_frontend_core::view_model::GoldView;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, gold: &GoldView, theme: &RatatuiTheme) {
    let line = Line::from(vec![
        Span::raw("Gold: "),
        Span::styled(gold.label(), theme.gold_style()),
    ]);

    let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
