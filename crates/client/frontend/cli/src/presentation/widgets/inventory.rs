//! Clickable inventory list.

use hud_frontend_core::view_model::ItemRowView;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::{HitMap, theme::RatatuiTheme};

/// Render one row per item and register each visible row as a click target.
///
/// Rows are `name` on the left and `amount` on the right. When the list is
/// taller than the panel, the window scrolls to keep the selected row on
/// screen and the title shows which rows are visible.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    items: &[ItemRowView],
    selected: Option<usize>,
    hit_map: &mut HitMap,
    theme: &RatatuiTheme,
) {
    let capacity = Block::default().borders(Borders::ALL).inner(area).height as usize;
    let offset = window_offset(selected, items.len(), capacity);
    let shown = items.len().saturating_sub(offset).min(capacity);

    let title = if shown < items.len() {
        format!("Items {}-{}/{}", offset + 1, offset + shown, items.len())
    } else {
        "Items".to_string()
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::with_capacity(shown);
    for (row, (index, item)) in items.iter().enumerate().skip(offset).take(shown).enumerate() {
        hit_map.register_item(Rect::new(inner.x, inner.y + row as u16, inner.width, 1), index);

        let amount = item.amount_label();
        let name_width = (inner.width as usize).saturating_sub(amount.chars().count() + 1);

        lines.push(
            Line::from(vec![
                Span::raw(format!("{:<width$} ", item.name, width = name_width)),
                Span::styled(amount, theme.amount_style()),
            ])
            .style(theme.item_style(selected == Some(index))),
        );
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// First visible row: the top of the list unless the selection sits below
/// the window, in which case the selection becomes the last visible row.
fn window_offset(selected: Option<usize>, len: usize, capacity: usize) -> usize {
    if capacity == 0 {
        return 0;
    }
    let max_offset = len.saturating_sub(capacity);
    selected
        .map_or(0, |index| (index + 1).saturating_sub(capacity))
        .min(max_offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_follows_the_selection() {
        assert_eq!(window_offset(None, 9, 3), 0);
        assert_eq!(window_offset(Some(2), 9, 3), 0);
        assert_eq!(window_offset(Some(3), 9, 3), 1);
        assert_eq!(window_offset(Some(8), 9, 3), 6);
        assert_eq!(window_offset(Some(20), 9, 3), 6);
    }

    #[test]
    fn short_lists_never_scroll() {
        assert_eq!(window_offset(Some(1), 2, 5), 0);
        assert_eq!(window_offset(Some(1), 2, 0), 0);
    }
}
