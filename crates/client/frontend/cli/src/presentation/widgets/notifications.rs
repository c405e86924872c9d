//! Notification feed.

use hud_frontend_core::view_model::NotificationView;
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, List, ListItem},
};

use crate::presentation::{HitMap, theme::RatatuiTheme};

/// Render notifications in snapshot order.
///
/// `scroll` counts entries hidden below the panel; at zero the newest entries
/// are shown. Older entries stay reachable by scrolling up.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    notifications: &[NotificationView],
    scroll: usize,
    hit_map: &mut HitMap,
    theme: &RatatuiTheme,
) {
    let capacity = Block::default().borders(Borders::ALL).inner(area).height as usize;
    let end = notifications
        .len()
        .saturating_sub(scroll)
        .max(capacity.min(notifications.len()));
    let start = end.saturating_sub(capacity);

    let title = if end < notifications.len() {
        format!("Notifications {}-{}/{}", start + 1, end, notifications.len())
    } else {
        "Notifications".to_string()
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    hit_map.register_notifications(block.inner(area));

    let items: Vec<ListItem> = notifications[start..end]
        .iter()
        .map(|entry| ListItem::new(entry.text.as_str()).style(theme.notification_style()))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
