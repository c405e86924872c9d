//! Local UI state that never reaches the engine.

/// Keyboard selection over the inventory rows and the notification scrollback.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    /// Highlighted item row, if any.
    pub selected: Option<usize>,
    /// Entries hidden below the notification panel, counted from the newest.
    /// Zero follows the feed.
    pub notification_scroll: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_next(&mut self, item_count: usize) {
        if item_count == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(index) if index + 1 < item_count => index + 1,
            Some(_) => item_count - 1,
            None => 0,
        });
    }

    pub fn select_prev(&mut self, item_count: usize) {
        if item_count == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(index) => index.saturating_sub(1).min(item_count - 1),
            None => 0,
        });
    }

    /// Keep the selection inside the current item list after a state change.
    pub fn clamp(&mut self, item_count: usize) {
        self.selected = match self.selected {
            _ if item_count == 0 => None,
            Some(index) => Some(index.min(item_count - 1)),
            None => None,
        };
    }

    /// Reveal `lines` older notifications, stopping at the first entry.
    pub fn scroll_notifications_older(&mut self, lines: usize, total: usize, visible: usize) {
        self.notification_scroll = self
            .notification_scroll
            .saturating_add(lines)
            .min(max_notification_scroll(total, visible));
    }

    pub fn scroll_notifications_newer(&mut self, lines: usize) {
        self.notification_scroll = self.notification_scroll.saturating_sub(lines);
    }

    pub fn clamp_notification_scroll(&mut self, total: usize, visible: usize) {
        self.notification_scroll = self
            .notification_scroll
            .min(max_notification_scroll(total, visible));
    }
}

fn max_notification_scroll(total: usize, visible: usize) -> usize {
    total.saturating_sub(visible.max(1))
}
