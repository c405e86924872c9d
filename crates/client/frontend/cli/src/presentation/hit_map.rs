use ratatui::layout::{Position, Rect};

/// Screen regions of the last frame that react to the mouse.
///
/// Rebuilt on every draw so clicks always resolve against what is on screen.
#[derive(Clone, Debug, Default)]
pub struct HitMap {
    items: Vec<(Rect, usize)>,
    notifications: Option<Rect>,
}

impl HitMap {
    pub fn register_item(&mut self, area: Rect, index: usize) {
        self.items.push((area, index));
    }

    /// Inner area of the notification feed, used for wheel scrolling.
    pub fn register_notifications(&mut self, area: Rect) {
        self.notifications = Some(area);
    }

    /// Item row index under the given cell.
    pub fn item_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.items
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|(_, index)| *index)
    }

    pub fn is_over_notifications(&self, column: u16, row: u16) -> bool {
        self.notifications
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }

    /// Lines the notification feed showed in the last frame.
    pub fn notification_rows(&self) -> usize {
        self.notifications.map_or(0, |area| area.height as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
