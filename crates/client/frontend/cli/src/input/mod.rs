//! Input processing for the CLI frontend.
//!
//! This module owns the key and mouse mapping so the rest of the application
//! can remain agnostic about concrete bindings or the specifics of
//! `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::presentation::HitMap;

/// High-level outcome of processing an input event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Use the item at this row index.
    UseItem(usize),
    /// Use the highlighted row.
    UseSelected,
    SelectNext,
    SelectPrev,
    /// Scroll the notification feed towards older entries.
    ScrollOlder(Scroll),
    /// Scroll the notification feed back towards the newest entry.
    ScrollNewer(Scroll),
    /// No meaningful command was produced.
    None,
}

/// How far one scroll command moves the notification feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scroll {
    Line,
    /// One panel height.
    Page,
}

/// Translates terminal events into HUD commands.
#[derive(Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Up => KeyAction::SelectPrev,
            KeyCode::Down => KeyAction::SelectNext,
            KeyCode::Enter => KeyAction::UseSelected,
            KeyCode::PageUp => KeyAction::ScrollOlder(Scroll::Page),
            KeyCode::PageDown => KeyAction::ScrollNewer(Scroll::Page),
            _ => KeyAction::None,
        }
    }

    /// A left press on an item row uses that item; the wheel over the
    /// notification feed scrolls it.
    pub fn handle_mouse(&self, mouse: MouseEvent, hit_map: &HitMap) -> KeyAction {
        let over_feed = || hit_map.is_over_notifications(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => hit_map
                .item_at(mouse.column, mouse.row)
                .map_or(KeyAction::None, KeyAction::UseItem),
            MouseEventKind::ScrollUp if over_feed() => KeyAction::ScrollOlder(Scroll::Line),
            MouseEventKind::ScrollDown if over_feed() => KeyAction::ScrollNewer(Scroll::Line),
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        match raw.to_ascii_lowercase() {
            'q' => KeyAction::Quit,
            'k' => KeyAction::SelectPrev,
            'j' => KeyAction::SelectNext,
            digit @ '1'..='9' => KeyAction::UseItem(digit as usize - '1' as usize),
            _ => KeyAction::None,
        }
    }
}
