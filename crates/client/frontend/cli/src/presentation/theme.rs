//! Ratatui styling for the HUD panels.

use ratatui::style::{Color, Modifier, Style};

/// Consistent color scheme for the terminal HUD.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn new() -> Self {
        Self
    }

    /// Gauge color by fill percentage.
    pub fn health_style(&self, percentage: f64) -> Style {
        let color = match percentage {
            p if p >= 75.0 => Color::Green,
            p if p >= 50.0 => Color::Yellow,
            p if p >= 25.0 => Color::LightRed,
            _ => Color::Red,
        };

        Style::default().fg(color).bg(Color::Black)
    }

    pub fn item_style(&self, selected: bool) -> Style {
        if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    }

    pub fn amount_style(&self) -> Style {
        Style::default().fg(Color::LightCyan)
    }

    pub fn gold_style(&self) -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn notification_style(&self) -> Style {
        Style::default().fg(Color::White)
    }

    pub fn surface_style(&self) -> Style {
        Style::default().fg(Color::Gray)
    }
}
