//! Terminal setup/teardown helpers for the CLI UI.
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

pub fn init() -> Result<Tui> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

pub fn restore() -> Result<()> {
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

/// Restores the terminal exactly once.
///
/// The normal exit path calls [`TerminalGuard::finish`] to surface restore
/// errors; an early return or panic restores on drop instead.
pub struct TerminalGuard {
    restore: fn() -> Result<()>,
    armed: bool,
}

impl TerminalGuard {
    pub fn new() -> Self {
        Self::with_restore(restore)
    }

    fn with_restore(restore: fn() -> Result<()>) -> Self {
        Self {
            restore,
            armed: true,
        }
    }

    pub fn finish(mut self) -> Result<()> {
        self.armed = false;
        (self.restore)()
    }
}

impl Default for TerminalGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.armed {
            let _ = (self.restore)();
        }
    }
}
