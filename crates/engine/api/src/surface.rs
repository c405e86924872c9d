//! Drawable regions shared between the UI and the engine.
//!
//! The UI creates the surfaces and lays them out; only the engine draws into
//! them. A surface is a fixed-size grid of character rows guarded by a lock so
//! the engine can draw from its own task while the UI blits the latest frame.
use std::fmt;
use std::sync::{Arc, RwLock};

/// Which of the two mounted surfaces this is.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SurfaceId {
    Viewport,
    Minimap,
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SurfaceId::Viewport => "viewport",
            SurfaceId::Minimap => "minimap",
        };
        write!(f, "{}", label)
    }
}

/// Surface dimensions in character cells.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SurfaceSize {
    pub width: u16,
    pub height: u16,
}

impl SurfaceSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Shared reference to a surface.
pub type SurfaceHandle = Arc<Surface>;

pub struct Surface {
    id: SurfaceId,
    size: SurfaceSize,
    rows: RwLock<Vec<String>>,
}

impl Surface {
    pub fn new(id: SurfaceId, size: SurfaceSize) -> Self {
        Self {
            id,
            size,
            rows: RwLock::new(Vec::new()),
        }
    }

    /// Convenience constructor returning a ready-to-share handle.
    pub fn handle(id: SurfaceId, size: SurfaceSize) -> SurfaceHandle {
        Arc::new(Self::new(id, size))
    }

    pub fn id(&self) -> SurfaceId {
        self.id
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Replace the surface contents.
    ///
    /// Rows beyond the surface height are dropped and each row is cut to the
    /// surface width.
    pub fn draw(&self, rows: Vec<String>) {
        let width = self.size.width as usize;
        let clipped: Vec<String> = rows
            .into_iter()
            .take(self.size.height as usize)
            .map(|row| row.chars().take(width).collect())
            .collect();

        match self.rows.write() {
            Ok(mut guard) => *guard = clipped,
            Err(poisoned) => *poisoned.into_inner() = clipped,
        }
    }

    pub fn clear(&self) {
        self.draw(Vec::new());
    }

    /// Copy of the last drawn frame.
    pub fn rows(&self) -> Vec<String> {
        match self.rows.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("id", &self.id)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_clips_to_surface_size() {
        let surface = Surface::new(SurfaceId::Minimap, SurfaceSize::new(3, 2));
        surface.draw(vec!["abcdef".into(), "gh".into(), "ignored".into()]);

        assert_eq!(surface.rows(), vec!["abc".to_string(), "gh".to_string()]);
    }

    #[test]
    fn clear_empties_the_frame() {
        let surface = Surface::new(SurfaceId::Viewport, SurfaceSize::new(4, 4));
        surface.draw(vec!["####".into()]);
        surface.clear();

        assert!(surface.rows().is_empty());
    }
}
