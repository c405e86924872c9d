//! Minimal surface fill: a blank grid with one marker walking the middle row.
//!
//! Only there so the HUD has something to blit; the marker's starting column
//! comes from the mount seed.
use engine_api::Surface;

const BLANK: char = '.';

pub(crate) struct Painter {
    seed: u64,
}

impl Painter {
    pub(crate) fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub(crate) fn paint_viewport(&self, surface: &Surface, frame: u64) {
        self.paint(surface, frame, '@');
    }

    pub(crate) fn paint_minimap(&self, surface: &Surface, frame: u64) {
        self.paint(surface, frame, '*');
    }

    fn paint(&self, surface: &Surface, frame: u64, marker: char) {
        let size = surface.size();
        if size.width == 0 || size.height == 0 {
            surface.clear();
            return;
        }

        let width = size.width as usize;
        let marker_x = (self.seed.wrapping_add(frame) % size.width as u64) as usize;
        let marker_y = size.height as usize / 2;

        let rows = (0..size.height as usize)
            .map(|y| {
                (0..width)
                    .map(|x| if (x, y) == (marker_x, marker_y) { marker } else { BLANK })
                    .collect()
            })
            .collect();

        surface.draw(rows);
    }
}

#[cfg(test)]
mod tests {
    use engine_api::{SurfaceId, SurfaceSize};

    use super::*;

    #[test]
    fn marker_walks_the_middle_row() {
        let surface = Surface::new(SurfaceId::Viewport, SurfaceSize::new(16, 8));
        let painter = Painter::new(0);

        painter.paint_viewport(&surface, 3);
        let rows = surface.rows();
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[4].chars().nth(3), Some('@'));
        assert_eq!(rows.iter().flat_map(|row| row.chars()).filter(|c| *c == '@').count(), 1);

        painter.paint_viewport(&surface, 19);
        assert_eq!(surface.rows()[4].chars().nth(3), Some('@'));
    }

    #[test]
    fn seed_offsets_the_marker() {
        let surface = Surface::new(SurfaceId::Minimap, SurfaceSize::new(10, 5));

        Painter::new(4).paint_minimap(&surface, 0);

        let rows = surface.rows();
        assert!(rows.iter().all(|row| row.chars().count() == 10));
        assert_eq!(rows[2].chars().nth(4), Some('*'));
    }
}
