//! Terminal presentation components used by the CLI frontend.
mod hit_map;
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use hit_map::HitMap;
