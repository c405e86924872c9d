//! Widget modules for UI rendering.
//!
//! Each widget is a function that reads a view-model slice and renders it to
//! a terminal frame. A widget given `None` draws nothing.

pub mod gold;
pub mod health_bar;
pub mod inventory;
pub mod notifications;
pub mod surface;
