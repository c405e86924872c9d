//! Event handling for the CLI frontend.
//!
//! The event loop coordinates store changes, user input, and redraws.

mod r#loop;

pub use r#loop::{EventLoop, Outcome};
