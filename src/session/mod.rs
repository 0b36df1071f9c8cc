//! Screen flow and UI-facing state, kept explicit instead of global.

mod controller;
mod screen;

pub use controller::Session;
pub use screen::Screen;
