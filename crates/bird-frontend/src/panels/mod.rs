//! UI panels

mod controls;
mod viewport;

pub use controls::show_debug_controls;
pub use viewport::ViewportPanel;
