mod canvas_panel;
mod pickers;
mod toolbar;

pub use canvas_panel::canvas_panel;
pub use pickers::{color_picker, stroke_picker};
pub use toolbar::toolbar;
