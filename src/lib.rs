#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod brush;
pub mod components;
pub mod config;
pub mod document;
pub mod error;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod stroke;
pub mod view;

pub use app::{CanvasApp, Preferences};
pub use brush::Brush;
pub use config::CanvasConfig;
pub use document::{Document, RedoPolicy};
pub use error::{CanvasError, CanvasResult};
pub use input::{GestureDetector, GestureInterpreter, GestureOutcome, InputMode, PointerChange};
pub use renderer::Renderer;
pub use state::CanvasState;
pub use stroke::{Stroke, StrokeBuilder, StrokeStyle};
pub use view::{ViewTransform, ZoomLimits};
