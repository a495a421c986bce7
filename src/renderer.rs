use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke as EguiStroke};

use crate::state::CanvasState;
use crate::stroke::{LineCap, LineJoin, StrokeStyle};
use crate::view::ViewTransform;

/// Draws the canvas contents for one frame
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
}

impl Renderer {
    pub fn new(background: Color32) -> Self {
        Self { background }
    }

    /// Paint the canvas in the theme's darkest background color, so it
    /// follows light and dark mode
    pub fn from_visuals(visuals: &egui::Visuals) -> Self {
        Self::new(visuals.extreme_bg_color)
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// Paint committed strokes in order, then the in-progress stroke on top.
    ///
    /// `painter` should already be clipped to `rect`.
    pub fn render(&self, painter: &Painter, rect: Rect, state: &CanvasState) {
        painter.rect_filled(rect, 0.0, self.background);
        painter.extend(self.shapes(rect, state));
    }

    /// Shapes for the whole canvas, in screen coordinates
    pub fn shapes(&self, rect: Rect, state: &CanvasState) -> Vec<Shape> {
        let view = state.view();
        let mut shapes = Vec::new();

        for stroke in state.strokes() {
            shapes.extend(stroke_shapes(
                stroke.points(),
                stroke.color(),
                stroke.width(),
                stroke.style(),
                view,
                rect.min,
            ));
        }

        if let Some(builder) = state.in_progress().filter(|builder| !builder.is_empty()) {
            let brush = state.brush();
            shapes.extend(stroke_shapes(
                builder.points(),
                brush.color(),
                brush.width(),
                state.style(),
                view,
                rect.min,
            ));
        }

        shapes
    }
}

/// Tessellate one polyline into egui shapes.
///
/// egui strokes have butt ends and mitered corners, so round caps and joins
/// are filled in with discs.
pub fn stroke_shapes(
    points: &[Pos2],
    color: Color32,
    width: f32,
    style: StrokeStyle,
    view: &ViewTransform,
    origin: Pos2,
) -> Vec<Shape> {
    if points.len() < 2 {
        return Vec::new();
    }

    let screen: Vec<Pos2> = points
        .iter()
        .map(|p| view.canvas_to_screen(*p) + origin.to_vec2())
        .collect();
    let screen_width = width * view.scale();
    let radius = screen_width / 2.0;

    let mut shapes = Vec::with_capacity(3);
    shapes.push(Shape::line(screen.clone(), EguiStroke::new(screen_width, color)));

    if style.join == LineJoin::Round {
        for p in &screen[1..screen.len() - 1] {
            shapes.push(Shape::circle_filled(*p, radius, color));
        }
    }

    if style.cap == LineCap::Round {
        shapes.push(Shape::circle_filled(screen[0], radius, color));
        shapes.push(Shape::circle_filled(screen[screen.len() - 1], radius, color));
    }

    shapes
}
