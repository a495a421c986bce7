use egui::{Color32, Pos2};

use crate::brush::Brush;
use crate::config::CanvasConfig;
use crate::document::Document;
use crate::stroke::{Stroke, StrokeBuilder, StrokeStyle};
use crate::view::ViewTransform;

/// Everything the canvas screen mutates while handling input
#[derive(Debug, Clone, Default)]
pub struct CanvasState {
    document: Document,
    in_progress: Option<StrokeBuilder>,
    brush: Brush,
    style: StrokeStyle,
    view: ViewTransform,
}

impl CanvasState {
    /// State for a validated `config`. The view starts at 1:1, or at the
    /// nearest scale the zoom limits allow.
    pub fn new(config: &CanvasConfig) -> Self {
        let scale = config.gestures.zoom_limits.clamp(1.0);
        Self {
            document: Document::new(config.redo_policy),
            in_progress: None,
            brush: config.brush(),
            style: config.stroke_style,
            view: ViewTransform::with_scale(scale),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn strokes(&self) -> &[Stroke] {
        self.document.strokes()
    }

    pub fn in_progress(&self) -> Option<&StrokeBuilder> {
        self.in_progress.as_ref()
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn set_color(&mut self, color: Color32) {
        self.brush.set_color(color);
    }

    pub fn set_stroke_width(&mut self, width: f32) {
        self.brush.set_width(width);
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewTransform {
        &mut self.view
    }

    /// Start a new path at a screen position, replacing any unfinished one
    pub fn begin_stroke(&mut self, screen: Pos2) {
        let start = self.view.screen_to_canvas(screen);
        self.in_progress = Some(StrokeBuilder::new(start));
    }

    /// Extend the current path to a screen position
    pub fn extend_stroke(&mut self, screen: Pos2) {
        let point = self.view.screen_to_canvas(screen);
        match &mut self.in_progress {
            Some(builder) => builder.line_to(point),
            None => self.in_progress = Some(StrokeBuilder::new(point)),
        }
    }

    /// Commit the current path with the current brush.
    ///
    /// Returns `true` if a stroke was added. An empty path is dropped.
    pub fn commit_stroke(&mut self) -> bool {
        let Some(builder) = self.in_progress.take() else {
            return false;
        };

        match builder.finish(self.brush.color(), self.brush.width(), self.style) {
            Some(stroke) => {
                log::debug!(
                    "Committed stroke with {} points (width {})",
                    stroke.points().len(),
                    stroke.width()
                );
                self.document.commit(stroke);
                true
            }
            None => false,
        }
    }

    pub fn cancel_stroke(&mut self) {
        if self.in_progress.take().is_some() {
            log::debug!("Discarded in-progress stroke");
        }
    }

    pub fn undo(&mut self) -> bool {
        let undone = self.document.undo();
        if undone {
            log::info!("Undo ({} strokes left)", self.document.strokes().len());
        }
        undone
    }

    pub fn redo(&mut self) -> bool {
        let redone = self.document.redo();
        if redone {
            log::info!("Redo ({} strokes)", self.document.strokes().len());
        }
        redone
    }

    pub fn clear(&mut self) {
        log::info!("Cleared {} strokes", self.document.strokes().len());
        self.document.clear();
    }

    pub fn can_undo(&self) -> bool {
        self.document.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.document.can_redo()
    }
}
