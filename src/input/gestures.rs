use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};

use crate::state::CanvasState;
use crate::view::ZoomLimits;

/// Configuration for gesture interpretation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Range the view scale is clamped to
    pub zoom_limits: ZoomLimits,
    /// Multiplier applied to two-finger pan deltas
    pub pan_speed: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            zoom_limits: ZoomLimits::default(),
            pan_speed: 1.5,
        }
    }
}

/// One contact's change within a pointer frame. Positions are relative to
/// the canvas area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerChange {
    pub id: u64,
    pub position: Pos2,
    pub previous_position: Pos2,
    pub pressed: bool,
}

/// What a frame of input did to the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    Idle,
    Drawing,
    Committed,
    Transformed,
}

/// Zoom about `center`, then pan. Any unfinished stroke is dropped.
pub(crate) fn apply_transform(
    state: &mut CanvasState,
    config: &GestureConfig,
    center: Pos2,
    zoom: f32,
    pan: Vec2,
) {
    state.cancel_stroke();
    let view = state.view_mut();
    view.zoom_about(center, zoom, &config.zoom_limits);
    view.pan(pan * config.pan_speed);
    log::debug!("View scale {:.2}, offset {:?}", view.scale(), view.offset());
}

/// Turns raw pointer frames into drawing or pan/zoom.
///
/// A single pressed contact draws. Two or more contacts pan and zoom, and
/// once that happens nothing is drawn until every contact is released.
#[derive(Debug, Default)]
pub struct GestureInterpreter {
    config: GestureConfig,
    drawing: bool,
    transforming: bool,
}

impl GestureInterpreter {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            drawing: false,
            transforming: false,
        }
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn handle(&mut self, changes: &[PointerChange], state: &mut CanvasState) -> GestureOutcome {
        match changes {
            [] => GestureOutcome::Idle,
            [first, second, ..] => self.handle_multi(first, second, changes, state),
            [single] => self.handle_single(single, state),
        }
    }

    fn handle_multi(
        &mut self,
        first: &PointerChange,
        second: &PointerChange,
        changes: &[PointerChange],
        state: &mut CanvasState,
    ) -> GestureOutcome {
        let pan = first.position - first.previous_position;

        let previous_distance = (first.previous_position - second.previous_position).length();
        let current_distance = (first.position - second.position).length();
        let zoom = if previous_distance > f32::EPSILON && previous_distance.is_finite() {
            current_distance / previous_distance
        } else {
            1.0
        };

        let center = first.position.lerp(second.position, 0.5);
        apply_transform(state, &self.config, center, zoom, pan);

        self.drawing = false;
        self.transforming = changes.iter().any(|change| change.pressed);
        GestureOutcome::Transformed
    }

    fn handle_single(&mut self, change: &PointerChange, state: &mut CanvasState) -> GestureOutcome {
        if self.transforming {
            if !change.pressed {
                self.transforming = false;
            }
            return GestureOutcome::Idle;
        }

        if change.pressed {
            if self.drawing {
                state.extend_stroke(change.position);
            } else {
                state.begin_stroke(change.position);
                self.drawing = true;
            }
            return GestureOutcome::Drawing;
        }

        self.drawing = false;
        if state.commit_stroke() {
            GestureOutcome::Committed
        } else {
            GestureOutcome::Idle
        }
    }
}
