use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};

/// Allowed range for the view scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomLimits {
    pub min: f32,
    pub max: f32,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self { min: 0.5, max: 5.0 }
    }
}

impl ZoomLimits {
    pub fn clamp(&self, scale: f32) -> f32 {
        scale.clamp(self.min, self.max)
    }
}

/// Maps canvas space onto the screen: `screen = canvas * scale + offset`.
///
/// Screen positions are relative to the top-left corner of the canvas area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    scale: f32,
    offset: Vec2,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
        }
    }
}

impl ViewTransform {
    /// Unpanned view at `scale`
    pub fn with_scale(scale: f32) -> Self {
        Self {
            scale,
            offset: Vec2::ZERO,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn screen_to_canvas(&self, screen: Pos2) -> Pos2 {
        ((screen.to_vec2() - self.offset) / self.scale).to_pos2()
    }

    pub fn canvas_to_screen(&self, canvas: Pos2) -> Pos2 {
        (canvas.to_vec2() * self.scale + self.offset).to_pos2()
    }

    /// Multiply the scale by `zoom`, clamped to `limits`, keeping the canvas
    /// point under `focal` where it is on screen.
    pub fn zoom_about(&mut self, focal: Pos2, zoom: f32, limits: &ZoomLimits) {
        if !zoom.is_finite() || zoom <= 0.0 {
            return;
        }

        let focal_before = self.screen_to_canvas(focal);
        self.scale = limits.clamp(self.scale * zoom);
        let focal_after = self.screen_to_canvas(focal);

        self.offset += (focal_after - focal_before) * self.scale;
    }

    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }
}
