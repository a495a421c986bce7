use egui::Color32;

/// Swatches offered by the color picker
pub const DEFAULT_PALETTE: [Color32; 4] = [
    Color32::BLACK,
    Color32::RED,
    Color32::from_rgb(0xFF, 0x7C, 0x00),
    Color32::from_rgb(0xBF, 0x64, 0xFF),
];

pub const DEFAULT_STROKE_WIDTH: f32 = 10.0;
pub const MIN_STROKE_WIDTH: f32 = 5.0;
pub const MAX_STROKE_WIDTH: f32 = 40.0;

/// Current color and stroke width
#[derive(Debug, Clone, PartialEq)]
pub struct Brush {
    color: Color32,
    width: f32,
    min_width: f32,
    max_width: f32,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            width: DEFAULT_STROKE_WIDTH,
            min_width: MIN_STROKE_WIDTH,
            max_width: MAX_STROKE_WIDTH,
        }
    }
}

impl Brush {
    pub fn new(color: Color32, width: f32, min_width: f32, max_width: f32) -> Self {
        Self {
            color,
            width: width.clamp(min_width, max_width),
            min_width,
            max_width,
        }
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Set the width, clamped to the brush's range
    pub fn set_width(&mut self, width: f32) {
        if width.is_finite() {
            self.width = width.clamp(self.min_width, self.max_width);
        }
    }

    pub fn width_range(&self) -> std::ops::RangeInclusive<f32> {
        self.min_width..=self.max_width
    }
}
