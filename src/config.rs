use std::fs;
use std::path::Path;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::brush::{self, Brush};
use crate::document::RedoPolicy;
use crate::error::{CanvasError, CanvasResult};
use crate::input::{GestureConfig, InputMode};
use crate::stroke::StrokeStyle;

/// Environment variable naming a JSON config file
pub const CONFIG_ENV_VAR: &str = "PATH_CANVAS_CONFIG";

/// Startup configuration for the canvas.
///
/// Every field has a default, so a config file only needs to list what it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub gestures: GestureConfig,
    pub min_stroke_width: f32,
    pub max_stroke_width: f32,
    pub default_stroke_width: f32,
    pub palette: Vec<Color32>,
    pub default_color: Color32,
    pub stroke_style: StrokeStyle,
    pub redo_policy: RedoPolicy,
    pub input_mode: InputMode,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            gestures: GestureConfig::default(),
            min_stroke_width: brush::MIN_STROKE_WIDTH,
            max_stroke_width: brush::MAX_STROKE_WIDTH,
            default_stroke_width: brush::DEFAULT_STROKE_WIDTH,
            palette: brush::DEFAULT_PALETTE.to_vec(),
            default_color: Color32::BLACK,
            stroke_style: StrokeStyle::default(),
            redo_policy: RedoPolicy::default(),
            input_mode: InputMode::default(),
        }
    }
}

impl CanvasConfig {
    pub fn from_json_str(json: &str) -> CanvasResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> CanvasResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Load the file named by [`CONFIG_ENV_VAR`], falling back to defaults
    pub fn from_env() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
            return Self::default();
        };

        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded canvas config from {}", path);
                config
            }
            Err(err) => {
                log::warn!("Ignoring config {}: {}", path, err);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> CanvasResult<()> {
        let zoom = &self.gestures.zoom_limits;
        if !(zoom.min > 0.0 && zoom.min <= zoom.max) {
            return Err(CanvasError::InvalidConfig(format!(
                "zoom limits {}..={} must be positive and ordered",
                zoom.min, zoom.max
            )));
        }
        if !(self.gestures.pan_speed > 0.0) {
            return Err(CanvasError::InvalidConfig(format!(
                "pan speed {} must be positive",
                self.gestures.pan_speed
            )));
        }
        if !(self.min_stroke_width > 0.0 && self.min_stroke_width <= self.max_stroke_width) {
            return Err(CanvasError::InvalidConfig(format!(
                "stroke width range {}..={} must be positive and ordered",
                self.min_stroke_width, self.max_stroke_width
            )));
        }
        if !(self.min_stroke_width..=self.max_stroke_width).contains(&self.default_stroke_width) {
            return Err(CanvasError::InvalidConfig(format!(
                "default stroke width {} is outside {}..={}",
                self.default_stroke_width, self.min_stroke_width, self.max_stroke_width
            )));
        }
        if self.palette.is_empty() {
            return Err(CanvasError::InvalidConfig("palette is empty".to_owned()));
        }
        Ok(())
    }

    pub fn brush(&self) -> Brush {
        Brush::new(
            self.default_color,
            self.default_stroke_width,
            self.min_stroke_width,
            self.max_stroke_width,
        )
    }
}
