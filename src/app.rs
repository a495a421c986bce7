use egui::{Color32, Key, KeyboardShortcut, Modifiers, Rect, Response};

use crate::config::CanvasConfig;
use crate::input::{
    DetectorFrame, GestureDetector, GestureInterpreter, GestureOutcome, InputMode, PointerTracker,
};
use crate::panels;
use crate::state::CanvasState;

/// User choices remembered between runs. Drawings themselves are not saved.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct Preferences {
    pub color: Color32,
    pub stroke_width: f32,
    pub input_mode: InputMode,
}

impl Default for Preferences {
    fn default() -> Self {
        let config = CanvasConfig::default();
        Self {
            color: config.default_color,
            stroke_width: config.default_stroke_width,
            input_mode: config.input_mode,
        }
    }
}

pub struct CanvasApp {
    config: CanvasConfig,
    state: CanvasState,
    input_mode: InputMode,
    tracker: PointerTracker,
    interpreter: GestureInterpreter,
    detector: GestureDetector,
    show_color_picker: bool,
    show_stroke_picker: bool,
}

impl Default for CanvasApp {
    fn default() -> Self {
        Self::with_config(CanvasConfig::default())
    }
}

impl CanvasApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: CanvasConfig) -> Self {
        let mut app = Self::with_config(config);

        if let Some(storage) = cc.storage {
            if let Some(preferences) = eframe::get_value::<Preferences>(storage, eframe::APP_KEY) {
                log::info!("Restoring preferences: {:?}", preferences);
                app.apply_preferences(&preferences);
            }
        }

        app
    }

    /// Build the app from `config`. An invalid config is replaced by the
    /// defaults, like a bad config file is.
    pub fn with_config(config: CanvasConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                log::warn!("Ignoring config: {}", err);
                CanvasConfig::default()
            }
        };

        Self {
            state: CanvasState::new(&config),
            input_mode: config.input_mode,
            tracker: PointerTracker::new(),
            interpreter: GestureInterpreter::new(config.gestures.clone()),
            detector: GestureDetector::new(config.gestures.clone()),
            show_color_picker: false,
            show_stroke_picker: false,
            config,
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn state(&self) -> &CanvasState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut CanvasState {
        &mut self.state
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    /// Switch input pipelines, dropping any gesture in flight
    pub fn set_input_mode(&mut self, mode: InputMode) {
        if mode == self.input_mode {
            return;
        }
        log::info!("Input mode: {}", mode.label());
        self.input_mode = mode;
        self.tracker = PointerTracker::new();
        self.interpreter = GestureInterpreter::new(self.config.gestures.clone());
        self.state.cancel_stroke();
    }

    pub fn show_color_picker(&self) -> bool {
        self.show_color_picker
    }

    pub fn toggle_color_picker(&mut self) {
        self.show_color_picker = !self.show_color_picker;
    }

    pub fn show_stroke_picker(&self) -> bool {
        self.show_stroke_picker
    }

    pub fn toggle_stroke_picker(&mut self) {
        self.show_stroke_picker = !self.show_stroke_picker;
    }

    pub fn preferences(&self) -> Preferences {
        let brush = self.state.brush();
        Preferences {
            color: brush.color(),
            stroke_width: brush.width(),
            input_mode: self.input_mode,
        }
    }

    pub fn apply_preferences(&mut self, preferences: &Preferences) {
        self.state.set_color(preferences.color);
        self.state.set_stroke_width(preferences.stroke_width);
        self.set_input_mode(preferences.input_mode);
    }

    /// Feed this frame's input on the canvas area to the active pipeline
    pub fn handle_canvas_input(&mut self, response: &Response, rect: Rect) -> GestureOutcome {
        match self.input_mode {
            InputMode::Pointer => {
                let changes = self
                    .tracker
                    .collect(&response.ctx, rect, response.layer_id);
                self.interpreter.handle(&changes, &mut self.state)
            }
            InputMode::Detector => {
                let frame = DetectorFrame::from_response(response, rect);
                self.detector.handle(&frame, &mut self.state)
            }
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let redo = KeyboardShortcut::new(Modifiers::COMMAND | Modifiers::SHIFT, Key::Z);
        let redo_alt = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);
        let undo = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);

        // The shift variant has to be consumed before plain Cmd+Z
        ctx.input_mut(|input| {
            if input.consume_shortcut(&redo) || input.consume_shortcut(&redo_alt) {
                self.state.redo();
            } else if input.consume_shortcut(&undo) {
                self.state.undo();
            }
        });
    }
}

impl eframe::App for CanvasApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.preferences());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        // Bottom panels stack upwards in the order they are added
        panels::toolbar(self, ctx);
        panels::color_picker(self, ctx);
        panels::stroke_picker(self, ctx);
        panels::canvas_panel(self, ctx);
    }
}
