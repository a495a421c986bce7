use egui::{Pos2, Rect, Response, Vec2};

use super::gestures::{apply_transform, GestureConfig, GestureOutcome};
use crate::state::CanvasState;

/// Phase of a single-pointer drag reported by the toolkit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragPhase {
    Started(Pos2),
    Moved(Pos2),
    Stopped,
}

/// Pinch/pan reported by the toolkit for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformDelta {
    pub centroid: Pos2,
    pub pan: Vec2,
    pub zoom: f32,
}

impl TransformDelta {
    fn is_noop(&self) -> bool {
        self.pan == Vec2::ZERO && self.zoom == 1.0
    }
}

/// High-level gesture callbacks collected for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DetectorFrame {
    pub drag: Option<DragPhase>,
    pub transform: Option<TransformDelta>,
    /// Number of touches currently down, zero for mouse input
    pub touches: usize,
}

impl DetectorFrame {
    /// Read drag and transform callbacks from egui for the canvas `response`
    pub fn from_response(response: &Response, rect: Rect) -> Self {
        let to_local = |pos: Pos2| (pos - rect.min).to_pos2();
        let pointer = response.interact_pointer_pos().map(to_local);

        let drag = if response.drag_started() {
            pointer.map(DragPhase::Started)
        } else if response.drag_stopped() {
            Some(DragPhase::Stopped)
        } else if response.dragged() {
            pointer.map(DragPhase::Moved)
        } else {
            None
        };

        let (transform, touches) = response.ctx.input(|input| {
            let multi_touch = input.multi_touch();
            let touches = multi_touch.as_ref().map_or(0, |touch| touch.num_touches);
            let zoom = input.zoom_delta();
            let pan = multi_touch
                .as_ref()
                .map_or(Vec2::ZERO, |touch| touch.translation_delta);
            let centroid = multi_touch
                .as_ref()
                .map(|touch| touch.center_pos)
                .or(input.pointer.hover_pos())
                .map(to_local);

            let transform = centroid
                .map(|centroid| TransformDelta { centroid, pan, zoom })
                .filter(|delta| !delta.is_noop());
            (transform, touches)
        });

        Self {
            drag,
            transform,
            touches,
        }
    }
}

/// Drawing and pan/zoom driven by toolkit gesture callbacks
#[derive(Debug, Default)]
pub struct GestureDetector {
    config: GestureConfig,
}

impl GestureDetector {
    pub fn new(config: GestureConfig) -> Self {
        Self { config }
    }

    pub fn handle(&mut self, frame: &DetectorFrame, state: &mut CanvasState) -> GestureOutcome {
        if let Some(delta) = frame.transform {
            apply_transform(state, &self.config, delta.centroid, delta.zoom, delta.pan);
            return GestureOutcome::Transformed;
        }

        if frame.touches >= 2 {
            state.cancel_stroke();
            return GestureOutcome::Idle;
        }

        match frame.drag {
            Some(DragPhase::Started(pos)) => {
                state.begin_stroke(pos);
                GestureOutcome::Drawing
            }
            Some(DragPhase::Moved(pos)) => {
                if state.in_progress().is_none() {
                    return GestureOutcome::Idle;
                }
                state.extend_stroke(pos);
                GestureOutcome::Drawing
            }
            Some(DragPhase::Stopped) => {
                if state.commit_stroke() {
                    GestureOutcome::Committed
                } else {
                    GestureOutcome::Idle
                }
            }
            None => GestureOutcome::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Event, RawInput, TouchDeviceId, TouchId, TouchPhase};

    fn touch(id: u64, phase: TouchPhase, x: f32, y: f32) -> Event {
        Event::Touch {
            device_id: TouchDeviceId(0),
            id: TouchId(id),
            phase,
            pos: Pos2::new(x, y),
            force: None,
        }
    }

    /// Run one headless frame with a full-screen canvas and read its callbacks
    fn run_frame(ctx: &egui::Context, events: Vec<Event>) -> (DetectorFrame, Rect) {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, egui::vec2(800.0, 600.0))),
            events,
            ..Default::default()
        };

        let mut captured = None;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let (response, _painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::drag());
                let rect = response.rect;
                // Later passes of the same frame no longer see this frame's events
                if captured.is_none() {
                    captured = Some((DetectorFrame::from_response(&response, rect), rect));
                }
            });
        });
        captured.expect("canvas was laid out")
    }

    #[test]
    fn test_idle_frame_reports_nothing() {
        let ctx = egui::Context::default();
        let (frame, _) = run_frame(&ctx, Vec::new());
        assert_eq!(frame, DetectorFrame::default());
    }

    #[test]
    fn test_pinch_centroid_follows_fingers() {
        let ctx = egui::Context::default();
        run_frame(
            &ctx,
            vec![
                touch(1, TouchPhase::Start, 100.0, 100.0),
                touch(2, TouchPhase::Start, 200.0, 100.0),
            ],
        );
        let (frame, rect) = run_frame(
            &ctx,
            vec![
                touch(1, TouchPhase::Move, 300.0, 100.0),
                touch(2, TouchPhase::Move, 500.0, 100.0),
            ],
        );

        assert_eq!(frame.touches, 2);
        let delta = frame.transform.expect("pinch should produce a transform");
        let expected = (Pos2::new(400.0, 100.0) - rect.min).to_pos2();
        assert!((delta.centroid.x - expected.x).abs() < 1e-3);
        assert!((delta.centroid.y - expected.y).abs() < 1e-3);
        assert!((delta.zoom - 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_drag_draws_and_commits() {
        let mut detector = GestureDetector::default();
        let mut state = CanvasState::default();

        let frames = [
            DragPhase::Started(Pos2::new(0.0, 0.0)),
            DragPhase::Moved(Pos2::new(4.0, 0.0)),
            DragPhase::Moved(Pos2::new(8.0, 3.0)),
        ];
        for phase in frames {
            let frame = DetectorFrame {
                drag: Some(phase),
                ..Default::default()
            };
            assert_eq!(detector.handle(&frame, &mut state), GestureOutcome::Drawing);
        }

        let stop = DetectorFrame {
            drag: Some(DragPhase::Stopped),
            ..Default::default()
        };
        assert_eq!(detector.handle(&stop, &mut state), GestureOutcome::Committed);
        assert_eq!(
            state.strokes()[0].points(),
            &[Pos2::new(0.0, 0.0), Pos2::new(4.0, 0.0), Pos2::new(8.0, 3.0)]
        );
    }

    #[test]
    fn test_transform_cancels_stroke_and_clamps() {
        let mut detector = GestureDetector::default();
        let mut state = CanvasState::default();
        state.begin_stroke(Pos2::new(1.0, 1.0));

        let frame = DetectorFrame {
            drag: Some(DragPhase::Moved(Pos2::new(2.0, 2.0))),
            transform: Some(TransformDelta {
                centroid: Pos2::new(50.0, 50.0),
                pan: Vec2::ZERO,
                zoom: 100.0,
            }),
            touches: 2,
        };

        assert_eq!(detector.handle(&frame, &mut state), GestureOutcome::Transformed);
        assert!(state.in_progress().is_none());
        assert_eq!(state.view().scale(), 5.0);

        // The drag that follows a pinch does not resume the dropped stroke
        let moved = DetectorFrame {
            drag: Some(DragPhase::Moved(Pos2::new(3.0, 3.0))),
            ..Default::default()
        };
        assert_eq!(detector.handle(&moved, &mut state), GestureOutcome::Idle);
    }
}
