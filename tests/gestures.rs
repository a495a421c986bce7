use egui::Pos2;
use path_canvas::{CanvasState, GestureInterpreter, GestureOutcome, PointerChange};

fn single(previous: (f32, f32), position: (f32, f32), pressed: bool) -> Vec<PointerChange> {
    vec![PointerChange {
        id: 0,
        position: Pos2::new(position.0, position.1),
        previous_position: Pos2::new(previous.0, previous.1),
        pressed,
    }]
}

fn pinch(a: ((f32, f32), (f32, f32)), b: ((f32, f32), (f32, f32))) -> Vec<PointerChange> {
    vec![
        PointerChange {
            id: 0,
            previous_position: Pos2::new(a.0.0, a.0.1),
            position: Pos2::new(a.1.0, a.1.1),
            pressed: true,
        },
        PointerChange {
            id: 1,
            previous_position: Pos2::new(b.0.0, b.0.1),
            position: Pos2::new(b.1.0, b.1.1),
            pressed: true,
        },
    ]
}

#[test]
fn test_drag_path_becomes_stroke() {
    let mut interpreter = GestureInterpreter::default();
    let mut state = CanvasState::default();
    let path = [(10.0, 10.0), (12.0, 15.0), (20.0, 22.0), (31.0, 25.0)];

    let mut previous = path[0];
    for point in path {
        let outcome = interpreter.handle(&single(previous, point, true), &mut state);
        assert_eq!(outcome, GestureOutcome::Drawing);
        previous = point;
    }

    let outcome = interpreter.handle(&single(previous, previous, false), &mut state);
    assert_eq!(outcome, GestureOutcome::Committed);

    let expected: Vec<Pos2> = path.iter().map(|(x, y)| Pos2::new(*x, *y)).collect();
    assert_eq!(state.strokes().len(), 1);
    assert_eq!(state.strokes()[0].points(), expected.as_slice());
    assert!(state.in_progress().is_none());
}

#[test]
fn test_tap_commits_nothing() {
    let mut interpreter = GestureInterpreter::default();
    let mut state = CanvasState::default();

    interpreter.handle(&single((5.0, 5.0), (5.0, 5.0), true), &mut state);
    let outcome = interpreter.handle(&single((5.0, 5.0), (5.0, 5.0), false), &mut state);

    assert_eq!(outcome, GestureOutcome::Idle);
    assert!(state.strokes().is_empty());
}

#[test]
fn test_points_follow_view_transform() {
    let mut interpreter = GestureInterpreter::default();
    let mut state = CanvasState::default();
    state.view_mut().zoom_about(Pos2::ZERO, 2.0, &Default::default());

    interpreter.handle(&single((20.0, 20.0), (20.0, 20.0), true), &mut state);
    interpreter.handle(&single((20.0, 20.0), (40.0, 20.0), true), &mut state);
    interpreter.handle(&single((40.0, 20.0), (40.0, 20.0), false), &mut state);

    assert_eq!(
        state.strokes()[0].points(),
        &[Pos2::new(10.0, 10.0), Pos2::new(20.0, 10.0)]
    );
}

#[test]
fn test_zoom_is_clamped() {
    let mut interpreter = GestureInterpreter::default();
    let mut state = CanvasState::default();

    // Spread fingers ten times further apart, repeatedly
    for _ in 0..5 {
        interpreter.handle(
            &pinch(((95.0, 100.0), (50.0, 100.0)), ((105.0, 100.0), (150.0, 100.0))),
            &mut state,
        );
        assert!(state.view().scale() <= 5.0);
    }
    assert!((state.view().scale() - 5.0).abs() < 1e-4);

    // And pinch them back together
    for _ in 0..10 {
        interpreter.handle(
            &pinch(((50.0, 100.0), (95.0, 100.0)), ((150.0, 100.0), (105.0, 100.0))),
            &mut state,
        );
        assert!(state.view().scale() >= 0.5);
    }
    assert!((state.view().scale() - 0.5).abs() < 1e-4);
}

#[test]
fn test_pinch_keeps_focal_point_fixed() {
    let mut interpreter = GestureInterpreter::default();
    let mut state = CanvasState::default();
    let center = Pos2::new(100.0, 100.0);
    let anchored = state.view().screen_to_canvas(center);

    // Symmetric spread around the center: the first contact moves, so the
    // pan term shifts the result by its delta times the pan speed.
    interpreter.handle(
        &pinch(((90.0, 100.0), (80.0, 100.0)), ((110.0, 100.0), (120.0, 100.0))),
        &mut state,
    );

    assert!((state.view().scale() - 2.0).abs() < 1e-4);
    let screen = state.view().canvas_to_screen(anchored);
    assert!((screen.x - (center.x - 10.0 * 1.5)).abs() < 1e-3);
    assert!((screen.y - center.y).abs() < 1e-3);
}

#[test]
fn test_second_finger_cancels_stroke() {
    let mut interpreter = GestureInterpreter::default();
    let mut state = CanvasState::default();

    interpreter.handle(&single((0.0, 0.0), (0.0, 0.0), true), &mut state);
    interpreter.handle(&single((0.0, 0.0), (10.0, 0.0), true), &mut state);
    assert!(state.in_progress().is_some());

    let outcome = interpreter.handle(
        &pinch(((10.0, 0.0), (10.0, 0.0)), ((50.0, 0.0), (60.0, 0.0))),
        &mut state,
    );
    assert_eq!(outcome, GestureOutcome::Transformed);
    assert!(state.in_progress().is_none());
    assert!(!interpreter.is_drawing());
}

#[test]
fn test_lifting_one_finger_after_pinch_does_not_draw() {
    let mut interpreter = GestureInterpreter::default();
    let mut state = CanvasState::default();

    interpreter.handle(
        &pinch(((10.0, 10.0), (10.0, 10.0)), ((60.0, 10.0), (60.0, 10.0))),
        &mut state,
    );

    // Remaining finger keeps moving on its own
    let outcome = interpreter.handle(&single((60.0, 10.0), (70.0, 20.0), true), &mut state);
    assert_eq!(outcome, GestureOutcome::Idle);
    interpreter.handle(&single((70.0, 20.0), (80.0, 30.0), true), &mut state);
    interpreter.handle(&single((80.0, 30.0), (80.0, 30.0), false), &mut state);
    assert!(state.strokes().is_empty());

    // A fresh touch draws again
    interpreter.handle(&single((0.0, 0.0), (0.0, 0.0), true), &mut state);
    interpreter.handle(&single((0.0, 0.0), (5.0, 5.0), true), &mut state);
    let outcome = interpreter.handle(&single((5.0, 5.0), (5.0, 5.0), false), &mut state);
    assert_eq!(outcome, GestureOutcome::Committed);
    assert_eq!(state.strokes().len(), 1);
}

#[test]
fn test_empty_frame_is_idle() {
    let mut interpreter = GestureInterpreter::default();
    let mut state = CanvasState::default();
    assert_eq!(interpreter.handle(&[], &mut state), GestureOutcome::Idle);
}
