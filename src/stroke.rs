use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};

/// How the ends of an open stroke are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineCap {
    Butt,
    Round,
}

/// How consecutive segments of a stroke meet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineJoin {
    Miter,
    Round,
}

/// Cap and join settings shared by every stroke drawn with a brush
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub cap: LineCap,
    pub join: LineJoin,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            cap: LineCap::Round,
            join: LineJoin::Round,
        }
    }
}

/// A committed freehand line. Points are in canvas space.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color32,
    width: f32,
    style: StrokeStyle,
}

impl Stroke {
    pub fn new(points: Vec<Pos2>, color: Color32, width: f32, style: StrokeStyle) -> Self {
        Self {
            points,
            color,
            width,
            style,
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }
}

/// The path being drawn by the active gesture.
///
/// The first point is a move-to, every later point a line-to. The path is
/// empty until it holds at least one segment, so a tap without movement
/// never produces a stroke.
#[derive(Debug, Clone, Default)]
pub struct StrokeBuilder {
    points: Vec<Pos2>,
}

impl StrokeBuilder {
    /// Start a new path at `start`
    pub fn new(start: Pos2) -> Self {
        Self {
            points: vec![start],
        }
    }

    /// Append a line-to
    pub fn line_to(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.len() < 2
    }

    /// Freeze the path into a stroke, or `None` if it has no segments
    pub fn finish(self, color: Color32, width: f32, style: StrokeStyle) -> Option<Stroke> {
        if self.is_empty() {
            return None;
        }
        Some(Stroke::new(self.points, color, width, style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_point_is_empty() {
        let builder = StrokeBuilder::new(Pos2::new(1.0, 1.0));
        assert!(builder.is_empty());
        assert!(builder
            .finish(Color32::BLACK, 10.0, StrokeStyle::default())
            .is_none());
    }

    #[test]
    fn test_finish_keeps_points_in_order() {
        let mut builder = StrokeBuilder::new(Pos2::new(0.0, 0.0));
        builder.line_to(Pos2::new(5.0, 5.0));
        builder.line_to(Pos2::new(10.0, 0.0));
        assert!(!builder.is_empty());

        let stroke = builder
            .finish(Color32::RED, 12.0, StrokeStyle::default())
            .unwrap();
        assert_eq!(
            stroke.points(),
            &[Pos2::new(0.0, 0.0), Pos2::new(5.0, 5.0), Pos2::new(10.0, 0.0)]
        );
        assert_eq!(stroke.color(), Color32::RED);
        assert_eq!(stroke.width(), 12.0);
        assert_eq!(stroke.style().cap, LineCap::Round);
    }
}
