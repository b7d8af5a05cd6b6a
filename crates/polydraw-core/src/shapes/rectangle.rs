//! Rectangle shape.

use super::{ShapeError, ShapeGeometry, check_dimension};
use kurbo::Point;

/// An axis-aligned rectangle centered on its position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    /// Width at scale 1.0.
    pub width: f64,
    /// Height at scale 1.0.
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl ShapeGeometry for Rectangle {
    fn name(&self) -> &'static str {
        "rectangle"
    }

    fn edge_count(&self) -> usize {
        4
    }

    /// Corners clockwise on screen, starting top-left.
    fn local_vertices(&self, scale: f64) -> Vec<Point> {
        let w = self.width * scale;
        let h = self.height * scale;
        vec![
            Point::new(-w / 2.0, -h / 2.0),
            Point::new(w / 2.0, -h / 2.0),
            Point::new(w / 2.0, h / 2.0),
            Point::new(-w / 2.0, h / 2.0),
        ]
    }

    fn validate(&self) -> Result<(), ShapeError> {
        check_dimension("width", self.width)?;
        check_dimension("height", self.height)
    }
}
