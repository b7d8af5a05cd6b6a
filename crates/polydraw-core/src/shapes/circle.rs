//! Circle shape.

use super::{ShapeError, ShapeGeometry, check_dimension};
use crate::geometry::regular_polygon;
use kurbo::Point;

/// A circle, stroked as a closed polyline of [`Circle::SEGMENTS`] segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Radius at scale 1.0.
    pub radius: f64,
}

impl Circle {
    /// Number of straight segments approximating the circumference.
    pub const SEGMENTS: usize = 30;

    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Radius after applying `scale`.
    pub fn scaled_radius(&self, scale: f64) -> f64 {
        self.radius * scale
    }
}

impl ShapeGeometry for Circle {
    fn name(&self) -> &'static str {
        "circle"
    }

    /// A circle carries a single stroke for its whole circumference.
    fn edge_count(&self) -> usize {
        1
    }

    fn local_vertices(&self, scale: f64) -> Vec<Point> {
        regular_polygon(Self::SEGMENTS, self.scaled_radius(scale), 0.0)
    }

    fn validate(&self) -> Result<(), ShapeError> {
        check_dimension("radius", self.radius)
    }
}
