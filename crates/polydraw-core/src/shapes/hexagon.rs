//! Hexagon shape.

use super::{ShapeError, ShapeGeometry, check_dimension};
use crate::geometry::regular_polygon;
use kurbo::Point;
use std::f64::consts::FRAC_PI_2;

/// A regular hexagon with its first vertex pointing up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hexagon {
    /// Circumradius at scale 1.0.
    pub radius: f64,
}

impl Hexagon {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl ShapeGeometry for Hexagon {
    fn name(&self) -> &'static str {
        "hexagon"
    }

    fn edge_count(&self) -> usize {
        6
    }

    fn local_vertices(&self, scale: f64) -> Vec<Point> {
        regular_polygon(6, self.radius * scale, -FRAC_PI_2)
    }

    fn validate(&self) -> Result<(), ShapeError> {
        check_dimension("radius", self.radius)
    }
}
