//! Equilateral triangle shape.

use super::{ShapeError, ShapeGeometry, check_dimension};
use crate::geometry::regular_polygon;
use kurbo::Point;
use std::f64::consts::FRAC_PI_2;

/// An equilateral triangle with its apex pointing up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Side length at scale 1.0.
    pub side: f64,
}

impl Triangle {
    pub fn new(side: f64) -> Self {
        Self { side }
    }

    /// Circumradius after applying `scale`.
    pub fn circumradius(&self, scale: f64) -> f64 {
        self.side / 3f64.sqrt() * scale
    }
}

impl ShapeGeometry for Triangle {
    fn name(&self) -> &'static str {
        "triangle"
    }

    fn edge_count(&self) -> usize {
        3
    }

    fn local_vertices(&self, scale: f64) -> Vec<Point> {
        regular_polygon(3, self.circumradius(scale), -FRAC_PI_2)
    }

    fn validate(&self) -> Result<(), ShapeError> {
        check_dimension("side", self.side)
    }
}
