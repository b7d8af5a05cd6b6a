//! Pentagon shape.

use super::{ShapeError, ShapeGeometry, check_dimension};
use crate::geometry::regular_polygon;
use kurbo::Point;
use std::f64::consts::FRAC_PI_2;

/// A regular pentagon with its first vertex pointing up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pentagon {
    /// Circumradius at scale 1.0.
    pub radius: f64,
}

impl Pentagon {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl ShapeGeometry for Pentagon {
    fn name(&self) -> &'static str {
        "pentagon"
    }

    fn edge_count(&self) -> usize {
        5
    }

    fn local_vertices(&self, scale: f64) -> Vec<Point> {
        regular_polygon(5, self.radius * scale, -FRAC_PI_2)
    }

    fn validate(&self) -> Result<(), ShapeError> {
        check_dimension("radius", self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pentagon_first_vertex_up() {
        let v = Pentagon::new(70.0).local_vertices(1.0);
        assert_eq!(v.len(), 5);
        assert!(v[0].x.abs() < 1e-9);
        assert!((v[0].y + 70.0).abs() < 1e-9);
    }
}
