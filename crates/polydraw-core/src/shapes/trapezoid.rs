//! Isosceles trapezoid shape.

use super::{ShapeError, ShapeGeometry, check_dimension};
use kurbo::Point;

/// A trapezoid symmetric about the vertical axis.
///
/// The top base sits at `y = -h/2`, the bottom base at `y = +h/2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trapezoid {
    pub top_base: f64,
    pub bottom_base: f64,
    pub height: f64,
}

impl Trapezoid {
    pub fn new(top_base: f64, bottom_base: f64, height: f64) -> Self {
        Self {
            top_base,
            bottom_base,
            height,
        }
    }
}

impl ShapeGeometry for Trapezoid {
    fn name(&self) -> &'static str {
        "trapezoid"
    }

    fn edge_count(&self) -> usize {
        4
    }

    fn local_vertices(&self, scale: f64) -> Vec<Point> {
        let top = self.top_base * scale;
        let bottom = self.bottom_base * scale;
        let h = self.height * scale;
        vec![
            Point::new(-top / 2.0, -h / 2.0),
            Point::new(top / 2.0, -h / 2.0),
            Point::new(bottom / 2.0, h / 2.0),
            Point::new(-bottom / 2.0, h / 2.0),
        ]
    }

    fn validate(&self) -> Result<(), ShapeError> {
        check_dimension("top base", self.top_base)?;
        check_dimension("bottom base", self.bottom_base)?;
        check_dimension("height", self.height)
    }
}
