//! Renderer capability used by the editor's draw pass.

use crate::geometry::Polygon;
use crate::shapes::Rgba;
use kurbo::Point;
use peniko::Color;

/// A drawing backend that can fill simple polygons.
pub trait Renderer {
    /// Fill one simple polygon given its ordered vertices.
    fn fill_polygon(&mut self, vertices: &[Point], color: Color);

    /// Fill a prepared [`Polygon`].
    fn draw_polygon(&mut self, polygon: &Polygon) {
        self.fill_polygon(&polygon.vertices, polygon.color.into());
    }
}

/// A renderer that records every fill call.
///
/// Useful for headless runs and for asserting on draw output.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingRenderer {
    pub polygons: Vec<Polygon>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything recorded so far.
    pub fn clear(&mut self) {
        self.polygons.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn fill_polygon(&mut self, vertices: &[Point], color: Color) {
        self.polygons
            .push(Polygon::new(vertices.to_vec(), Rgba::from(color)));
    }
}
