//! Stroke primitives and small polygon helpers.
//!
//! Everything here is pure: inputs in, polygons out. Shapes combine these
//! primitives into their stroke outlines.

use crate::shapes::Rgba;
use kurbo::{Point, Rect, Vec2};
use std::f64::consts::TAU;

/// Edges shorter than this are treated as degenerate and produce no stroke.
pub const DEGENERATE_LENGTH: f64 = 1e-9;

/// Number of vertices used to approximate a round cap.
pub const CAP_SEGMENTS: usize = 24;

/// A filled polygon ready for the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Ordered vertices in world coordinates.
    pub vertices: Vec<Point>,
    /// Fill color.
    pub color: Rgba,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>, color: Rgba) -> Self {
        Self { vertices, color }
    }

    /// Axis-aligned extent of the vertices.
    pub fn bounds(&self) -> Option<Rect> {
        bounding_rect(&self.vertices)
    }
}

/// Build the quad for a straight stroke from `a` to `b`.
///
/// The quad is centered on the segment: half the thickness lies on each
/// side. Returns `None` for a zero-length segment.
pub fn stroke_segment(a: Point, b: Point, thickness: f64, color: Rgba) -> Option<Polygon> {
    let dir = b - a;
    let len = dir.hypot();
    if len < DEGENERATE_LENGTH {
        return None;
    }
    let unit = dir / len;
    let normal = Vec2::new(-unit.y, unit.x);
    let offset = normal * (thickness / 2.0);

    Some(Polygon::new(
        vec![a - offset, a + offset, b + offset, b - offset],
        color,
    ))
}

/// Build a filled disc centered on `center`.
///
/// Returns `None` when the radius is zero or negative.
pub fn round_cap(center: Point, radius: f64, color: Rgba) -> Option<Polygon> {
    if radius <= DEGENERATE_LENGTH {
        return None;
    }
    let vertices = regular_polygon(CAP_SEGMENTS, radius, 0.0)
        .into_iter()
        .map(|v| center + v.to_vec2())
        .collect();
    Some(Polygon::new(vertices, color))
}

/// Vertices of a regular polygon centered on the origin.
///
/// Vertex `i` sits at angle `start_angle + i * 2π / sides`.
pub fn regular_polygon(sides: usize, radius: f64, start_angle: f64) -> Vec<Point> {
    (0..sides)
        .map(|i| {
            let angle = start_angle + i as f64 * TAU / sides as f64;
            Point::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// Tightest axis-aligned rectangle around a set of points.
pub fn bounding_rect(points: &[Point]) -> Option<Rect> {
    let first = points.first()?;
    let init = Rect::from_points(*first, *first);
    Some(points.iter().fold(init, |rect, p| rect.union_pt(*p)))
}

/// Four thin quads tracing the edges of `rect`.
pub fn rect_outline(rect: Rect, thickness: f64, color: Rgba) -> Vec<Polygon> {
    let corners = [
        Point::new(rect.x0, rect.y0),
        Point::new(rect.x1, rect.y0),
        Point::new(rect.x1, rect.y1),
        Point::new(rect.x0, rect.y1),
    ];
    (0..corners.len())
        .filter_map(|i| {
            let next = (i + 1) % corners.len();
            stroke_segment(corners[i], corners[next], thickness, color)
        })
        .collect()
}

/// Even-odd point-in-polygon test.
pub fn polygon_contains(vertices: &[Point], point: Point) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (a, b) = (vertices[i], vertices[j]);
        if (a.y > point.y) != (b.y > point.y) {
            let x_cross = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_stroke_segment_horizontal() {
        let quad = stroke_segment(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            4.0,
            Rgba::white(),
        )
        .unwrap();
        let expected = [
            Point::new(0.0, -2.0),
            Point::new(0.0, 2.0),
            Point::new(10.0, 2.0),
            Point::new(10.0, -2.0),
        ];
        assert_eq!(quad.vertices.len(), 4);
        for (got, want) in quad.vertices.iter().zip(expected) {
            assert!((got.x - want.x).abs() < EPS);
            assert!((got.y - want.y).abs() < EPS);
        }
    }

    #[test]
    fn test_stroke_segment_degenerate() {
        let p = Point::new(3.0, 3.0);
        assert!(stroke_segment(p, p, 2.0, Rgba::black()).is_none());
    }

    #[test]
    fn test_round_cap_radius() {
        let cap = round_cap(Point::new(5.0, -5.0), 3.0, Rgba::black()).unwrap();
        assert_eq!(cap.vertices.len(), CAP_SEGMENTS);
        for v in &cap.vertices {
            let d = ((v.x - 5.0).powi(2) + (v.y + 5.0).powi(2)).sqrt();
            assert!((d - 3.0).abs() < EPS);
        }
        assert!(round_cap(Point::ZERO, 0.0, Rgba::black()).is_none());
    }

    #[test]
    fn test_bounding_rect() {
        let pts = [
            Point::new(1.0, 5.0),
            Point::new(-2.0, 3.0),
            Point::new(4.0, -1.0),
        ];
        let rect = bounding_rect(&pts).unwrap();
        assert_eq!(rect, Rect::new(-2.0, -1.0, 4.0, 5.0));
        assert!(bounding_rect(&[]).is_none());
    }

    #[test]
    fn test_rect_outline_has_four_sides() {
        let quads = rect_outline(Rect::new(0.0, 0.0, 10.0, 5.0), 1.0, Rgba::black());
        assert_eq!(quads.len(), 4);
    }

    #[test]
    fn test_polygon_contains() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        assert!(polygon_contains(&square, Point::new(5.0, 5.0)));
        assert!(!polygon_contains(&square, Point::new(15.0, 5.0)));
        assert!(!polygon_contains(&square[..2], Point::new(5.0, 0.0)));
    }
}
