//! Shape definitions and the per-shape geometry engine.

mod circle;
mod hexagon;
mod pentagon;
mod rectangle;
mod trapezoid;
mod triangle;

pub use circle::Circle;
pub use hexagon::Hexagon;
pub use pentagon::Pentagon;
pub use rectangle::Rectangle;
pub use trapezoid::Trapezoid;
pub use triangle::Triangle;

use crate::geometry::{self, Polygon};
use kurbo::{Point, Rect, Vec2};
use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// RGBA8 color stored per edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub const fn red() -> Self {
        Self::new(255, 0, 0, 255)
    }

    /// Build an opaque color from unit-range float components.
    ///
    /// Components are scaled by 255, truncated and clamped.
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        let channel = |c: f64| (c * 255.0).floor().clamp(0.0, 255.0) as u8;
        Self::new(channel(r), channel(g), channel(b), 255)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::white()
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Shape construction errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("{kind} expects {expected} thickness values, got {found}")]
    ThicknessCount {
        kind: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("invalid thickness {0}: must be finite and non-negative")]
    InvalidThickness(f64),
    #[error("invalid {name} {value}: must be finite and non-negative")]
    InvalidDimension { name: &'static str, value: f64 },
}

pub(crate) fn check_dimension(name: &'static str, value: f64) -> Result<(), ShapeError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ShapeError::InvalidDimension { name, value })
    }
}

fn valid_thickness(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Geometry contract shared by every shape variant.
pub trait ShapeGeometry {
    /// Lowercase name used in commands and logs.
    fn name(&self) -> &'static str;

    /// Number of independently styled edges.
    fn edge_count(&self) -> usize;

    /// Outline vertices around the local origin for the given scale.
    ///
    /// Depends only on the base parameters and `scale`.
    fn local_vertices(&self, scale: f64) -> Vec<Point>;

    /// Check the base parameters.
    fn validate(&self) -> Result<(), ShapeError>;
}

/// The closed set of shape variants with their base parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    Circle(Circle),
    Triangle(Triangle),
    Rectangle(Rectangle),
    Trapezoid(Trapezoid),
    Pentagon(Pentagon),
    Hexagon(Hexagon),
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle(s) => s.name(),
            ShapeKind::Triangle(s) => s.name(),
            ShapeKind::Rectangle(s) => s.name(),
            ShapeKind::Trapezoid(s) => s.name(),
            ShapeKind::Pentagon(s) => s.name(),
            ShapeKind::Hexagon(s) => s.name(),
        }
    }

    pub fn edge_count(&self) -> usize {
        match self {
            ShapeKind::Circle(s) => s.edge_count(),
            ShapeKind::Triangle(s) => s.edge_count(),
            ShapeKind::Rectangle(s) => s.edge_count(),
            ShapeKind::Trapezoid(s) => s.edge_count(),
            ShapeKind::Pentagon(s) => s.edge_count(),
            ShapeKind::Hexagon(s) => s.edge_count(),
        }
    }

    pub fn local_vertices(&self, scale: f64) -> Vec<Point> {
        match self {
            ShapeKind::Circle(s) => s.local_vertices(scale),
            ShapeKind::Triangle(s) => s.local_vertices(scale),
            ShapeKind::Rectangle(s) => s.local_vertices(scale),
            ShapeKind::Trapezoid(s) => s.local_vertices(scale),
            ShapeKind::Pentagon(s) => s.local_vertices(scale),
            ShapeKind::Hexagon(s) => s.local_vertices(scale),
        }
    }

    pub fn validate(&self) -> Result<(), ShapeError> {
        match self {
            ShapeKind::Circle(s) => s.validate(),
            ShapeKind::Triangle(s) => s.validate(),
            ShapeKind::Rectangle(s) => s.validate(),
            ShapeKind::Trapezoid(s) => s.validate(),
            ShapeKind::Pentagon(s) => s.validate(),
            ShapeKind::Hexagon(s) => s.validate(),
        }
    }

    pub fn is_circle(&self) -> bool {
        matches!(self, ShapeKind::Circle(_))
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for ShapeKind {
                fn from(shape: $variant) -> Self {
                    ShapeKind::$variant(shape)
                }
            }
        )*
    };
}

impl_from_variant!(Circle, Triangle, Rectangle, Trapezoid, Pentagon, Hexagon);

/// A placed shape: variant parameters plus position, scale, and per-edge stroke style.
///
/// `thicknesses` and `side_colors` always hold exactly `kind.edge_count()`
/// entries.
#[derive(Debug, Clone)]
pub struct Shape {
    id: ShapeId,
    kind: ShapeKind,
    position: Point,
    scale_factor: f64,
    thicknesses: Vec<f64>,
    side_colors: Vec<Rgba>,
}

impl Shape {
    /// Create a shape at the origin with every edge painted `color`.
    pub fn new(
        kind: impl Into<ShapeKind>,
        color: Rgba,
        thicknesses: Vec<f64>,
    ) -> Result<Self, ShapeError> {
        let kind = kind.into();
        kind.validate()?;

        let expected = kind.edge_count();
        if thicknesses.len() != expected {
            return Err(ShapeError::ThicknessCount {
                kind: kind.name(),
                expected,
                found: thicknesses.len(),
            });
        }
        if let Some(&bad) = thicknesses.iter().find(|t| !valid_thickness(**t)) {
            return Err(ShapeError::InvalidThickness(bad));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            kind,
            position: Point::ZERO,
            scale_factor: 1.0,
            side_colors: vec![color; expected],
            thicknesses,
        })
    }

    /// Builder-style position setter.
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Replace the id with a fresh one.
    pub(crate) fn assign_new_id(&mut self) {
        self.id = Uuid::new_v4();
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    pub fn edge_count(&self) -> usize {
        self.thicknesses.len()
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Translate the shape.
    pub fn move_by(&mut self, offset: Vec2) {
        self.position += offset;
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Set the absolute scale factor.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale_factor = scale;
    }

    /// Multiply the current scale factor.
    pub fn scale(&mut self, factor: f64) {
        self.scale_factor *= factor;
    }

    pub fn thicknesses(&self) -> &[f64] {
        &self.thicknesses
    }

    /// Set one edge's stroke width. Out-of-range indices and invalid widths are ignored.
    pub fn set_thickness(&mut self, index: usize, thickness: f64) {
        if !valid_thickness(thickness) {
            return;
        }
        if let Some(slot) = self.thicknesses.get_mut(index) {
            *slot = thickness;
        }
    }

    /// Widest stroke over all edges.
    pub fn max_thickness(&self) -> f64 {
        self.thicknesses.iter().copied().fold(0.0, f64::max)
    }

    pub fn side_colors(&self) -> &[Rgba] {
        &self.side_colors
    }

    /// Color of edge `index`, or white when out of range.
    pub fn side_color(&self, index: usize) -> Rgba {
        self.side_colors.get(index).copied().unwrap_or_default()
    }

    /// Recolor one edge. Out-of-range indices are ignored.
    pub fn set_side_color(&mut self, index: usize, color: Rgba) {
        if let Some(slot) = self.side_colors.get_mut(index) {
            *slot = color;
        }
    }

    /// Outline vertices around the local origin.
    pub fn local_vertices(&self) -> Vec<Point> {
        self.kind.local_vertices(self.scale_factor)
    }

    /// Outline vertices in world coordinates.
    pub fn global_vertices(&self) -> Vec<Point> {
        let offset = self.position.to_vec2();
        self.local_vertices()
            .into_iter()
            .map(|v| v + offset)
            .collect()
    }

    /// Thickness and color of the stroke along outline segment `segment`.
    ///
    /// A circle has one stroke style shared by all of its segments.
    fn segment_style(&self, segment: usize) -> (f64, Rgba) {
        let edge = if self.kind.is_circle() { 0 } else { segment };
        (self.thicknesses[edge], self.side_colors[edge])
    }

    /// Stroke geometry in paint order: edge quads first, then round joins.
    ///
    /// Zero-length edges are skipped.
    pub fn stroke_polygons(&self) -> Vec<Polygon> {
        let verts = self.global_vertices();
        let n = verts.len();
        let mut polygons = Vec::with_capacity(n * 2);

        for i in 0..n {
            let (thickness, color) = self.segment_style(i);
            let next = verts[(i + 1) % n];
            if let Some(quad) = geometry::stroke_segment(verts[i], next, thickness, color) {
                polygons.push(quad);
            }
        }

        for (i, &vertex) in verts.iter().enumerate() {
            let (incoming, _) = self.segment_style((i + n - 1) % n);
            let (outgoing, color) = self.segment_style(i);
            let radius = incoming.max(outgoing) / 2.0;
            if let Some(cap) = geometry::round_cap(vertex, radius, color) {
                polygons.push(cap);
            }
        }

        polygons
    }

    /// Axis-aligned box around the stroked shape, in world coordinates.
    pub fn bounds(&self) -> Rect {
        match &self.kind {
            ShapeKind::Circle(circle) => {
                let r = circle.scaled_radius(self.scale_factor);
                let t = self.thicknesses[0];
                Rect::from_origin_size(
                    (self.position.x - r - t / 2.0, self.position.y - r - t / 2.0),
                    (2.0 * r + t, 2.0 * r + t),
                )
            }
            _ => {
                let half = self.max_thickness() / 2.0;
                geometry::bounding_rect(&self.global_vertices())
                    .unwrap_or_else(|| Rect::from_points(self.position, self.position))
                    .inflate(half, half)
            }
        }
    }

    /// Hit test against the bounding box.
    ///
    /// Clicks inside the box but outside the painted stroke still count.
    /// Use [`Shape::outline_contains`] for exact containment.
    pub fn contains(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }

    /// Exact test against the filled outline polygon.
    pub fn outline_contains(&self, point: Point) -> bool {
        geometry::polygon_contains(&self.global_vertices(), point)
    }
}
