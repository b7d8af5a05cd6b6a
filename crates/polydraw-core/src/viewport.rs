//! Mapping between device pixels and world coordinates.

use kurbo::{Affine, Point, Size};

/// Window viewport: physical size and HiDPI scale factor.
///
/// World units are logical pixels, so a drawing keeps its apparent size
/// across displays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Size in physical pixels.
    pub size: Size,
    /// Device pixel ratio.
    pub scale_factor: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            size: Size::new(1200.0, 800.0),
            scale_factor: 1.0,
        }
    }
}

impl Viewport {
    pub fn new(size: Size, scale_factor: f64) -> Self {
        Self { size, scale_factor }
    }

    /// World-to-screen transform for rendering.
    pub fn transform(&self) -> Affine {
        Affine::scale(self.scale_factor)
    }

    /// Convert a physical-pixel point to world coordinates.
    pub fn screen_to_world(&self, screen_point: Point) -> Point {
        self.transform().inverse() * screen_point
    }

    /// Convert a world point to physical pixels.
    pub fn world_to_screen(&self, world_point: Point) -> Point {
        self.transform() * world_point
    }

    /// Center of the viewport in world coordinates.
    pub fn center(&self) -> Point {
        self.screen_to_world(Point::new(self.size.width / 2.0, self.size.height / 2.0))
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.size = Size::new(width, height);
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        if scale_factor > 0.0 {
            self.scale_factor = scale_factor;
        }
    }
}
