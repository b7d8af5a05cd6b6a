//! Vello-based renderer implementation.

use crate::renderer::{RenderContext, SceneRenderer};
use kurbo::{Affine, BezPath, Point};
use peniko::{Color, Fill};
use polydraw_core::Renderer;
use vello::Scene;

/// Vello-based renderer for GPU-accelerated 2D graphics.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
    /// World to physical pixel transform for the current frame.
    transform: Affine,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    /// Create a new Vello renderer.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            transform: Affine::IDENTITY,
        }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }
}

fn polygon_path(vertices: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = vertices.iter();
    if let Some(first) = iter.next() {
        path.move_to(*first);
        for p in iter {
            path.line_to(*p);
        }
        path.close_path();
    }
    path
}

impl Renderer for VelloRenderer {
    fn fill_polygon(&mut self, vertices: &[Point], color: Color) {
        if vertices.len() < 3 {
            return;
        }
        let path = polygon_path(vertices);
        self.scene
            .fill(Fill::NonZero, self.transform, color, None, &path);
    }
}

impl SceneRenderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.scene.reset();
        self.transform = ctx.viewport.transform();
        ctx.editor.draw(self);
    }
}
