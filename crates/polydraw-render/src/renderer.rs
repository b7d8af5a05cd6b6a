//! Frame-level renderer abstraction.

use peniko::Color;
use polydraw_core::{Editor, Viewport};
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Surface error: {0}")]
    Surface(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The editor whose figures are drawn.
    pub editor: &'a Editor,
    /// Window size and HiDPI scale.
    pub viewport: &'a Viewport,
    /// Clear color behind every figure.
    pub background_color: Color,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context with a dark gray background.
    pub fn new(editor: &'a Editor, viewport: &'a Viewport) -> Self {
        Self {
            editor,
            viewport,
            background_color: Color::from_rgba8(50, 50, 50, 255),
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }
}

/// A backend that turns the editor state into one frame.
pub trait SceneRenderer {
    /// Build the drawing commands for a frame.
    ///
    /// Called once per frame; previous content is discarded.
    fn build_scene(&mut self, ctx: &RenderContext);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}
