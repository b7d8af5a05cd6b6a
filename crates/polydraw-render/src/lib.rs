//! PolyDraw Render Library
//!
//! Frame renderer abstraction and implementations for PolyDraw.
//! The default implementation uses Vello for GPU-accelerated rendering.

mod renderer;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use renderer::{RenderContext, RenderResult, RendererError, SceneRenderer};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloRenderer;
