//! PolyDraw Core Library
//!
//! Platform-agnostic shape geometry, editor state and console command
//! parsing for the PolyDraw editor.

pub mod command;
pub mod editor;
pub mod geometry;
pub mod input;
pub mod render;
pub mod shapes;
pub mod viewport;

pub use command::{Command, CommandError, FigureSpec, ParseError, USAGE_EXAMPLES};
pub use editor::{CommandOutcome, Editor};
pub use geometry::Polygon;
pub use input::{MouseButton, PointerEvent};
pub use render::{RecordingRenderer, Renderer};
pub use shapes::{
    Circle, Hexagon, Pentagon, Rectangle, Rgba, Shape, ShapeError, ShapeGeometry, ShapeId,
    ShapeKind, Trapezoid, Triangle,
};
pub use viewport::Viewport;
