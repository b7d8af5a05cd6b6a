//! Editor state: figures in z-order, selection, dragging, and scaling.

use crate::command::{Command, CommandError};
use crate::geometry;
use crate::input::{MouseButton, PointerEvent};
use crate::render::Renderer;
use crate::shapes::{Rgba, Shape, ShapeId};
use kurbo::{Point, Vec2};
use std::ops::ControlFlow;
use std::sync::mpsc::Receiver;

/// Result of applying one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A figure was created and appended on top.
    Added(ShapeId),
    /// The user asked to close the application.
    Quit,
}

/// Owns the drawing and applies user interaction to it.
///
/// `figures` is kept in insertion order, which is also paint order: the last
/// figure is drawn on top and wins hit tests.
#[derive(Debug, Clone)]
pub struct Editor {
    figures: Vec<Shape>,
    selected: Option<ShapeId>,
    drag_offset: Vec2,
    dragging: bool,
    selection_color: Rgba,
    spawn_point: Point,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// Scale change per unit of wheel delta.
    pub const SCALE_STEP: f64 = 0.1;
    /// Exclusive lower bound for a figure's scale.
    pub const MIN_SCALE: f64 = 0.1;
    /// Exclusive upper bound for a figure's scale.
    pub const MAX_SCALE: f64 = 5.0;
    /// Line width of the selection box.
    pub const SELECTION_OUTLINE_WIDTH: f64 = 1.0;

    pub fn new() -> Self {
        Self {
            figures: Vec::new(),
            selected: None,
            drag_offset: Vec2::ZERO,
            dragging: false,
            selection_color: Rgba::red(),
            spawn_point: Point::new(600.0, 400.0),
        }
    }

    /// Set the color of the selection box.
    pub fn with_selection_color(mut self, color: Rgba) -> Self {
        self.selection_color = color;
        self
    }

    /// Where figures created from commands are placed.
    pub fn spawn_point(&self) -> Point {
        self.spawn_point
    }

    pub fn set_spawn_point(&mut self, point: Point) {
        self.spawn_point = point;
    }

    /// Append a figure on top of the others. The selection is unchanged.
    ///
    /// A figure whose id is already present (a clone) gets a fresh id, so
    /// every handle names exactly one figure.
    pub fn add_figure(&mut self, mut shape: Shape) -> ShapeId {
        if self.figure(shape.id()).is_some() {
            shape.assign_new_id();
        }
        let id = shape.id();
        log::info!(
            "Added {} at ({:.1}, {:.1})",
            shape.kind().name(),
            shape.position().x,
            shape.position().y
        );
        self.figures.push(shape);
        id
    }

    /// Remove the selected figure and clear the selection.
    ///
    /// Returns the removed figure, or `None` when nothing was selected.
    pub fn remove_selected(&mut self) -> Option<Shape> {
        let id = self.selected?;
        let index = self.index_of(id)?;
        let removed = self.figures.remove(index);
        self.selected = None;
        self.dragging = false;
        log::info!("Removed {}", removed.kind().name());
        Some(removed)
    }

    /// Figures in paint order (bottom to top).
    pub fn figures(&self) -> &[Shape] {
        &self.figures
    }

    pub fn len(&self) -> usize {
        self.figures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    pub fn figure(&self, id: ShapeId) -> Option<&Shape> {
        self.figures.iter().find(|s| s.id() == id)
    }

    pub fn figure_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.figures.iter_mut().find(|s| s.id() == id)
    }

    fn index_of(&self, id: ShapeId) -> Option<usize> {
        self.figures.iter().position(|s| s.id() == id)
    }

    pub fn selected_id(&self) -> Option<ShapeId> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Shape> {
        self.figure(self.selected?)
    }

    pub fn selected_mut(&mut self) -> Option<&mut Shape> {
        let id = self.selected?;
        self.figure_mut(id)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Topmost figure whose bounding box contains `point`.
    pub fn figure_at(&self, point: Point) -> Option<ShapeId> {
        self.figures
            .iter()
            .rev()
            .find(|s| s.contains(point))
            .map(Shape::id)
    }

    /// Apply a pointer event (selection on press, drag on move, release on up).
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down {
                position,
                button: MouseButton::Left,
            } => self.press(position),
            PointerEvent::Move { position } => self.drag_to(position),
            PointerEvent::Up {
                button: MouseButton::Left,
                ..
            } => {
                self.dragging = false;
            }
            PointerEvent::Down { .. } | PointerEvent::Up { .. } => {}
        }
    }

    fn press(&mut self, point: Point) {
        self.selected = self.figure_at(point);
        match self.selected().map(|s| (s.position(), s.kind().name(), s.id())) {
            Some((position, name, id)) => {
                self.drag_offset = position - point;
                self.dragging = true;
                log::debug!("Selected {name} {id}");
            }
            None => {
                self.dragging = false;
                log::debug!("Selection cleared");
            }
        }
    }

    fn drag_to(&mut self, point: Point) {
        if !self.dragging {
            return;
        }
        let offset = self.drag_offset;
        if let Some(shape) = self.selected_mut() {
            shape.set_position(point + offset);
        }
    }

    /// Scale the selected figure by `1 + delta * SCALE_STEP`.
    ///
    /// Results outside the open range (`MIN_SCALE`, `MAX_SCALE`) are
    /// ignored, not clamped.
    pub fn handle_scale(&mut self, delta: f64) {
        let Some(shape) = self.selected_mut() else {
            return;
        };
        let new_scale = shape.scale_factor() * (1.0 + delta * Self::SCALE_STEP);
        if new_scale > Self::MIN_SCALE && new_scale < Self::MAX_SCALE {
            shape.set_scale(new_scale);
        } else {
            log::debug!("Rejected scale {new_scale:.3}");
        }
    }

    /// Recolor one edge of the selected figure.
    pub fn set_selected_side_color(&mut self, index: usize, color: Rgba) {
        if let Some(shape) = self.selected_mut() {
            shape.set_side_color(index, color);
        }
    }

    /// Change one edge width of the selected figure.
    pub fn set_selected_thickness(&mut self, index: usize, thickness: f64) {
        if let Some(shape) = self.selected_mut() {
            shape.set_thickness(index, thickness);
        }
    }

    /// Paint every figure bottom to top, then the selection box.
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        for shape in &self.figures {
            for polygon in shape.stroke_polygons() {
                renderer.draw_polygon(&polygon);
            }
        }

        if let Some(shape) = self.selected() {
            for edge in geometry::rect_outline(
                shape.bounds(),
                Self::SELECTION_OUTLINE_WIDTH,
                self.selection_color,
            ) {
                renderer.draw_polygon(&edge);
            }
        }
    }

    /// Apply a parsed command. New figures are placed at the spawn point.
    pub fn apply_command(&mut self, command: Command) -> Result<CommandOutcome, CommandError> {
        match command {
            Command::Add(figure) => {
                let shape = figure.build()?.with_position(self.spawn_point);
                Ok(CommandOutcome::Added(self.add_figure(shape)))
            }
            Command::Quit => Ok(CommandOutcome::Quit),
        }
    }

    /// Parse and apply one console line.
    pub fn apply_line(&mut self, line: &str) -> Result<CommandOutcome, CommandError> {
        let command: Command = line.parse()?;
        self.apply_command(command)
    }

    /// Apply every pending console line without blocking.
    ///
    /// Stops early and returns `Break` when a `quit` command arrives.
    pub fn drain_commands(&mut self, commands: &Receiver<String>) -> ControlFlow<()> {
        while let Ok(line) = commands.try_recv() {
            match self.apply_line(&line) {
                Ok(CommandOutcome::Added(_)) => {}
                Ok(CommandOutcome::Quit) => {
                    log::info!("Quit requested");
                    return ControlFlow::Break(());
                }
                Err(e) => {
                    log::warn!("Invalid command '{}': {}", line.trim(), e);
                    log::info!("Examples:");
                    for example in crate::command::USAGE_EXAMPLES {
                        log::info!("  {example}");
                    }
                }
            }
        }
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingRenderer;
    use crate::shapes::{Circle, Rectangle, Triangle};
    use std::sync::mpsc::channel;

    fn rect_at(x: f64, y: f64) -> Shape {
        Shape::new(Rectangle::new(200.0, 150.0), Rgba::red(), vec![2.0; 4])
            .unwrap()
            .with_position(Point::new(x, y))
    }

    fn down(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Down {
            position: Point::new(x, y),
            button: MouseButton::Left,
        }
    }

    fn up(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Up {
            position: Point::new(x, y),
            button: MouseButton::Left,
        }
    }

    fn moved(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Move {
            position: Point::new(x, y),
        }
    }

    #[test]
    fn test_topmost_figure_wins() {
        let mut editor = Editor::new();
        let a = editor.add_figure(rect_at(100.0, 100.0));
        let b = editor.add_figure(rect_at(100.0, 100.0));
        assert_ne!(a, b);

        editor.handle_pointer_event(down(110.0, 110.0));
        assert_eq!(editor.selected_id(), Some(b));
        assert!(editor.is_dragging());
    }

    #[test]
    fn test_cloned_figure_gets_own_id() {
        let mut editor = Editor::new();
        let base = rect_at(0.0, 0.0);
        let bottom = editor.add_figure(base.clone());
        let top = editor.add_figure(base.with_position(Point::new(50.0, 0.0)));
        assert_ne!(bottom, top);

        // Drag the top figure in the overlap.
        editor.handle_pointer_event(down(60.0, 0.0));
        assert_eq!(editor.selected_id(), Some(top));
        editor.handle_pointer_event(moved(160.0, 0.0));
        editor.handle_pointer_event(up(160.0, 0.0));
        let xs: Vec<f64> = editor.figures().iter().map(|s| s.position().x).collect();
        assert_eq!(xs, vec![0.0, 150.0]);

        let removed = editor.remove_selected().unwrap();
        assert_eq!(removed.id(), top);
        let xs: Vec<f64> = editor.figures().iter().map(|s| s.position().x).collect();
        assert_eq!(xs, vec![0.0]);
    }

    #[test]
    fn test_click_on_empty_space_clears_selection() {
        let mut editor = Editor::new();
        editor.add_figure(rect_at(100.0, 100.0));
        editor.handle_pointer_event(down(100.0, 100.0));
        editor.handle_pointer_event(up(100.0, 100.0));
        assert!(editor.selected().is_some());

        editor.handle_pointer_event(down(900.0, 900.0));
        assert!(editor.selected().is_none());
        assert!(!editor.is_dragging());
    }

    #[test]
    fn test_drag_keeps_grab_offset() {
        let mut editor = Editor::new();
        let id = editor.add_figure(rect_at(100.0, 100.0));

        editor.handle_pointer_event(down(120.0, 90.0));
        editor.handle_pointer_event(moved(220.0, 190.0));
        let pos = editor.figure(id).unwrap().position();
        assert_eq!(pos, Point::new(200.0, 200.0));

        editor.handle_pointer_event(up(220.0, 190.0));
        assert!(!editor.is_dragging());
        // Selection survives the release.
        assert_eq!(editor.selected_id(), Some(id));

        // Moves after release do nothing.
        editor.handle_pointer_event(moved(500.0, 500.0));
        assert_eq!(editor.figure(id).unwrap().position(), Point::new(200.0, 200.0));
    }

    #[test]
    fn test_non_left_buttons_ignored() {
        let mut editor = Editor::new();
        editor.add_figure(rect_at(0.0, 0.0));
        editor.handle_pointer_event(PointerEvent::Down {
            position: Point::ZERO,
            button: MouseButton::Right,
        });
        assert!(editor.selected().is_none());
        assert!(!editor.is_dragging());
    }

    #[test]
    fn test_scale_within_range() {
        let mut editor = Editor::new();
        let id = editor.add_figure(rect_at(0.0, 0.0));
        editor.handle_pointer_event(down(0.0, 0.0));

        editor.handle_scale(1.0);
        assert!((editor.figure(id).unwrap().scale_factor() - 1.1).abs() < 1e-12);
        editor.handle_scale(-1.0);
        assert!((editor.figure(id).unwrap().scale_factor() - 0.99).abs() < 1e-12);
    }

    #[test]
    fn test_scale_out_of_range_rejected() {
        let mut editor = Editor::new();
        let id = editor.add_figure(rect_at(0.0, 0.0));
        editor.handle_pointer_event(down(0.0, 0.0));

        editor.handle_scale(-50.0);
        assert_eq!(editor.figure(id).unwrap().scale_factor(), 1.0);

        editor.handle_scale(45.0);
        assert_eq!(editor.figure(id).unwrap().scale_factor(), 1.0);

        editor.handle_scale(-9.5);
        assert_eq!(editor.figure(id).unwrap().scale_factor(), 1.0);
    }

    #[test]
    fn test_scale_applies_while_idle() {
        let mut editor = Editor::new();
        let id = editor.add_figure(rect_at(0.0, 0.0));
        editor.handle_pointer_event(down(0.0, 0.0));
        editor.handle_pointer_event(up(0.0, 0.0));
        editor.handle_scale(5.0);
        assert!((editor.figure(id).unwrap().scale_factor() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_scale_without_selection_is_noop() {
        let mut editor = Editor::new();
        let id = editor.add_figure(rect_at(0.0, 0.0));
        editor.handle_scale(2.0);
        assert_eq!(editor.figure(id).unwrap().scale_factor(), 1.0);
    }

    #[test]
    fn test_remove_selected() {
        let mut editor = Editor::new();
        let a = editor.add_figure(rect_at(0.0, 0.0));
        let b = editor.add_figure(rect_at(1000.0, 0.0));

        editor.handle_pointer_event(down(0.0, 0.0));
        let removed = editor.remove_selected().unwrap();
        assert_eq!(removed.id(), a);
        assert!(editor.selected().is_none());
        assert_eq!(editor.len(), 1);
        assert_eq!(editor.figures()[0].id(), b);
    }

    #[test]
    fn test_remove_without_selection_is_noop() {
        let mut editor = Editor::new();
        editor.add_figure(rect_at(0.0, 0.0));
        editor.add_figure(rect_at(50.0, 0.0));
        let before: Vec<_> = editor.figures().iter().map(Shape::id).collect();

        assert!(editor.remove_selected().is_none());
        let after: Vec<_> = editor.figures().iter().map(Shape::id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_add_keeps_selection() {
        let mut editor = Editor::new();
        let a = editor.add_figure(rect_at(0.0, 0.0));
        editor.handle_pointer_event(down(0.0, 0.0));
        editor.add_figure(rect_at(0.0, 0.0));
        assert_eq!(editor.selected_id(), Some(a));
    }

    #[test]
    fn test_edit_selected_edges() {
        let mut editor = Editor::new();
        let id = editor.add_figure(rect_at(0.0, 0.0));

        // Nothing selected yet.
        editor.set_selected_side_color(0, Rgba::black());
        assert_eq!(editor.figure(id).unwrap().side_color(0), Rgba::red());

        editor.handle_pointer_event(down(0.0, 0.0));
        editor.set_selected_side_color(0, Rgba::black());
        editor.set_selected_thickness(3, 6.0);
        let shape = editor.figure(id).unwrap();
        assert_eq!(shape.side_color(0), Rgba::black());
        assert_eq!(shape.thicknesses()[3], 6.0);
    }

    #[test]
    fn test_draw_order_and_overlay() {
        let mut editor = Editor::new();
        editor.add_figure(rect_at(0.0, 0.0));
        let tri = Shape::new(Triangle::new(50.0), Rgba::black(), vec![1.0; 3]).unwrap();
        editor.add_figure(tri);

        let mut renderer = RecordingRenderer::new();
        editor.draw(&mut renderer);
        // Rectangle: 4 quads + 4 joins, triangle: 3 quads + 3 joins.
        assert_eq!(renderer.polygons.len(), 14);
        assert!(renderer.polygons[..8].iter().all(|p| p.color == Rgba::red()));
        assert!(renderer.polygons[8..].iter().all(|p| p.color == Rgba::black()));

        // Selecting adds the four sides of the selection box.
        editor.handle_pointer_event(down(0.0, 0.0));
        renderer.clear();
        editor.draw(&mut renderer);
        assert_eq!(renderer.polygons.len(), 18);
    }

    #[test]
    fn test_draw_is_idempotent() {
        let mut editor = Editor::new().with_selection_color(Rgba::white());
        editor.add_figure(rect_at(10.0, 10.0));
        editor.add_figure(
            Shape::new(Circle::new(30.0), Rgba::black(), vec![3.0])
                .unwrap()
                .with_position(Point::new(40.0, 40.0)),
        );
        editor.handle_pointer_event(down(40.0, 40.0));

        let mut first = RecordingRenderer::new();
        let mut second = RecordingRenderer::new();
        editor.draw(&mut first);
        editor.draw(&mut second);
        assert_eq!(first, second);
        assert!(first.polygons.iter().any(|p| p.color == Rgba::white()));
    }

    #[test]
    fn test_apply_line_places_at_spawn_point() {
        let mut editor = Editor::new();
        editor.set_spawn_point(Point::new(320.0, 240.0));
        let outcome = editor.apply_line("add circle 60 1 1 0 3").unwrap();
        let CommandOutcome::Added(id) = outcome else {
            panic!("expected a new figure");
        };
        assert_eq!(editor.figure(id).unwrap().position(), Point::new(320.0, 240.0));
        assert_eq!(editor.apply_line("quit").unwrap(), CommandOutcome::Quit);
        assert!(editor.apply_line("add blob").is_err());
        assert_eq!(editor.len(), 1);
    }

    #[test]
    fn test_drain_commands() {
        let (tx, rx) = channel();
        tx.send("add rectangle 200 150 1 0 0 2 2 2 2".to_string()).unwrap();
        tx.send("nonsense".to_string()).unwrap();
        tx.send("add triangle 100 0 1 0 3 3 3".to_string()).unwrap();

        let mut editor = Editor::new();
        assert_eq!(editor.drain_commands(&rx), ControlFlow::Continue(()));
        assert_eq!(editor.len(), 2);

        tx.send("quit".to_string()).unwrap();
        tx.send("add circle 60 1 1 0 3".to_string()).unwrap();
        assert_eq!(editor.drain_commands(&rx), ControlFlow::Break(()));
        assert_eq!(editor.len(), 2);

        // Lines after quit stay queued.
        drop(tx);
        assert_eq!(editor.drain_commands(&rx), ControlFlow::Continue(()));
        assert_eq!(editor.len(), 3);
    }
}
