use crate::command::Command;
use crate::document::Document;
use crate::geometry::Point;
use crate::input::Hit;
use crate::shape::{Handle, Shape};
use crate::tools::{Tool, ToolKind};
use log::debug;

/// State of a direct-manipulation drag on the selected shape.
#[derive(Debug, Clone)]
pub enum DragState {
    Idle,
    /// Whole-shape drag: every point moves by the pointer delta.
    DraggingShape {
        index: usize,
        origin: Point,
        original: Shape,
    },
    /// Handle drag: one vertex or control point follows the pointer.
    DraggingHandle {
        index: usize,
        handle: Handle,
        original: Shape,
    },
}

/// Drags the selected shape (or one of its handles) and collapses the
/// entire gesture into a single replace-shape command on release.
///
/// During the drag the document's shape is updated live through the
/// replace primitive so observers see every intermediate position, but
/// nothing reaches the history until the pointer is released.
pub struct MoveTool {
    state: DragState,
}

impl Default for MoveTool {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveTool {
    pub fn new() -> Self {
        Self { state: DragState::Idle }
    }

    pub fn drag_state(&self) -> &DragState {
        &self.state
    }
}

impl Tool for MoveTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Move
    }

    fn deactivate(&mut self, doc: &mut Document) {
        // Switching away mid-drag cancels the gesture: put the snapshot back.
        let state = std::mem::replace(&mut self.state, DragState::Idle);
        match state {
            DragState::DraggingShape { index, original, .. }
            | DragState::DraggingHandle { index, original, .. } => {
                doc.replace_shape(index, original);
            }
            DragState::Idle => {}
        }
    }

    fn on_pointer_down(
        &mut self,
        pos: Point,
        hit: Option<Hit>,
        doc: &mut Document,
    ) -> Option<Command> {
        let selected = doc.selection()?;
        let original = doc.selected_shape()?.clone();

        match hit {
            Some(Hit::Handle(handle)) => {
                self.state = DragState::DraggingHandle {
                    index: selected,
                    handle,
                    original,
                };
            }
            Some(Hit::Shape(i)) if i == selected => {
                self.state = DragState::DraggingShape {
                    index: selected,
                    origin: pos,
                    original,
                };
            }
            _ => {}
        }
        None
    }

    fn on_pointer_move(&mut self, pos: Point, doc: &mut Document) -> Option<Command> {
        match &self.state {
            DragState::DraggingShape {
                index,
                origin,
                original,
            } => {
                // Positional pairing with the snapshot: segment i moves to
                // original segment i plus the pointer delta.
                let moved = original.translated(pos.x - origin.x, pos.y - origin.y);
                doc.replace_shape(*index, moved);
            }
            DragState::DraggingHandle {
                index,
                handle,
                original,
            } => {
                let mut shape = original.clone();
                shape.set_point(handle.segment, handle.point, pos);
                doc.replace_shape(*index, shape);
            }
            DragState::Idle => {}
        }
        None
    }

    fn on_pointer_up(&mut self, _pos: Point, doc: &mut Document) -> Option<Command> {
        let state = std::mem::replace(&mut self.state, DragState::Idle);
        let (index, original) = match state {
            DragState::DraggingShape { index, original, .. }
            | DragState::DraggingHandle { index, original, .. } => (index, original),
            DragState::Idle => return None,
        };

        let live = doc.shapes().get(index)?.clone();
        if live == original {
            // A drag that went nowhere records nothing.
            return None;
        }
        debug!("drag finished on shape {index}");
        Some(Command::ReplaceShape {
            index,
            shape: live,
            prior: Some(original),
        })
    }
}
