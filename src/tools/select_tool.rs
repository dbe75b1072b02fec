use crate::command::Command;
use crate::document::Document;
use crate::geometry::Point;
use crate::input::Hit;
use crate::tools::{Tool, ToolKind};

/// Press-to-select. Selection is model state, not shape content, so it is
/// set through the document primitive directly and is not undoable.
#[derive(Debug, Default)]
pub struct SelectTool;

impl SelectTool {
    pub fn new() -> Self {
        Self
    }
}

impl Tool for SelectTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Select
    }

    fn deactivate(&mut self, _doc: &mut Document) {
        // stateless
    }

    fn on_pointer_down(
        &mut self,
        _pos: Point,
        hit: Option<Hit>,
        doc: &mut Document,
    ) -> Option<Command> {
        let index = match hit {
            Some(Hit::Shape(i)) => Some(i),
            _ => None,
        };
        doc.select(index);
        None
    }
}
