use crate::command::Command;
use crate::document::Document;
use crate::geometry::Point;
use crate::input::{EditKey, Hit};

/// Names the available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Select,
    Draw,
    Move,
}

impl ToolKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Select => "Select",
            Self::Draw => "Draw",
            Self::Move => "Move",
        }
    }
}

/// Interface all editing tools implement.
///
/// Handlers receive document-space positions and may return a [`Command`];
/// the editor executes returned commands through the history engine, which
/// is the only path that records an undoable change. Tools that manipulate
/// a live shape mid-gesture do so through the document primitives and
/// collapse the whole gesture into one command on completion.
pub trait Tool {
    /// The tool this implementation provides.
    fn kind(&self) -> ToolKind;

    /// Called when the tool becomes active.
    fn activate(&mut self) {
        // default: do nothing
    }

    /// Called when the tool is switched away; discards any in-progress
    /// gesture without producing a command.
    fn deactivate(&mut self, doc: &mut Document);

    /// Pointer press, with the UI layer's hit-test verdict.
    fn on_pointer_down(
        &mut self,
        _pos: Point,
        _hit: Option<Hit>,
        _doc: &mut Document,
    ) -> Option<Command> {
        None
    }

    /// Pointer movement, pressed or not.
    fn on_pointer_move(&mut self, _pos: Point, _doc: &mut Document) -> Option<Command> {
        None
    }

    /// Pointer release.
    fn on_pointer_up(&mut self, _pos: Point, _doc: &mut Document) -> Option<Command> {
        None
    }

    /// A click, as resolved by the UI layer.
    fn on_pointer_click(&mut self, _pos: Point, _doc: &mut Document) -> Option<Command> {
        None
    }

    /// One of the named editing keys.
    fn on_key(&mut self, _key: EditKey, _doc: &mut Document) -> Option<Command> {
        None
    }
}

mod select_tool;
pub use select_tool::SelectTool;

mod draw_tool;
pub use draw_tool::{Awaiting, DrawSession, DrawTool, PreviewLine};

mod move_tool;
pub use move_tool::{DragState, MoveTool};

/// The closed set of tools, dispatched without trait objects.
pub enum ToolType {
    Select(SelectTool),
    Draw(DrawTool),
    Move(MoveTool),
}

impl ToolType {
    pub fn new(kind: ToolKind) -> Self {
        match kind {
            ToolKind::Select => Self::Select(SelectTool::new()),
            ToolKind::Draw => Self::Draw(DrawTool::new()),
            ToolKind::Move => Self::Move(MoveTool::new()),
        }
    }

    pub fn as_draw_tool(&self) -> Option<&DrawTool> {
        match self {
            Self::Draw(tool) => Some(tool),
            _ => None,
        }
    }
}

impl Tool for ToolType {
    fn kind(&self) -> ToolKind {
        match self {
            Self::Select(tool) => tool.kind(),
            Self::Draw(tool) => tool.kind(),
            Self::Move(tool) => tool.kind(),
        }
    }

    fn activate(&mut self) {
        match self {
            Self::Select(tool) => tool.activate(),
            Self::Draw(tool) => tool.activate(),
            Self::Move(tool) => tool.activate(),
        }
    }

    fn deactivate(&mut self, doc: &mut Document) {
        match self {
            Self::Select(tool) => tool.deactivate(doc),
            Self::Draw(tool) => tool.deactivate(doc),
            Self::Move(tool) => tool.deactivate(doc),
        }
    }

    fn on_pointer_down(
        &mut self,
        pos: Point,
        hit: Option<Hit>,
        doc: &mut Document,
    ) -> Option<Command> {
        match self {
            Self::Select(tool) => tool.on_pointer_down(pos, hit, doc),
            Self::Draw(tool) => tool.on_pointer_down(pos, hit, doc),
            Self::Move(tool) => tool.on_pointer_down(pos, hit, doc),
        }
    }

    fn on_pointer_move(&mut self, pos: Point, doc: &mut Document) -> Option<Command> {
        match self {
            Self::Select(tool) => tool.on_pointer_move(pos, doc),
            Self::Draw(tool) => tool.on_pointer_move(pos, doc),
            Self::Move(tool) => tool.on_pointer_move(pos, doc),
        }
    }

    fn on_pointer_up(&mut self, pos: Point, doc: &mut Document) -> Option<Command> {
        match self {
            Self::Select(tool) => tool.on_pointer_up(pos, doc),
            Self::Draw(tool) => tool.on_pointer_up(pos, doc),
            Self::Move(tool) => tool.on_pointer_up(pos, doc),
        }
    }

    fn on_pointer_click(&mut self, pos: Point, doc: &mut Document) -> Option<Command> {
        match self {
            Self::Select(tool) => tool.on_pointer_click(pos, doc),
            Self::Draw(tool) => tool.on_pointer_click(pos, doc),
            Self::Move(tool) => tool.on_pointer_click(pos, doc),
        }
    }

    fn on_key(&mut self, key: EditKey, doc: &mut Document) -> Option<Command> {
        match self {
            Self::Select(tool) => tool.on_key(key, doc),
            Self::Draw(tool) => tool.on_key(key, doc),
            Self::Move(tool) => tool.on_key(key, doc),
        }
    }
}
