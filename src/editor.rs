use crate::command::{Command, CommandHistory};
use crate::document::Document;
use crate::event::{EditorEvent, EventBus, EventHandler};
use crate::format::{ParseError, parse, serialize};
use crate::input::InputEvent;
use crate::tools::{DrawSession, Tool, ToolKind, ToolType};
use log::{info, warn};

/// One editing session: the document, its undo history, and the active
/// tool, glued together behind the input surface.
///
/// All operations are synchronous and run to completion before the next
/// event is processed. A hosting environment with several independent
/// views (windows, tabs) gives each its own `Editor`.
pub struct Editor {
    document: Document,
    history: CommandHistory,
    tool: ToolType,
    events: EventBus,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    pub fn new() -> Self {
        Self {
            document: Document::new(),
            history: CommandHistory::new(),
            tool: ToolType::new(ToolKind::Select),
            events: EventBus::new(),
        }
    }

    /// Read-only access to the document for rendering and hit-testing.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The in-progress draw session, if the draw tool has one open.
    pub fn draw_session(&self) -> Option<&DrawSession> {
        self.tool.as_draw_tool().and_then(|tool| tool.session())
    }

    pub fn tool_kind(&self) -> ToolKind {
        self.tool.kind()
    }

    /// Subscribe to document (shape/selection) changes.
    pub fn subscribe_document(&self, handler: Box<dyn EventHandler>) {
        self.document.subscribe(handler);
    }

    /// Subscribe to undo/redo stack changes.
    pub fn subscribe_history(&self, handler: Box<dyn EventHandler>) {
        self.history.subscribe(handler);
    }

    /// Subscribe to tool changes.
    pub fn subscribe_tool(&self, handler: Box<dyn EventHandler>) {
        self.events.subscribe(handler);
    }

    /// Switches the active tool, cancelling any in-progress operation.
    pub fn set_tool(&mut self, kind: ToolKind) {
        self.tool.deactivate(&mut self.document);
        self.tool = ToolType::new(kind);
        self.tool.activate();
        info!("tool changed to {}", kind.name());
        self.events.emit(EditorEvent::ToolChanged(kind));
    }

    /// Discards whatever gesture or session the active tool has open.
    pub fn cancel_current_operation(&mut self) {
        self.tool.deactivate(&mut self.document);
        self.tool.activate();
    }

    /// Routes an input event to the active tool and executes any command
    /// it produces through the history engine — the only path by which
    /// input ends up changing recorded shape content.
    pub fn handle_input(&mut self, event: InputEvent) {
        let command = match event {
            InputEvent::PointerPressed { pos, hit } => {
                self.tool.on_pointer_down(pos, hit, &mut self.document)
            }
            InputEvent::PointerMoved { pos } => self.tool.on_pointer_move(pos, &mut self.document),
            InputEvent::PointerReleased { pos } => self.tool.on_pointer_up(pos, &mut self.document),
            InputEvent::PointerClicked { pos } => {
                self.tool.on_pointer_click(pos, &mut self.document)
            }
            InputEvent::Key(key) => self.tool.on_key(key, &mut self.document),
        };

        if let Some(command) = command {
            self.history.execute(command, &mut self.document);
        }
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.document)
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.document)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Deletes the selected shape as one undoable step. Returns `false`
    /// when nothing is selected.
    pub fn delete_selected(&mut self) -> bool {
        let Some(index) = self.document.selection() else {
            return false;
        };
        self.history
            .execute(Command::delete_shape(index), &mut self.document);
        true
    }

    /// Starts an empty document and forgets the old one's history.
    pub fn new_document(&mut self) {
        self.cancel_current_operation();
        self.document.replace_all(Vec::new());
        self.history.clear();
    }

    /// Replaces the document with the parsed content of `text` as one
    /// atomic model operation and clears history. A failed parse leaves
    /// the document untouched.
    pub fn load_text(&mut self, text: &str) -> Result<(), ParseError> {
        let shapes = parse(text).inspect_err(|err| warn!("load failed: {err}"))?;
        self.cancel_current_operation();
        info!("loaded {} shape(s)", shapes.len());
        self.document.replace_all(shapes);
        self.history.clear();
        Ok(())
    }

    /// The document's text representation, for saving or a text panel.
    pub fn save_text(&self) -> String {
        serialize(self.document.shapes())
    }
}
