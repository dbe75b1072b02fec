use super::Command;
use crate::document::Document;
use crate::event::{EditorEvent, EventBus, EventHandler};
use log::debug;

/// Manages the history of executed commands for undo/redo.
///
/// History is linear: executing a new command irrevocably discards the
/// redo stack. Commands undo in strict reverse-of-execution order and redo
/// in strict forward order.
pub struct CommandHistory {
    /// Stack of commands that can be undone.
    undo_stack: Vec<Command>,
    /// Stack of commands that can be redone.
    redo_stack: Vec<Command>,
    events: EventBus,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHistory {
    /// Creates a new empty command history.
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            events: EventBus::new(),
        }
    }

    /// Subscribe an observer to history changes.
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.events.subscribe(handler);
    }

    fn notify(&self) {
        self.events.emit(EditorEvent::HistoryChanged);
    }

    /// Executes a command against the document and records it.
    pub fn execute(&mut self, mut command: Command, doc: &mut Document) {
        debug!("execute {command:?}");
        command.execute(doc);
        self.undo_stack.push(command);
        self.redo_stack.clear();
        self.notify();
    }

    /// Undoes the most recently executed command.
    ///
    /// Returns `false` (a no-op) when there is nothing to undo.
    pub fn undo(&mut self, doc: &mut Document) -> bool {
        let Some(mut command) = self.undo_stack.pop() else {
            return false;
        };
        debug!("undo {command:?}");
        command.undo(doc);
        self.redo_stack.push(command);
        self.notify();
        true
    }

    /// Redoes the most recently undone command.
    ///
    /// Returns `false` (a no-op) when there is nothing to redo.
    pub fn redo(&mut self, doc: &mut Document) -> bool {
        let Some(mut command) = self.redo_stack.pop() else {
            return false;
        };
        debug!("redo {command:?}");
        command.execute(doc);
        self.undo_stack.push(command);
        self.notify();
        true
    }

    /// Returns true if there are commands that can be undone.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are commands that can be redone.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Empties both stacks (new document / load).
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.notify();
    }
}
