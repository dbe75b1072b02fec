use crate::tools::ToolKind;
use std::cell::RefCell;

/// Notifications published by the core so collaborators (renderers, status
/// bars, text panels) can refresh without polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    /// The document's shapes or selection changed.
    DocumentChanged,
    /// The undo/redo stacks changed.
    HistoryChanged,
    /// The active tool changed.
    ToolChanged(ToolKind),
}

/// A registered observer. Handlers are invoked synchronously, in
/// registration order, after the state change is complete; they must not
/// re-enter a mutation in progress.
pub trait EventHandler {
    fn handle_event(&mut self, event: &EditorEvent);
}

// Closures are the common case for observers.
impl<F: FnMut(&EditorEvent)> EventHandler for F {
    fn handle_event(&mut self, event: &EditorEvent) {
        self(event)
    }
}

/// A simple event bus broadcasting editor events to registered handlers.
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.borrow().len()))
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// Creates a new event bus with no handlers.
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe a handler to receive events.
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    /// Emit an event to all registered handlers.
    pub fn emit(&self, event: EditorEvent) {
        for handler in &mut *self.handlers.borrow_mut() {
            handler.handle_event(&event);
        }
    }
}
