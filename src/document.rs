use crate::event::{EditorEvent, EventBus, EventHandler};
use crate::geometry::Bounds;
use crate::shape::Shape;

/// The document: an ordered list of shapes plus at most one selected index.
///
/// The document is the single source of truth for shape content. Shape
/// content is changed through the command engine; the mutating methods
/// here are the primitive operations commands (and the move tool's live
/// drag) are built from. Every mutation notifies observers synchronously
/// once the new state is in place.
///
/// Selection invariant: `selection`, when present, is always a valid index
/// into the shape list. Removing a shape clears the selection if it pointed
/// at the removed shape and decrements it if it pointed after it.
pub struct Document {
    shapes: Vec<Shape>,
    selection: Option<usize>,
    events: EventBus,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            selection: None,
            events: EventBus::new(),
        }
    }

    /// Subscribe an observer to document changes.
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.events.subscribe(handler);
    }

    fn notify(&self) {
        self.events.emit(EditorEvent::DocumentChanged);
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selection.and_then(|i| self.shapes.get(i))
    }

    /// Union of all shape bounds, or `None` when there is nothing to bound.
    pub fn bounds(&self) -> Option<Bounds> {
        self.shapes
            .iter()
            .filter_map(|shape| shape.bounds())
            .reduce(Bounds::union)
    }

    /// Appends a shape at the end of the list.
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
        self.notify();
    }

    /// Removes and returns the shape at `index`, shifting the selection per
    /// the invariant above. Out-of-range indices are a no-op.
    pub fn remove_shape(&mut self, index: usize) -> Option<Shape> {
        if index >= self.shapes.len() {
            return None;
        }
        let removed = self.shapes.remove(index);
        match self.selection {
            Some(sel) if sel == index => self.selection = None,
            Some(sel) if sel > index => self.selection = Some(sel - 1),
            _ => {}
        }
        self.notify();
        Some(removed)
    }

    /// Reinserts a shape at `index` (indices past the end append), shifting
    /// a selection at or after the insertion point up by one.
    pub fn insert_shape(&mut self, index: usize, shape: Shape) {
        let index = index.min(self.shapes.len());
        self.shapes.insert(index, shape);
        if let Some(sel) = self.selection {
            if sel >= index {
                self.selection = Some(sel + 1);
            }
        }
        self.notify();
    }

    /// Replaces the shape at `index`, returning the displaced shape.
    /// Out-of-range indices are a no-op.
    pub fn replace_shape(&mut self, index: usize, shape: Shape) -> Option<Shape> {
        let slot = self.shapes.get_mut(index)?;
        let old = std::mem::replace(slot, shape);
        self.notify();
        Some(old)
    }

    /// Replaces the entire shape list and clears the selection.
    pub fn replace_all(&mut self, shapes: Vec<Shape>) {
        self.shapes = shapes;
        self.selection = None;
        self.notify();
    }

    /// Sets or clears the selection. An out-of-range index degrades to no
    /// selection, keeping the invariant total.
    pub fn select(&mut self, index: Option<usize>) {
        self.selection = index.filter(|&i| i < self.shapes.len());
        self.notify();
    }
}
