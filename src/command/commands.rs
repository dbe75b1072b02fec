use crate::document::Document;
use crate::shape::Shape;
use serde::{Deserialize, Serialize};

/// Which way a command is being applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

/// A reversible unit of change to the document.
///
/// The command set is closed and known at compile time, so commands are a
/// tagged enum dispatched through a single [`Command::apply`] rather than
/// trait objects. Each variant carries the state it captures on first
/// execution so the reverse direction can restore it exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Adds a shape at the end of the document.
    AddShape { shape: Shape },

    /// Deletes the shape at `index`.
    ///
    /// `removed` and `prev_selection` are captured on execute so undo can
    /// reinsert the exact shape at the same index and restore the selection
    /// as it was immediately before the delete.
    DeleteShape {
        index: usize,
        removed: Option<Shape>,
        prev_selection: Option<usize>,
    },

    /// Replaces the shape at `index` with `shape`.
    ///
    /// `prior` holds the displaced shape; it is captured on the first
    /// execute unless the producer already snapshotted it (the move tool
    /// pre-fills it, since during a drag the document already holds the
    /// new content by the time the command is executed).
    ReplaceShape {
        index: usize,
        shape: Shape,
        prior: Option<Shape>,
    },
}

impl Command {
    pub fn add_shape(shape: Shape) -> Self {
        Self::AddShape { shape }
    }

    pub fn delete_shape(index: usize) -> Self {
        Self::DeleteShape {
            index,
            removed: None,
            prev_selection: None,
        }
    }

    pub fn replace_shape(index: usize, shape: Shape) -> Self {
        Self::ReplaceShape {
            index,
            shape,
            prior: None,
        }
    }

    /// Applies the command to the document in the given direction.
    ///
    /// Commands are assumed to run against a well-formed document; the
    /// document primitives treat malformed indices as no-ops rather than
    /// faults, so `apply` never fails.
    pub fn apply(&mut self, doc: &mut Document, direction: Direction) {
        match (&mut *self, direction) {
            (Command::AddShape { shape }, Direction::Forward) => {
                doc.add_shape(shape.clone());
            }
            (Command::AddShape { .. }, Direction::Reverse) => {
                // The added shape is the last one by construction.
                if !doc.is_empty() {
                    doc.remove_shape(doc.len() - 1);
                }
            }

            (
                Command::DeleteShape {
                    index,
                    removed,
                    prev_selection,
                },
                Direction::Forward,
            ) => {
                *prev_selection = doc.selection();
                *removed = doc.remove_shape(*index);
            }
            (
                Command::DeleteShape {
                    index,
                    removed,
                    prev_selection,
                },
                Direction::Reverse,
            ) => {
                if let Some(shape) = removed.clone() {
                    doc.insert_shape(*index, shape);
                    doc.select(*prev_selection);
                }
            }

            (
                Command::ReplaceShape {
                    index,
                    shape,
                    prior,
                },
                Direction::Forward,
            ) => {
                let displaced = doc.replace_shape(*index, shape.clone());
                if prior.is_none() {
                    *prior = displaced;
                }
            }
            (Command::ReplaceShape { index, prior, .. }, Direction::Reverse) => {
                if let Some(old) = prior.clone() {
                    doc.replace_shape(*index, old);
                }
            }
        }
    }

    /// Applies the command forward.
    pub fn execute(&mut self, doc: &mut Document) {
        self.apply(doc, Direction::Forward);
    }

    /// Reverses exactly the effect of the most recent `execute`.
    pub fn undo(&mut self, doc: &mut Document) {
        self.apply(doc, Direction::Reverse);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::shape::Segment;

    fn shape_at(x: i32) -> Shape {
        Shape::new(vec![Segment::line(Point::new(x, 0))])
    }

    #[test]
    fn add_then_undo_restores_document() {
        let mut doc = Document::new();
        let mut cmd = Command::add_shape(shape_at(1));
        cmd.execute(&mut doc);
        assert_eq!(doc.len(), 1);
        cmd.undo(&mut doc);
        assert!(doc.is_empty());
    }

    #[test]
    fn delete_captures_shape_and_selection() {
        let mut doc = Document::new();
        doc.add_shape(shape_at(0));
        doc.add_shape(shape_at(1));
        doc.select(Some(1));

        let mut cmd = Command::delete_shape(1);
        cmd.execute(&mut doc);
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.selection(), None);

        cmd.undo(&mut doc);
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.selection(), Some(1));
        assert_eq!(doc.shapes()[1], shape_at(1));
    }

    #[test]
    fn replace_captures_prior_on_first_execute_only() {
        let mut doc = Document::new();
        doc.add_shape(shape_at(0));

        let mut cmd = Command::replace_shape(0, shape_at(9));
        cmd.execute(&mut doc);
        cmd.undo(&mut doc);
        assert_eq!(doc.shapes()[0], shape_at(0));

        // Re-executing after undo must not re-capture: the prior is still
        // the original shape.
        cmd.execute(&mut doc);
        assert_eq!(doc.shapes()[0], shape_at(9));
        cmd.undo(&mut doc);
        assert_eq!(doc.shapes()[0], shape_at(0));
    }

    #[test]
    fn replace_with_prefilled_prior_skips_capture() {
        let mut doc = Document::new();
        doc.add_shape(shape_at(9)); // live value already in place, as after a drag

        let mut cmd = Command::ReplaceShape {
            index: 0,
            shape: shape_at(9),
            prior: Some(shape_at(0)),
        };
        cmd.execute(&mut doc);
        cmd.undo(&mut doc);
        assert_eq!(doc.shapes()[0], shape_at(0));
    }
}
