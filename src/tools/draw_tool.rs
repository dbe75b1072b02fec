use crate::command::Command;
use crate::document::Document;
use crate::geometry::Point;
use crate::input::EditKey;
use crate::shape::{Segment, Shape};
use crate::tools::{Tool, ToolKind};
use log::{debug, info};

/// What input the draw session is waiting for next.
///
/// Each variant carries exactly the points that exist in that state: the
/// pending endpoint only exists once confirmed, the first control only
/// once placed. The session's first point is always `segments[0].start()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Awaiting {
    /// Waiting for the next edge's endpoint.
    Endpoint,
    /// Endpoint confirmed; waiting for the first control point (or
    /// `skip-control` to keep the edge straight).
    ControlOne { end: Point },
    /// First control placed; waiting for the second.
    ControlTwo { end: Point, c1: Point },
}

/// The rubber-band line shown while the next point is unconfirmed.
/// Pure presentation state; it never affects what gets committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewLine {
    pub from: Point,
    pub to: Point,
}

/// An in-progress shape under construction.
///
/// Exists only between the first confirmed point and commit or cancel;
/// it is converted into zero or one commands at session end and never
/// persisted.
#[derive(Debug, Clone)]
pub struct DrawSession {
    segments: Vec<Segment>,
    awaiting: Awaiting,
    closing: bool,
    preview: Option<PreviewLine>,
}

impl DrawSession {
    fn begin(start: Point) -> Self {
        Self {
            segments: vec![Segment::line(start)],
            awaiting: Awaiting::Endpoint,
            closing: false,
            preview: None,
        }
    }

    /// The segments confirmed so far. The last one is the pending edge's
    /// start; its kind is finalized when the edge completes.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn awaiting(&self) -> Awaiting {
        self.awaiting
    }

    /// True once the pending edge routes back to the session's first point.
    pub fn is_closing(&self) -> bool {
        self.closing
    }

    pub fn preview(&self) -> Option<PreviewLine> {
        self.preview
    }

    fn first_point(&self) -> Option<Point> {
        self.segments.first().map(|seg| seg.start())
    }
}

/// The interactive "draw a shape" state machine.
///
/// ```text
///            confirm                confirm               confirm
///   idle ──────────► endpoint ──────────► control-1 ──────────► control-2
///                      ▲  ▲ close           │    │ skip           │
///                      │  └────────────────►│    │                │
///                      │        (closing)   │    ▼                ▼
///                      └────────────────────┴── append edge / commit
/// ```
///
/// A commit wraps every confirmed segment into one shape and emits a
/// single add-shape command, so the whole multi-click session is one
/// atomic history entry. Cancel discards the session and emits nothing.
pub struct DrawTool {
    session: Option<DrawSession>,
}

impl Default for DrawTool {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawTool {
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Read-only snapshot for rendering the in-progress shape.
    pub fn session(&self) -> Option<&DrawSession> {
        self.session.as_ref()
    }

    fn commit(&mut self) -> Option<Command> {
        let session = self.session.take()?;
        info!("draw commit: shape with {} segment(s)", session.segments.len());
        Some(Command::add_shape(Shape::new(session.segments)))
    }
}

impl Tool for DrawTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Draw
    }

    fn deactivate(&mut self, _doc: &mut Document) {
        self.session = None;
    }

    fn on_pointer_click(&mut self, pos: Point, _doc: &mut Document) -> Option<Command> {
        if self.session.is_none() {
            // First click opens the session with the shape's first vertex.
            self.session = Some(DrawSession::begin(pos));
            return None;
        }
        let Some(session) = &mut self.session else {
            return None;
        };

        let commit_now = match session.awaiting {
            Awaiting::Endpoint => {
                session.awaiting = Awaiting::ControlOne { end: pos };
                session.preview = None;
                false
            }
            Awaiting::ControlOne { end } => {
                session.awaiting = Awaiting::ControlTwo { end, c1: pos };
                session.preview = None;
                false
            }
            Awaiting::ControlTwo { end, c1 } => {
                // Both controls placed: the completed edge is a bezier.
                if let Some(last) = session.segments.last_mut() {
                    *last = Segment::bezier(last.start(), c1, pos);
                }
                if session.closing {
                    true
                } else {
                    session.segments.push(Segment::line(end));
                    session.awaiting = Awaiting::Endpoint;
                    session.preview = None;
                    false
                }
            }
        };

        if commit_now { self.commit() } else { None }
    }

    fn on_pointer_move(&mut self, pos: Point, _doc: &mut Document) -> Option<Command> {
        let Some(session) = &mut self.session else {
            return None;
        };
        session.preview = match session.awaiting {
            Awaiting::Endpoint | Awaiting::ControlOne { .. } => session
                .segments
                .last()
                .map(|seg| PreviewLine { from: seg.start(), to: pos }),
            Awaiting::ControlTwo { end, .. } => Some(PreviewLine { from: end, to: pos }),
        };
        None
    }

    fn on_key(&mut self, key: EditKey, _doc: &mut Document) -> Option<Command> {
        match key {
            EditKey::Cancel => {
                if self.session.take().is_some() {
                    debug!("draw cancelled");
                }
                None
            }

            EditKey::SkipControl => {
                let commit_now = {
                    let Some(session) = &mut self.session else {
                        return None;
                    };
                    // Only meaningful while the first control is awaited.
                    let Awaiting::ControlOne { end } = session.awaiting else {
                        return None;
                    };
                    if session.closing {
                        true
                    } else {
                        session.segments.push(Segment::line(end));
                        session.awaiting = Awaiting::Endpoint;
                        session.preview = None;
                        false
                    }
                };
                if commit_now { self.commit() } else { None }
            }

            EditKey::Close => {
                let commit_now = {
                    let Some(session) = &mut self.session else {
                        return None;
                    };
                    match session.awaiting {
                        Awaiting::Endpoint => {
                            let Some(first) = session.first_point() else {
                                return None;
                            };
                            session.awaiting = Awaiting::ControlOne { end: first };
                            session.closing = true;
                            session.preview = None;
                            false
                        }
                        // A second close while the closing edge awaits its
                        // first control commits it straight.
                        Awaiting::ControlOne { .. } if session.closing => true,
                        // Close is one-shot; anything else ignores it.
                        _ => false,
                    }
                };
                if commit_now { self.commit() } else { None }
            }
        }
    }
}
