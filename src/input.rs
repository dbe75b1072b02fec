use crate::geometry::Point;
use crate::shape::Handle;

/// The externally computed hit-test result accompanying a pointer press.
///
/// Hit-testing against rendered geometry belongs to the canvas layer; the
/// core only consumes its verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// The press landed on the body of the shape at this index.
    Shape(usize),
    /// The press landed on a vertex/control handle of the selected shape.
    Handle(Handle),
}

/// The fixed key vocabulary the editing core understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    /// Finish the pending edge as a straight line (no control points).
    SkipControl,
    /// Route the pending edge back to the shape's starting point.
    Close,
    /// Discard the in-progress operation.
    Cancel,
}

/// An input event, with positions already transformed to document space.
///
/// The core performs no coordinate transformation or input-device handling;
/// the UI layer translates raw events into these before feeding them in.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// Primary button pressed.
    PointerPressed { pos: Point, hit: Option<Hit> },
    /// Pointer moved (with or without the button held).
    PointerMoved { pos: Point },
    /// Primary button released.
    PointerReleased { pos: Point },
    /// A click (press + release without drag), as resolved by the UI layer.
    PointerClicked { pos: Point },
    /// One of the named editing keys.
    Key(EditKey),
}
