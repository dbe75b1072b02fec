use crate::geometry::{Bounds, Point, bounds_of};
use serde::{Deserialize, Serialize};

/// One edge of a shape's boundary.
///
/// The segment stores the edge's starting vertex; the edge itself runs to
/// the next segment's start (cyclically). A `Bezier` segment additionally
/// carries its two cubic control points — the tagged variants make the
/// "line has no controls, bezier has exactly two" invariant structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    Line { start: Point },
    Bezier { start: Point, c1: Point, c2: Point },
}

impl Segment {
    pub fn line(start: Point) -> Self {
        Self::Line { start }
    }

    pub fn bezier(start: Point, c1: Point, c2: Point) -> Self {
        Self::Bezier { start, c1, c2 }
    }

    /// The edge's starting vertex.
    pub fn start(&self) -> Point {
        match self {
            Self::Line { start } | Self::Bezier { start, .. } => *start,
        }
    }

    /// The start point plus any control points, in order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let (start, controls) = match self {
            Self::Line { start } => (*start, None),
            Self::Bezier { start, c1, c2 } => (*start, Some([*c1, *c2])),
        };
        std::iter::once(start).chain(controls.into_iter().flatten())
    }

    /// Returns this segment with every point shifted by the given delta.
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        match *self {
            Self::Line { start } => Self::Line {
                start: start.translated(dx, dy),
            },
            Self::Bezier { start, c1, c2 } => Self::Bezier {
                start: start.translated(dx, dy),
                c1: c1.translated(dx, dy),
                c2: c2.translated(dx, dy),
            },
        }
    }
}

/// Which point of a segment a manipulation handle refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandlePoint {
    Start,
    ControlOne,
    ControlTwo,
}

/// A grabbed vertex or control point of a shape, as named by the UI's
/// hit-test. The core does no hit-testing itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Handle {
    pub segment: usize,
    pub point: HandlePoint,
}

/// A closed boundary: an ordered, cyclic sequence of segments.
///
/// The edge from segment `i` to segment `(i + 1) % n` runs from
/// `segments[i].start()` to the next start, curved through segment `i`'s
/// control points if it is a bezier. A shape with zero segments is not a
/// valid member of a document; the draw tool and the parser never produce
/// one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    segments: Vec<Segment>,
}

impl Shape {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn push_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Min/max extent over all start and control points, or `None` for a
    /// shape without segments.
    pub fn bounds(&self) -> Option<Bounds> {
        bounds_of(self.segments.iter().flat_map(|seg| seg.points()))
    }

    /// Returns this shape with every segment shifted by the given delta.
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            segments: self
                .segments
                .iter()
                .map(|seg| seg.translated(dx, dy))
                .collect(),
        }
    }

    /// Moves one addressable point of one segment.
    ///
    /// Out-of-range segment indices and control handles on line segments
    /// are no-ops.
    pub fn set_point(&mut self, segment: usize, which: HandlePoint, p: Point) {
        let Some(seg) = self.segments.get_mut(segment) else {
            return;
        };
        match (seg, which) {
            (Segment::Line { start }, HandlePoint::Start) => *start = p,
            (Segment::Bezier { start, .. }, HandlePoint::Start) => *start = p,
            (Segment::Bezier { c1, .. }, HandlePoint::ControlOne) => *c1 = p,
            (Segment::Bezier { c2, .. }, HandlePoint::ControlTwo) => *c2 = p,
            (Segment::Line { .. }, _) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Shape {
        Shape::new(vec![
            Segment::line(Point::new(0, 0)),
            Segment::line(Point::new(10, 0)),
            Segment::line(Point::new(10, 10)),
            Segment::line(Point::new(0, 10)),
        ])
    }

    #[test]
    fn bounds_include_control_points() {
        let shape = Shape::new(vec![
            Segment::line(Point::new(0, 0)),
            Segment::bezier(Point::new(5, 5), Point::new(-20, 3), Point::new(8, 40)),
        ]);
        let bounds = shape.bounds().unwrap();
        assert_eq!(bounds.min, Point::new(-20, 0));
        assert_eq!(bounds.max, Point::new(8, 40));
    }

    #[test]
    fn empty_shape_has_no_bounds() {
        assert_eq!(Shape::default().bounds(), None);
    }

    #[test]
    fn translated_moves_every_point() {
        let moved = square().translated(3, -4);
        assert_eq!(moved.segments()[0].start(), Point::new(3, -4));
        assert_eq!(moved.segments()[2].start(), Point::new(13, 6));
    }

    #[test]
    fn set_point_ignores_control_handle_on_line() {
        let mut shape = square();
        let before = shape.clone();
        shape.set_point(1, HandlePoint::ControlOne, Point::new(99, 99));
        assert_eq!(shape, before);

        shape.set_point(99, HandlePoint::Start, Point::new(1, 1));
        assert_eq!(shape, before);
    }

    #[test]
    fn set_point_moves_bezier_control() {
        let mut shape = Shape::new(vec![Segment::bezier(
            Point::new(0, 0),
            Point::new(1, 1),
            Point::new(2, 2),
        )]);
        shape.set_point(0, HandlePoint::ControlTwo, Point::new(7, 8));
        assert_eq!(
            shape.segments()[0],
            Segment::bezier(Point::new(0, 0), Point::new(1, 1), Point::new(7, 8))
        );
    }
}
