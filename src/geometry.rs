use serde::{Deserialize, Serialize};

/// A point in document space.
///
/// Coordinates are integers: the text format only admits signed base-10
/// integers, and the serialize/parse round-trip must be exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Creates a new point with the given X and Y coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this point shifted by the given delta.
    pub fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Axis-aligned extent of a set of points.
///
/// A `Bounds` always covers at least one point; "nothing to bound" is
/// represented by `Option<Bounds>` being `None`, never by NaN-style
/// sentinels or partial extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// The degenerate bounds covering a single point.
    pub fn from_point(p: Point) -> Self {
        Self { min: p, max: p }
    }

    /// Grows the bounds to include `p`.
    pub fn include(&mut self, p: Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// The smallest bounds covering both `self` and `other`.
    pub fn union(self, other: Self) -> Self {
        let mut out = self;
        out.include(other.min);
        out.include(other.max);
        out
    }

    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }
}

/// Folds an iterator of points into their common bounds.
pub fn bounds_of(points: impl IntoIterator<Item = Point>) -> Option<Bounds> {
    let mut iter = points.into_iter();
    let first = iter.next()?;
    let mut bounds = Bounds::from_point(first);
    for p in iter {
        bounds.include(p);
    }
    Some(bounds)
}
