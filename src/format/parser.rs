use crate::geometry::Point;
use crate::shape::{Segment, Shape};
use log::debug;
use thiserror::Error;

/// A failed parse. Fatal to the whole parse call: there is no
/// partial-document recovery.
///
/// Structural variants report a grammar violation; token variants report a
/// bad coordinate group. All carry the 1-based source line, and per-token
/// failures additionally carry the 0-based position within the group.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: segment found before any polygon declaration")]
    SegmentBeforePolygon { line: usize },

    #[error("line {line}: expected 'Polygon:' or 'Segment:', found '{found}'")]
    UnrecognizedLine { line: usize, found: String },

    #[error("line {line}: expected coordinates wrapped in parentheses, like (x, y)")]
    MalformedCoordinates { line: usize },

    #[error("line {line}: invalid integer '{token}' at position {index}")]
    InvalidInteger {
        line: usize,
        index: usize,
        token: String,
    },

    #[error("line {line}: expected 2 or 6 coordinates, found {count}")]
    WrongArity { line: usize, count: usize },
}

impl ParseError {
    /// The 1-based source line the error occurred on.
    pub fn line(&self) -> usize {
        match self {
            Self::SegmentBeforePolygon { line }
            | Self::UnrecognizedLine { line, .. }
            | Self::MalformedCoordinates { line }
            | Self::InvalidInteger { line, .. }
            | Self::WrongArity { line, .. } => *line,
        }
    }

    /// The 0-based token position within the coordinate group, for errors
    /// about a single token.
    pub fn token_index(&self) -> Option<usize> {
        match self {
            Self::InvalidInteger { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// True for grammar violations, false for coordinate-token errors.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::SegmentBeforePolygon { .. }
                | Self::UnrecognizedLine { .. }
                | Self::MalformedCoordinates { .. }
        )
    }
}

/// Parses the text representation into a shape list.
///
/// Blank lines and `#` comments are skipped anywhere. A `Polygon:` header
/// opens a block; each following `Segment:` line adds one segment to it.
/// Blocks that accumulate no segments are silently dropped, mid-stream and
/// at end of input, so a parsed result never contains an empty shape.
pub fn parse(text: &str) -> Result<Vec<Shape>, ParseError> {
    let mut shapes = Vec::new();
    let mut current: Option<Vec<Segment>> = None;

    for (number, line) in text.lines().enumerate() {
        let number = number + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if trimmed.starts_with("Polygon:") {
            if let Some(segments) = current.take() {
                if !segments.is_empty() {
                    shapes.push(Shape::new(segments));
                }
            }
            current = Some(Vec::new());
        } else if let Some(rest) = trimmed.strip_prefix("Segment:") {
            let Some(segments) = current.as_mut() else {
                return Err(ParseError::SegmentBeforePolygon { line: number });
            };
            segments.push(parse_segment(rest.trim(), number)?);
        } else {
            return Err(ParseError::UnrecognizedLine {
                line: number,
                found: trimmed.to_string(),
            });
        }
    }

    if let Some(segments) = current {
        if !segments.is_empty() {
            shapes.push(Shape::new(segments));
        }
    }

    debug!("parsed {} shape(s)", shapes.len());
    Ok(shapes)
}

/// Parses one coordinate group: exactly 2 integers for a line segment or
/// 6 for a bezier (start, control-1, control-2).
fn parse_segment(coords: &str, line: usize) -> Result<Segment, ParseError> {
    let inner = coords
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .filter(|s| !s.trim().is_empty())
        .ok_or(ParseError::MalformedCoordinates { line })?;

    let tokens: Vec<&str> = inner.split(',').map(str::trim).collect();
    match tokens.len() {
        2 | 6 => {}
        count => return Err(ParseError::WrongArity { line, count }),
    }

    let mut values = [0i32; 6];
    for (index, token) in tokens.iter().enumerate() {
        values[index] = parse_integer(token, line, index)?;
    }

    Ok(if tokens.len() == 2 {
        Segment::line(Point::new(values[0], values[1]))
    } else {
        Segment::bezier(
            Point::new(values[0], values[1]),
            Point::new(values[2], values[3]),
            Point::new(values[4], values[5]),
        )
    })
}

/// Accepts signed base-10 integers only: an optional leading `-` followed
/// by ASCII digits. No `+` sign, no fractions, no exponents.
fn parse_integer(token: &str, line: usize, index: usize) -> Result<i32, ParseError> {
    let digits = token.strip_prefix('-').unwrap_or(token);
    let well_formed = !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit());

    well_formed
        .then(|| token.parse::<i32>().ok())
        .flatten()
        .ok_or_else(|| ParseError::InvalidInteger {
            line,
            index,
            token: token.to_string(),
        })
}
