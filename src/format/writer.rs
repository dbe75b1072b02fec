use crate::shape::{Segment, Shape};

/// Serializes shapes to the text representation: one `Polygon:` header per
/// shape, one indented `Segment:` line per segment, shapes separated by a
/// blank line, trailing whitespace trimmed. The syntactic inverse of
/// [`parse`](super::parse) for documents with at least one segment per
/// shape.
pub fn serialize(shapes: &[Shape]) -> String {
    let mut text = String::new();

    for shape in shapes {
        text.push_str("Polygon:\n");
        for segment in shape.segments() {
            match segment {
                Segment::Line { start } => {
                    text.push_str(&format!("    Segment: ({}, {})\n", start.x, start.y));
                }
                Segment::Bezier { start, c1, c2 } => {
                    text.push_str(&format!(
                        "    Segment: ({}, {}, {}, {}, {}, {})\n",
                        start.x, start.y, c1.x, c1.y, c2.x, c2.y
                    ));
                }
            }
        }
        text.push('\n');
    }

    text.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn serializes_both_segment_kinds() {
        let shapes = vec![Shape::new(vec![
            Segment::line(Point::new(0, 0)),
            Segment::bezier(Point::new(5, 5), Point::new(1, 1), Point::new(2, 2)),
        ])];
        assert_eq!(
            serialize(&shapes),
            "Polygon:\n    Segment: (0, 0)\n    Segment: (5, 5, 1, 1, 2, 2)"
        );
    }

    #[test]
    fn shapes_are_separated_by_a_blank_line() {
        let shapes = vec![
            Shape::new(vec![Segment::line(Point::new(1, 1))]),
            Shape::new(vec![Segment::line(Point::new(2, 2))]),
        ];
        assert_eq!(
            serialize(&shapes),
            "Polygon:\n    Segment: (1, 1)\n\nPolygon:\n    Segment: (2, 2)"
        );
    }

    #[test]
    fn empty_document_serializes_to_empty_text() {
        assert_eq!(serialize(&[]), "");
    }
}
