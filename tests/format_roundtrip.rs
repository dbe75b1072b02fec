use polyedit::{Point, Segment, Shape, parse, serialize};
use proptest::prelude::*;

fn line(x: i32, y: i32) -> Segment {
    Segment::line(Point::new(x, y))
}

#[test]
fn spec_document_round_trips_byte_exact() {
    let text = "Polygon:\n    Segment: (0, 0)\n    Segment: (5, 5, 1, 1, 2, 2)\n\nPolygon:\n    Segment: (-3, 14)";
    let shapes = parse(text).unwrap();
    assert_eq!(shapes.len(), 2);
    assert_eq!(serialize(&shapes), text);
}

#[test]
fn round_trip_preserves_kinds_points_and_order() {
    let shapes = vec![
        Shape::new(vec![
            line(0, 0),
            Segment::bezier(Point::new(5, 5), Point::new(1, 1), Point::new(2, 2)),
            line(-7, 3),
        ]),
        Shape::new(vec![line(100, -100)]),
    ];
    assert_eq!(parse(&serialize(&shapes)).unwrap(), shapes);
}

#[test]
fn parse_tolerates_loose_spacing_and_comments() {
    let text = "# shapes below\nPolygon:\n  Segment:(0,0)\n\n  Segment: ( 5 , 5 , 1 , 1 , 2 , 2 )\n";
    let shapes = parse(text).unwrap();
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0].segments().len(), 2);

    // Serializing normalizes the spacing; a second round trip is stable.
    let normalized = serialize(&shapes);
    assert_eq!(serialize(&parse(&normalized).unwrap()), normalized);
}

#[test]
fn serialized_output_has_no_trailing_whitespace() {
    let shapes = vec![Shape::new(vec![line(1, 2)])];
    let text = serialize(&shapes);
    assert_eq!(text, text.trim_end());
}

#[test]
fn malformed_input_never_yields_empty_shapes() {
    // Headers without segments are dropped wherever they appear.
    let shapes = parse("Polygon:\n\nPolygon:\nSegment: (1, 1)\n\nPolygon:\n# nothing\n").unwrap();
    assert_eq!(shapes.len(), 1);
    assert!(shapes.iter().all(|shape| !shape.is_empty()));
}

#[test]
fn shapes_survive_json_round_trip() {
    // The serde derives exist so a hosting app can persist session state.
    let shape = Shape::new(vec![
        line(0, 0),
        Segment::bezier(Point::new(5, 5), Point::new(1, 1), Point::new(2, 2)),
    ]);
    let json = serde_json::to_string(&shape).unwrap();
    let back: Shape = serde_json::from_str(&json).unwrap();
    assert_eq!(back, shape);
}

fn point_strategy() -> impl Strategy<Value = Point> {
    (any::<i32>(), any::<i32>()).prop_map(|(x, y)| Point::new(x, y))
}

fn segment_strategy() -> impl Strategy<Value = Segment> {
    prop_oneof![
        point_strategy().prop_map(Segment::line),
        (point_strategy(), point_strategy(), point_strategy())
            .prop_map(|(start, c1, c2)| Segment::bezier(start, c1, c2)),
    ]
}

fn document_strategy() -> impl Strategy<Value = Vec<Shape>> {
    prop::collection::vec(
        prop::collection::vec(segment_strategy(), 1..8).prop_map(Shape::new),
        0..6,
    )
}

proptest! {
    #[test]
    fn serialize_then_parse_is_identity(shapes in document_strategy()) {
        let text = serialize(&shapes);
        let parsed = parse(&text).unwrap();
        prop_assert_eq!(parsed, shapes);
    }

    #[test]
    fn serialized_text_is_stable_under_reparse(shapes in document_strategy()) {
        let text = serialize(&shapes);
        let again = serialize(&parse(&text).unwrap());
        prop_assert_eq!(again, text);
    }
}
