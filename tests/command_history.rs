use polyedit::{Command, CommandHistory, Document, Point, Segment, Shape};

// Helper to build a one-segment shape at a recognizable x coordinate
fn shape_at(x: i32) -> Shape {
    Shape::new(vec![Segment::line(Point::new(x, 0))])
}

fn snapshot(doc: &Document) -> (Vec<Shape>, Option<usize>) {
    (doc.shapes().to_vec(), doc.selection())
}

#[test]
fn n_executes_then_n_undos_restore_initial_state() {
    let mut doc = Document::new();
    doc.add_shape(shape_at(100));
    doc.select(Some(0));
    let before = snapshot(&doc);

    let mut history = CommandHistory::new();
    history.execute(Command::add_shape(shape_at(0)), &mut doc);
    history.execute(Command::add_shape(shape_at(1)), &mut doc);
    history.execute(Command::replace_shape(1, shape_at(7)), &mut doc);
    history.execute(Command::delete_shape(0), &mut doc);

    for _ in 0..4 {
        assert!(history.undo(&mut doc));
    }
    assert!(!history.undo(&mut doc));
    assert_eq!(snapshot(&doc), before);
}

#[test]
fn redo_restores_strict_forward_order() {
    let mut doc = Document::new();
    let mut history = CommandHistory::new();
    history.execute(Command::add_shape(shape_at(0)), &mut doc);
    history.execute(Command::add_shape(shape_at(1)), &mut doc);

    history.undo(&mut doc);
    history.undo(&mut doc);
    assert!(doc.is_empty());

    assert!(history.redo(&mut doc));
    assert_eq!(doc.shapes()[0], shape_at(0));
    assert!(history.redo(&mut doc));
    assert_eq!(doc.shapes()[1], shape_at(1));
    assert!(!history.redo(&mut doc));
}

#[test]
fn executing_after_undo_discards_redo_history() {
    let mut doc = Document::new();
    let mut history = CommandHistory::new();
    history.execute(Command::add_shape(shape_at(0)), &mut doc);
    history.execute(Command::add_shape(shape_at(1)), &mut doc);

    history.undo(&mut doc);
    history.execute(Command::add_shape(shape_at(2)), &mut doc);

    // The undone AddShape(1) is gone for good.
    assert!(!history.can_redo());
    assert!(!history.redo(&mut doc));
    assert_eq!(doc.len(), 2);
    assert_eq!(doc.shapes()[1], shape_at(2));
}

#[test]
fn delete_then_undo_restores_shape_and_selection_at_index() {
    let mut doc = Document::new();
    for x in 0..3 {
        doc.add_shape(shape_at(x));
    }
    doc.select(Some(1));

    let mut history = CommandHistory::new();
    history.execute(Command::delete_shape(1), &mut doc);
    assert_eq!(doc.len(), 2);
    assert_eq!(doc.selection(), None);

    assert!(history.undo(&mut doc));
    assert_eq!(doc.len(), 3);
    assert_eq!(doc.shapes()[1], shape_at(1));
    assert_eq!(doc.selection(), Some(1));
}

#[test]
fn delete_of_invalid_index_is_a_noop_round_trip() {
    let mut doc = Document::new();
    doc.add_shape(shape_at(0));
    let before = snapshot(&doc);

    let mut history = CommandHistory::new();
    history.execute(Command::delete_shape(42), &mut doc);
    assert_eq!(snapshot(&doc), before);
    history.undo(&mut doc);
    assert_eq!(snapshot(&doc), before);
}

#[test]
fn replace_undo_redo_cycles_are_stable() {
    let mut doc = Document::new();
    doc.add_shape(shape_at(0));
    let mut history = CommandHistory::new();

    history.execute(Command::replace_shape(0, shape_at(9)), &mut doc);
    for _ in 0..3 {
        history.undo(&mut doc);
        assert_eq!(doc.shapes()[0], shape_at(0));
        history.redo(&mut doc);
        assert_eq!(doc.shapes()[0], shape_at(9));
    }
}

#[test]
fn clear_forgets_everything() {
    let mut doc = Document::new();
    let mut history = CommandHistory::new();
    history.execute(Command::add_shape(shape_at(0)), &mut doc);
    history.undo(&mut doc);

    history.clear();
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    // The document itself is untouched by a history clear.
    assert!(doc.is_empty());
}
