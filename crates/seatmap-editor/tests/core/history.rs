use seatmap_editor::history::History;
use seatmap_editor::model::Point;
use seatmap_editor::Scene;

#[test]
fn test_new_history_is_empty() {
    let history = History::new();
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert_eq!(history.undo_depth(), 0);
    assert_eq!(history.redo_depth(), 0);
}

#[test]
fn test_undo_then_redo_returns_both_states() {
    let mut history = History::new();
    let empty = Scene::new();
    history.record(empty.clone());
    let mut with_seat = empty.clone();
    with_seat.add_seat(Point::new(0.0, 0.0));

    let restored = history.undo(with_seat.clone()).unwrap();
    assert_eq!(restored, empty);
    assert_eq!(history.redo_depth(), 1);

    let redone = history.redo(restored).unwrap();
    assert_eq!(redone, with_seat);
    assert_eq!(history.undo_depth(), 1);
}

#[test]
fn test_undo_on_empty_history_is_none() {
    let mut history = History::new();
    assert!(history.undo(Scene::new()).is_none());
    assert!(history.redo(Scene::new()).is_none());
}

#[test]
fn test_clear_drops_both_stacks() {
    let mut history = History::new();
    history.record(Scene::new());
    let restored = history.undo(Scene::new()).unwrap();
    history.record(restored);
    history.clear();
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn test_multi_level_undo_walks_backwards() {
    let mut history = History::new();
    let mut scene = Scene::new();
    for i in 0..4 {
        history.record(scene.clone());
        scene.add_seat(Point::new(i as f64 * 25.0, 0.0));
    }
    let mut current = scene;
    for expected in (0..4).rev() {
        current = history.undo(current).unwrap();
        assert_eq!(current.seats.len(), expected);
    }
    assert!(!history.can_undo());
}
