use seatmap_editor::model::Point;
use seatmap_editor::{Scene, Selection, SelectionManager};

fn scene_with_row() -> (Scene, Vec<u64>, u64) {
    let mut scene = Scene::new();
    let ids: Vec<u64> = (0..3)
        .map(|i| scene.add_seat(Point::new(i as f64 * 25.0, 0.0)))
        .collect();
    let group = scene.add_group(ids.clone());
    (scene, ids, group)
}

#[test]
fn test_primary_selection_is_category_exclusive() {
    let mut sel = SelectionManager::new();
    sel.select_seat(1);
    sel.select_shape(2);
    assert_eq!(sel.primary(), Selection::Shape(2));
    assert!(!sel.is_seat_selected(1));
}

#[test]
fn test_shift_marquee_is_additive() {
    let mut scene = Scene::new();
    let near = scene.add_seat(Point::new(10.0, 10.0));
    let far = scene.add_seat(Point::new(500.0, 500.0));

    let mut sel = SelectionManager::new();
    sel.apply_marquee(&scene, Point::new(0.0, 0.0), Point::new(50.0, 50.0), false);
    assert!(sel.is_seat_selected(near));

    sel.apply_marquee(
        &scene,
        Point::new(450.0, 450.0),
        Point::new(550.0, 550.0),
        true,
    );
    assert!(sel.is_seat_selected(near));
    assert!(sel.is_seat_selected(far));
}

#[test]
fn test_marquee_touching_one_member_selects_group() {
    let (scene, ids, group) = scene_with_row();
    let mut sel = SelectionManager::new();
    // Rectangle only covers the first seat.
    sel.apply_marquee(&scene, Point::new(-5.0, -5.0), Point::new(5.0, 5.0), false);
    assert!(sel.is_group_selected(group));
    assert!(sel.is_seat_selected(ids[0]));
    assert!(!sel.is_seat_selected(ids[2]));
}

#[test]
fn test_prune_keeps_live_entities() {
    let (mut scene, ids, group) = scene_with_row();
    let mut sel = SelectionManager::new();
    sel.toggle_seat(ids[0]);
    sel.toggle_group(group);
    scene.delete_seat(ids[0]);
    sel.prune(&scene);
    assert!(!sel.is_seat_selected(ids[0]));
    assert!(sel.is_group_selected(group));
}

#[test]
fn test_clear_empties_everything() {
    let mut sel = SelectionManager::new();
    sel.toggle_seat(1);
    sel.toggle_seat(2);
    sel.toggle_group(3);
    sel.clear();
    assert!(sel.is_empty());
    assert_eq!(sel.primary(), Selection::None);
}
