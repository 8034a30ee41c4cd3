use seatmap_editor::model::{Circle, Point, Rectangle, Shape, ShapeUpdate, TextLabel};
use seatmap_editor::Scene;

#[test]
fn test_seat_labels_are_sequential() {
    let mut scene = Scene::new();
    for i in 0..5 {
        scene.add_seat(Point::new(i as f64 * 25.0, 0.0));
    }
    let labels: Vec<_> = scene.seats.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["S1", "S2", "S3", "S4", "S5"]);
}

#[test]
fn test_hit_testing_prefers_topmost_shape() {
    let mut scene = Scene::new();
    let bottom = scene.add_shape(Shape::Rectangle(
        Rectangle::new(0.0, 0.0, 100.0, 100.0).unwrap(),
    ));
    let top = scene.add_shape(Shape::Circle(
        Circle::new(Point::new(50.0, 50.0), 30.0).unwrap(),
    ));
    assert_eq!(scene.shape_at(&Point::new(50.0, 50.0), 0.0).unwrap().id, top);
    assert_eq!(scene.shape_at(&Point::new(5.0, 5.0), 0.0).unwrap().id, bottom);
}

#[test]
fn test_group_frame_wraps_members_with_margin() {
    let mut scene = Scene::new();
    let s1 = scene.add_seat(Point::new(0.0, 0.0));
    let s2 = scene.add_seat(Point::new(100.0, 0.0));
    let g = scene.add_group(vec![s1, s2]);
    let group = scene.group(g).unwrap();
    // Seat radius 10 plus margin 10 on each side.
    assert_eq!(group.origin, Point::new(-20.0, -20.0));
    assert_eq!(group.width, 140.0);
    assert_eq!(group.height, 40.0);
}

#[test]
fn test_update_shape_applies_partial_fields() {
    let mut scene = Scene::new();
    let id = scene.add_shape(Shape::Rectangle(
        Rectangle::new(0.0, 0.0, 100.0, 50.0).unwrap(),
    ));
    let applied = scene.update_shape(
        id,
        ShapeUpdate {
            fill: Some("#ff0000".to_string()),
            rotation: Some(30.0),
            ..ShapeUpdate::default()
        },
    );
    assert!(applied);
    let obj = scene.shape(id).unwrap();
    assert_eq!(obj.shape.style().fill, "#ff0000");
    assert_eq!(obj.shape.rotation(), 30.0);
    // Untouched fields keep their values.
    assert_eq!(obj.shape.style().stroke_width, 1.5);
}

#[test]
fn test_update_unknown_shape_is_ignored() {
    let mut scene = Scene::new();
    assert!(!scene.update_shape(999, ShapeUpdate::default()));
}

#[test]
fn test_update_shape_position_moves_centroid() {
    let mut scene = Scene::new();
    let id = scene.add_shape(Shape::Circle(
        Circle::new(Point::new(10.0, 10.0), 5.0).unwrap(),
    ));
    scene.update_shape(
        id,
        ShapeUpdate {
            position: Some(Point::new(80.0, 60.0)),
            ..ShapeUpdate::default()
        },
    );
    assert_eq!(scene.shape(id).unwrap().shape.centroid(), Point::new(80.0, 60.0));
}

#[test]
fn test_group_rotation_is_display_only() {
    let mut scene = Scene::new();
    let s1 = scene.add_seat(Point::new(0.0, 0.0));
    let g = scene.add_group(vec![s1]);
    scene.update_seat_group_rotation(g, 45.0);
    assert_eq!(scene.group(g).unwrap().rotation, 45.0);
    assert_eq!(scene.seat(s1).unwrap().position, Point::new(0.0, 0.0));
}

#[test]
fn test_scene_json_round_trip() {
    let mut scene = Scene::new();
    let s1 = scene.add_seat(Point::new(25.0, 25.0));
    scene.add_group(vec![s1]);
    scene.add_shape(Shape::Rectangle(
        Rectangle::new(0.0, 0.0, 200.0, 100.0).unwrap(),
    ));
    let id = scene.generate_id();
    scene.add_text(TextLabel::new(id, Point::new(100.0, 10.0), "Stage"));

    let json = serde_json::to_string(&scene).unwrap();
    let back: Scene = serde_json::from_str(&json).unwrap();
    assert_eq!(back, scene);
}
