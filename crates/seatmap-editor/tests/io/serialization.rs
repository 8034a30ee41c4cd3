use seatmap_editor::model::{Point, Rectangle, Shape};
use seatmap_editor::serialization::{records_from_json, DesignFile};
use seatmap_editor::{Scene, SeatMapEditor, Viewport};

#[test]
fn test_design_file_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hall.seatmap");

    let mut scene = Scene::new();
    let s1 = scene.add_seat(Point::new(25.0, 25.0));
    scene.add_group(vec![s1]);
    scene.add_shape(Shape::Rectangle(
        Rectangle::new(0.0, 100.0, 300.0, 80.0).unwrap(),
    ));
    let mut viewport = Viewport::new();
    viewport.pan_by(12.0, -7.0);
    viewport.set_zoom(1.5);

    let file = DesignFile::new("Main hall", scene.clone(), viewport);
    file.save_to_file(&path).unwrap();

    let loaded = DesignFile::load_from_file(&path).unwrap();
    assert_eq!(loaded.version, "1.0");
    assert_eq!(loaded.metadata.name, "Main hall");
    assert_eq!(loaded.scene, scene);
    assert_eq!(loaded.viewport, viewport);
    assert!(loaded.metadata.modified >= loaded.metadata.created);
}

#[test]
fn test_load_rejects_garbage_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.seatmap");
    std::fs::write(&path, "{ definitely not a design").unwrap();
    assert!(DesignFile::load_from_file(&path).is_err());
}

#[test]
fn test_import_export_seat_array() {
    let json = r#"[
        {"id": 1, "x": 0.0, "y": 0.0, "seatName": "A1", "row": 1, "column": 1, "status": "reserved"},
        {"id": 2, "x": 25.0, "y": 0.0, "seatName": "A2", "row": 1, "column": 2}
    ]"#;
    let mut editor = SeatMapEditor::new();
    editor.import_seats(json).unwrap();
    assert_eq!(editor.scene.seats.len(), 2);
    assert_eq!(editor.scene.seats[0].label, "A1");

    let exported = editor.export_seats_json().unwrap();
    let records = records_from_json(&exported).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].row_name.as_deref(), Some("R1"));
}

#[test]
fn test_failed_import_leaves_scene_untouched() {
    let mut editor = SeatMapEditor::new();
    editor.import_seats(r#"[{"id": 1, "x": 0.0, "y": 0.0, "seatName": "A1"}]"#).unwrap();

    let before = editor.scene.clone();
    let dup = r#"[
        {"id": 5, "x": 0.0, "y": 0.0, "seatName": "B1"},
        {"id": 5, "x": 25.0, "y": 0.0, "seatName": "B2"}
    ]"#;
    assert!(editor.import_seats(dup).is_err());
    assert_eq!(editor.scene, before);

    assert!(editor.import_seats("not json").is_err());
    assert_eq!(editor.scene, before);
}

#[test]
fn test_save_design_clears_modified_flag() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("venue.seatmap");

    let mut editor = SeatMapEditor::new();
    editor
        .import_seats(r#"[{"id": 1, "x": 0.0, "y": 0.0, "seatName": "A1"}]"#)
        .unwrap();
    assert!(editor.is_modified());
    editor.save_design("Venue", &path).unwrap();
    assert!(!editor.is_modified());

    let mut other = SeatMapEditor::new();
    other.load_design(&path).unwrap();
    assert_eq!(other.scene, editor.scene);
    assert!(!other.can_undo());
}
