use seatmap_editor::export::{scene_to_pdf, scene_to_svg};
use seatmap_editor::model::{Oval, Point, PolygonShape, Shape, TextLabel};
use seatmap_editor::{Scene, SeatMapEditor};

fn sample_scene() -> Scene {
    let mut scene = Scene::new();
    let s1 = scene.add_seat(Point::new(100.0, 200.0));
    let s2 = scene.add_seat(Point::new(125.0, 200.0));
    scene.add_group(vec![s1, s2]);
    let stage = scene.add_shape(Shape::Polygon(
        PolygonShape::new(vec![
            Point::new(50.0, 20.0),
            Point::new(250.0, 20.0),
            Point::new(150.0, 80.0),
        ])
        .unwrap(),
    ));
    scene.add_shape(Shape::Oval(
        Oval::new(Point::new(300.0, 200.0), 60.0, 30.0).unwrap(),
    ));
    let id = scene.generate_id();
    let mut label = TextLabel::new(id, Point::new(0.0, 0.0), "Stage");
    label.shape_id = Some(stage);
    scene.add_text(label);
    scene
}

#[test]
fn test_svg_is_well_formed_and_complete() {
    let scene = sample_scene();
    let svg = scene_to_svg(&scene, 800.0, 600.0);
    assert!(svg.starts_with("<svg xmlns"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(svg.matches("<circle").count(), 2);
    assert_eq!(svg.matches("<polygon").count(), 1);
    assert_eq!(svg.matches("<ellipse").count(), 1);
    // Group frame plus background rect.
    assert_eq!(svg.matches("<rect").count(), 2);
    assert!(svg.contains(">Stage</text>"));
}

#[test]
fn test_attached_label_renders_at_shape_centroid() {
    let scene = sample_scene();
    let svg = scene_to_svg(&scene, 800.0, 600.0);
    // Triangle centroid is (150, 40).
    assert!(svg.contains("<text x=\"150\" y=\"40\""));
}

#[test]
fn test_shapes_render_below_seats() {
    let scene = sample_scene();
    let svg = scene_to_svg(&scene, 800.0, 600.0);
    let polygon_at = svg.find("<polygon").unwrap();
    let seat_at = svg.find("<circle").unwrap();
    assert!(polygon_at < seat_at);
}

#[test]
fn test_empty_scene_still_exports() {
    let scene = Scene::new();
    let svg = scene_to_svg(&scene, 400.0, 300.0);
    assert!(svg.contains("viewBox=\"0 0 400 300\""));
    let pdf = scene_to_pdf(&scene, 400.0, 300.0, "Empty").unwrap();
    assert!(pdf.starts_with(b"%PDF"));
}

#[test]
fn test_editor_exports_at_canvas_size() {
    let mut editor = SeatMapEditor::new();
    editor.scene = sample_scene();
    let svg = editor.export_svg();
    assert!(svg.contains("viewBox=\"0 0 1200 800\""));
    let pdf = editor.export_pdf("Hall A").unwrap();
    assert!(pdf.starts_with(b"%PDF"));
}

#[test]
fn test_imported_color_strings_cannot_break_pdf_export() {
    let mut editor = SeatMapEditor::new();
    editor
        .import_seats(r##"[{"id":1,"x":0,"y":0,"seatName":"A1","color":"#€€"}]"##)
        .unwrap();
    let pdf = editor.export_pdf("Hall").unwrap();
    assert!(pdf.starts_with(b"%PDF"));
}

#[test]
fn test_pdf_export_of_full_scene() {
    let scene = sample_scene();
    let bytes = scene_to_pdf(&scene, 800.0, 600.0, "Hall A").unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert!(bytes.len() > 500);
}
