use seatmap_editor::model::Point;
use seatmap_editor::Viewport;

#[test]
fn test_identity_transform() {
    let vp = Viewport::new();
    let p = Point::new(123.0, 456.0);
    assert_eq!(vp.screen_to_logical(p), p);
    assert_eq!(vp.logical_to_screen(p), p);
}

#[test]
fn test_pan_shifts_logical_origin() {
    let mut vp = Viewport::new();
    vp.pan_by(100.0, 50.0);
    let origin = vp.screen_to_logical(Point::new(100.0, 50.0));
    assert!(origin.x.abs() < 1e-9);
    assert!(origin.y.abs() < 1e-9);
}

#[test]
fn test_zoom_scales_around_origin() {
    let mut vp = Viewport::new();
    vp.set_zoom(2.0);
    let p = vp.logical_to_screen(Point::new(10.0, 20.0));
    assert_eq!(p, Point::new(20.0, 40.0));
}

#[test]
fn test_repeated_wheel_zoom_stays_clamped() {
    let mut vp = Viewport::new();
    let cursor = Point::new(400.0, 300.0);
    for _ in 0..100 {
        vp.wheel_zoom(cursor, true);
    }
    assert!((vp.zoom - 5.0).abs() < 1e-9);
    for _ in 0..200 {
        vp.wheel_zoom(cursor, false);
    }
    assert!((vp.zoom - 0.1).abs() < 1e-9);
}

#[test]
fn test_center_resets_view() {
    let mut vp = Viewport::new();
    vp.pan_by(-300.0, 120.0);
    vp.set_zoom(3.0);
    vp.center();
    assert_eq!(vp, Viewport::default());
}

#[test]
fn test_display_shows_zoom_percent() {
    let mut vp = Viewport::new();
    vp.set_zoom(1.5);
    assert!(vp.to_string().contains("150%"));
}
