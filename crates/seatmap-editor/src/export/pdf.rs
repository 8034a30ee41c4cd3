//! PDF export via `printpdf`: one vector page sized to the layout.

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, Line, Mm, PdfDocument, PdfLayerReference, Point as PdfPoint, Polygon, Rgb,
};

use seatmap_core::constants::SEAT_RADIUS;
use seatmap_core::{ExportError, Result};

use crate::model::{rotate_point, Point, Shape};
use crate::scene::Scene;

/// CSS pixel to millimeter.
const PX_TO_MM: f64 = 0.264_583;

const CIRCLE_SEGMENTS: usize = 48;

/// Renders the scene to a single-page PDF sized `width` x `height` logical
/// units. Returns the document bytes.
pub fn scene_to_pdf(scene: &Scene, width: f64, height: f64, title: &str) -> Result<Vec<u8>> {
    let page_w = Mm((width * PX_TO_MM) as f32);
    let page_h = Mm((height * PX_TO_MM) as f32);
    let (doc, page1, layer1) = PdfDocument::new(title, page_w, page_h, "Layer 1");
    let layer = doc.get_page(page1).get_layer(layer1);
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf {
            reason: e.to_string(),
        })?;

    // PDF pages are y-up; logical space is y-down.
    let to_page = |p: Point| {
        PdfPoint::new(
            Mm((p.x * PX_TO_MM) as f32),
            Mm(((height - p.y) * PX_TO_MM) as f32),
        )
    };

    for obj in &scene.shapes {
        draw_shape(&layer, &obj.shape, &to_page);
    }

    for group in &scene.groups {
        if group.width <= 0.0 || group.height <= 0.0 {
            continue;
        }
        layer.set_outline_color(Color::Rgb(Rgb::new(0.6, 0.63, 0.66, None)));
        layer.set_outline_thickness(0.3);
        let corners = [
            group.origin,
            Point::new(group.origin.x + group.width, group.origin.y),
            Point::new(group.origin.x + group.width, group.origin.y + group.height),
            Point::new(group.origin.x, group.origin.y + group.height),
        ];
        let points = corners.iter().map(|&p| (to_page(p), false)).collect();
        layer.add_line(Line {
            points,
            is_closed: true,
        });
    }

    for seat in &scene.seats {
        let fill = seat
            .color
            .as_deref()
            .and_then(parse_hex_color)
            .unwrap_or(Rgb::new(1.0, 1.0, 1.0, None));
        layer.set_fill_color(Color::Rgb(fill));
        layer.set_outline_color(Color::Rgb(Rgb::new(0.22, 0.25, 0.32, None)));
        layer.set_outline_thickness(0.4);
        let ring: Vec<_> = circle_points(seat.position, SEAT_RADIUS)
            .into_iter()
            .map(|p| (to_page(p), false))
            .collect();
        layer.add_polygon(Polygon {
            rings: vec![ring],
            mode: PaintMode::FillStroke,
            winding_order: WindingOrder::NonZero,
        });

        layer.set_fill_color(Color::Rgb(Rgb::new(0.07, 0.09, 0.15, None)));
        let label_w = seat.label.chars().count() as f64 * SEAT_RADIUS * 0.5;
        layer.use_text(
            seat.label.clone(),
            (SEAT_RADIUS * 0.9 * PX_TO_MM * 72.0 / 25.4) as f32,
            Mm(((seat.position.x - label_w / 2.0) * PX_TO_MM) as f32),
            Mm(((height - seat.position.y - SEAT_RADIUS * 0.35) * PX_TO_MM) as f32),
            &font,
        );
    }

    for label in &scene.texts {
        let anchor = scene.text_anchor(label);
        let color = parse_hex_color(&label.color).unwrap_or(Rgb::new(0.0, 0.0, 0.0, None));
        layer.set_fill_color(Color::Rgb(color));
        let width_px = label.content.chars().count() as f64 * label.font_size * 0.5;
        layer.use_text(
            label.content.clone(),
            (label.font_size * PX_TO_MM * 72.0 / 25.4) as f32,
            Mm(((anchor.x - width_px / 2.0) * PX_TO_MM) as f32),
            Mm(((height - anchor.y - label.font_size / 2.0) * PX_TO_MM) as f32),
            &font,
        );
    }

    doc.save_to_bytes().map_err(|e| {
        ExportError::Pdf {
            reason: e.to_string(),
        }
        .into()
    })
}

fn draw_shape(layer: &PdfLayerReference, shape: &Shape, to_page: &dyn Fn(Point) -> PdfPoint) {
    let style = shape.style();
    let fill = parse_hex_color(&style.fill);
    let stroke = parse_hex_color(&style.stroke).unwrap_or(Rgb::new(0.0, 0.0, 0.0, None));
    layer.set_outline_color(Color::Rgb(stroke));
    layer.set_outline_thickness((style.stroke_width * PX_TO_MM) as f32);
    let mode = if let Some(fill) = fill {
        layer.set_fill_color(Color::Rgb(fill));
        PaintMode::FillStroke
    } else {
        PaintMode::Stroke
    };

    let outline: Vec<Point> = match shape {
        Shape::Rectangle(r) => {
            let center = r.center();
            [
                Point::new(r.x, r.y),
                Point::new(r.x + r.width, r.y),
                Point::new(r.x + r.width, r.y + r.height),
                Point::new(r.x, r.y + r.height),
            ]
            .into_iter()
            .map(|p| rotate_point(p, center, r.rotation))
            .collect()
        }
        Shape::Circle(c) => circle_points(c.center, c.radius),
        Shape::Oval(o) => (0..CIRCLE_SEGMENTS)
            .map(|i| {
                let theta = i as f64 / CIRCLE_SEGMENTS as f64 * std::f64::consts::TAU;
                let p = Point::new(
                    o.center.x + o.radius_x * theta.cos(),
                    o.center.y + o.radius_y * theta.sin(),
                );
                rotate_point(p, o.center, o.rotation)
            })
            .collect(),
        Shape::Polygon(p) => {
            let centroid = p.centroid();
            p.points
                .iter()
                .map(|&pt| rotate_point(pt, centroid, p.rotation))
                .collect()
        }
    };
    let ring: Vec<_> = outline.into_iter().map(|p| (to_page(p), false)).collect();
    layer.add_polygon(Polygon {
        rings: vec![ring],
        mode,
        winding_order: WindingOrder::NonZero,
    });
}

fn circle_points(center: Point, radius: f64) -> Vec<Point> {
    (0..CIRCLE_SEGMENTS)
        .map(|i| {
            let theta = i as f64 / CIRCLE_SEGMENTS as f64 * std::f64::consts::TAU;
            Point::new(
                center.x + radius * theta.cos(),
                center.y + radius * theta.sin(),
            )
        })
        .collect()
}

/// Parses `#rrggbb` into unit-range RGB. Returns `None` for `none` and
/// malformed strings. The length check alone is not enough: the color
/// comes straight off the wire and may hold multibyte characters.
fn parse_hex_color(input: &str) -> Option<Rgb> {
    let hex = input.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Rgb::new(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        None,
    ))
}
