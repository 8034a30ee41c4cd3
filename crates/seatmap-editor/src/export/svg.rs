//! SVG export: a standalone document of the scene in logical coordinates.

use seatmap_core::constants::SEAT_RADIUS;

use crate::model::{Shape, TextLabel};
use crate::scene::Scene;

/// Renders the scene to a standalone SVG document. Paint order matches the
/// on-screen stacking: shapes, then group outlines, then seats, then text.
pub fn scene_to_svg(scene: &Scene, width: f64, height: f64) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
        width, height, width, height
    ));
    svg.push_str(&format!(
        "  <rect width=\"{}\" height=\"{}\" fill=\"#ffffff\"/>\n",
        width, height
    ));

    for obj in &scene.shapes {
        svg.push_str("  ");
        svg.push_str(&shape_element(&obj.shape));
        svg.push('\n');
    }

    for group in &scene.groups {
        if group.width <= 0.0 || group.height <= 0.0 {
            continue;
        }
        let cx = group.origin.x + group.width / 2.0;
        let cy = group.origin.y + group.height / 2.0;
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"#9ca3af\" stroke-width=\"1\" stroke-dasharray=\"4 3\"{}/>\n",
            group.origin.x,
            group.origin.y,
            group.width,
            group.height,
            rotate_attr(group.rotation, cx, cy),
        ));
    }

    for seat in &scene.seats {
        let fill = seat.color.as_deref().unwrap_or("#ffffff");
        svg.push_str(&format!(
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" stroke=\"#374151\" stroke-width=\"1.5\"/>\n",
            seat.position.x, seat.position.y, SEAT_RADIUS, fill
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\" fill=\"#111827\">{}</text>\n",
            seat.position.x,
            seat.position.y,
            SEAT_RADIUS * 0.9,
            escape_xml(&seat.label)
        ));
    }

    for label in &scene.texts {
        svg.push_str("  ");
        svg.push_str(&text_element(scene, label));
        svg.push('\n');
    }

    svg.push_str("</svg>\n");
    svg
}

fn shape_element(shape: &Shape) -> String {
    match shape {
        Shape::Rectangle(r) => {
            let center = r.center();
            format!(
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"{}/>",
                r.x,
                r.y,
                r.width,
                r.height,
                r.style.fill,
                r.style.stroke,
                r.style.stroke_width,
                rotate_attr(r.rotation, center.x, center.y),
            )
        }
        Shape::Circle(c) => format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            c.center.x, c.center.y, c.radius, c.style.fill, c.style.stroke, c.style.stroke_width
        ),
        Shape::Oval(o) => format!(
            "<ellipse cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"{}/>",
            o.center.x,
            o.center.y,
            o.radius_x,
            o.radius_y,
            o.style.fill,
            o.style.stroke,
            o.style.stroke_width,
            rotate_attr(o.rotation, o.center.x, o.center.y),
        ),
        Shape::Polygon(p) => {
            let centroid = p.centroid();
            let points = p
                .points
                .iter()
                .map(|pt| format!("{},{}", pt.x, pt.y))
                .collect::<Vec<_>>()
                .join(" ");
            format!(
                "<polygon points=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"{}/>",
                points,
                p.style.fill,
                p.style.stroke,
                p.style.stroke_width,
                rotate_attr(p.rotation, centroid.x, centroid.y),
            )
        }
    }
}

fn text_element(scene: &Scene, label: &TextLabel) -> String {
    let anchor = scene.text_anchor(label);
    format!(
        "<text x=\"{}\" y=\"{}\" font-size=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\" fill=\"{}\"{}>{}</text>",
        anchor.x,
        anchor.y,
        label.font_size,
        label.color,
        rotate_attr(label.rotation, anchor.x, anchor.y),
        escape_xml(&label.content),
    )
}

fn rotate_attr(angle_deg: f64, cx: f64, cy: f64) -> String {
    if angle_deg.abs() < 1e-6 {
        return String::new();
    }
    format!(" transform=\"rotate({} {} {})\"", angle_deg, cx, cy)
}

fn escape_xml(input: &str) -> String {
    let mut s = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => s.push_str("&amp;"),
            '<' => s.push_str("&lt;"),
            '>' => s.push_str("&gt;"),
            '"' => s.push_str("&quot;"),
            '\'' => s.push_str("&apos;"),
            _ => s.push(c),
        }
    }
    s
}
