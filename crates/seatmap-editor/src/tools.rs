//! Tool palette and in-progress drawing state.

use serde::{Deserialize, Serialize};

use crate::model::Point;

/// The active tool. Exactly one is active at a time; switching tools
/// resolves any pending multi-step drawing first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Select,
    Seat,
    Row,
    Rows,
    Text,
    Rectangle,
    Circle,
    Oval,
    Polygon,
    Erase,
    Pan,
}

impl Tool {
    /// Keyboard shortcut mapping. Returns `None` for unbound keys.
    pub fn from_shortcut(key: char) -> Option<Tool> {
        match key.to_ascii_lowercase() {
            'v' => Some(Tool::Select),
            's' => Some(Tool::Seat),
            'r' => Some(Tool::Row),
            'b' => Some(Tool::Rows),
            't' => Some(Tool::Text),
            'u' => Some(Tool::Rectangle),
            'c' => Some(Tool::Circle),
            'o' => Some(Tool::Oval),
            'p' => Some(Tool::Polygon),
            'e' => Some(Tool::Erase),
            'h' => Some(Tool::Pan),
            _ => None,
        }
    }
}

/// Which shape the two-point drag tools are drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Oval,
}

/// Multi-step drawing state between pointer events.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PendingDraw {
    #[default]
    None,
    /// Row tool: anchor placed, waiting for the end point.
    Row { start: Point, current: Point },
    /// Block tool: corner placed, waiting for the opposite corner.
    Rows { start: Point, current: Point },
    /// Rectangle/circle/oval drag in progress.
    Shape {
        kind: ShapeKind,
        start: Point,
        current: Point,
    },
    /// Polygon vertices committed so far.
    Polygon { points: Vec<Point> },
    /// Select-tool rubber band.
    Marquee { start: Point, current: Point },
}

impl PendingDraw {
    pub fn is_none(&self) -> bool {
        matches!(self, PendingDraw::None)
    }
}

/// Seat centers along a straight row from `start` towards `end` at grid
/// spacing. Both endpoints are included when the length is an exact
/// multiple; the last seat never overshoots the dragged line.
pub fn row_positions(start: Point, end: Point, spacing: f64) -> Vec<Point> {
    let len = start.distance_to(&end);
    if spacing <= 0.0 || len < f64::EPSILON {
        return vec![start];
    }
    let ux = (end.x - start.x) / len;
    let uy = (end.y - start.y) / len;
    let count = (len / spacing).floor() as usize + 1;
    (0..count)
        .map(|k| {
            let d = k as f64 * spacing;
            Point::new(start.x + ux * d, start.y + uy * d)
        })
        .collect()
}

/// Seat centers for a rectangular block, one inner vector per row. The
/// rectangle may be dragged in any direction.
pub fn block_rows(a: Point, b: Point, spacing: f64) -> Vec<Vec<Point>> {
    if spacing <= 0.0 {
        return Vec::new();
    }
    let min_x = a.x.min(b.x);
    let min_y = a.y.min(b.y);
    let width = (b.x - a.x).abs();
    let height = (b.y - a.y).abs();
    let cols = (width / spacing).floor() as usize + 1;
    let rows = (height / spacing).floor() as usize + 1;
    (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| {
                    Point::new(
                        min_x + c as f64 * spacing,
                        min_y + r as f64 * spacing,
                    )
                })
                .collect()
        })
        .collect()
}
