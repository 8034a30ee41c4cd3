//! Scene entity types: geometry primitives, seats, shapes and text labels.

use serde::{Deserialize, Serialize};

pub mod seat;
pub mod shape;
pub mod text;

pub use seat::{Seat, SeatGroup};
pub use shape::{
    Circle, Oval, PolygonShape, Rectangle, Shape, ShapeObject, ShapeStyle, ShapeUpdate,
};
pub use text::TextLabel;

/// A 2D point in logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Rotates `p` around `center` by `angle_deg` degrees.
pub fn rotate_point(p: Point, center: Point, angle_deg: f64) -> Point {
    if angle_deg.abs() < 1e-6 {
        return p;
    }
    let angle_rad = angle_deg.to_radians();
    let cos_a = angle_rad.cos();
    let sin_a = angle_rad.sin();
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    Point {
        x: center.x + dx * cos_a - dy * sin_a,
        y: center.y + dx * sin_a + dy * cos_a,
    }
}

/// Rounds `value` to the nearest multiple of `spacing`.
pub fn snap(value: f64, spacing: f64) -> f64 {
    if spacing <= 0.0 {
        return value;
    }
    (value / spacing).round() * spacing
}

/// Snaps both coordinates of `p` to the grid.
pub fn snap_point(p: Point, spacing: f64) -> Point {
    Point::new(snap(p.x, spacing), snap(p.y, spacing))
}
