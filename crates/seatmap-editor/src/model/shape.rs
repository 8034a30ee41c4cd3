//! Decorative shapes: rectangles, circles, ovals and polygons.

use serde::{Deserialize, Serialize};

use super::{rotate_point, Point};

/// Fill and stroke styling shared by all shape variants. Colors are CSS hex
/// strings as the host renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill: "#e5e7eb".to_string(),
            stroke: "#6b7280".to_string(),
            stroke_width: 1.5,
        }
    }
}

/// A rectangle defined by its top-left corner and dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub style: ShapeStyle,
}

impl Rectangle {
    /// Returns `None` for a degenerate rectangle (non-positive extent).
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Option<Self> {
        if width <= 0.0 || height <= 0.0 {
            return None;
        }
        Some(Self {
            x,
            y,
            width,
            height,
            rotation: 0.0,
            style: ShapeStyle::default(),
        })
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        if self.rotation.abs() < 1e-6 {
            return (self.x, self.y, self.x + self.width, self.y + self.height);
        }
        let center = self.center();
        let corners = [
            Point::new(self.x, self.y),
            Point::new(self.x + self.width, self.y),
            Point::new(self.x + self.width, self.y + self.height),
            Point::new(self.x, self.y + self.height),
        ];
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for c in corners {
            let p = rotate_point(c, center, self.rotation);
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        (min_x, min_y, max_x, max_y)
    }

    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        let p = rotate_point(*point, self.center(), -self.rotation);
        p.x >= self.x - tolerance
            && p.x <= self.x + self.width + tolerance
            && p.y >= self.y - tolerance
            && p.y <= self.y + self.height + tolerance
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    pub fn resize(&mut self, handle: usize, dx: f64, dy: f64) {
        let (x1, y1, x2, y2) = (self.x, self.y, self.x + self.width, self.y + self.height);
        let (new_x1, new_y1, new_x2, new_y2) = match handle {
            0 => (x1 + dx, y1 + dy, x2, y2),           // Top-left
            1 => (x1, y1 + dy, x2 + dx, y2),           // Top-right
            2 => (x1 + dx, y1, x2, y2 + dy),           // Bottom-left
            3 => (x1, y1, x2 + dx, y2 + dy),           // Bottom-right
            _ => (x1, y1, x2, y2),
        };
        self.width = (new_x2 - new_x1).abs();
        self.height = (new_y2 - new_y1).abs();
        self.x = new_x1.min(new_x2);
        self.y = new_y1.min(new_y2);
    }
}

/// A circle defined by center and radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub style: ShapeStyle,
}

impl Circle {
    /// Returns `None` for a degenerate circle (non-positive radius).
    pub fn new(center: Point, radius: f64) -> Option<Self> {
        if radius <= 0.0 {
            return None;
        }
        Some(Self {
            center,
            radius,
            style: ShapeStyle::default(),
        })
    }

    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        (
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }

    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        self.center.distance_to(point) <= self.radius + tolerance
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.center.x += dx;
        self.center.y += dy;
    }

    pub fn resize(&mut self, _handle: usize, dx: f64, dy: f64) {
        let delta = if dx.abs() > dy.abs() { dx } else { dy };
        self.radius = (self.radius + delta / 2.0).max(1.0);
    }
}

/// An axis-aligned ellipse defined by center and semi-axes, with a display
/// rotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Oval {
    pub center: Point,
    pub radius_x: f64,
    pub radius_y: f64,
    pub rotation: f64,
    pub style: ShapeStyle,
}

impl Oval {
    /// Returns `None` for a degenerate oval (non-positive semi-axis).
    pub fn new(center: Point, radius_x: f64, radius_y: f64) -> Option<Self> {
        if radius_x <= 0.0 || radius_y <= 0.0 {
            return None;
        }
        Some(Self {
            center,
            radius_x,
            radius_y,
            rotation: 0.0,
            style: ShapeStyle::default(),
        })
    }

    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        if self.rotation.abs() < 1e-6 {
            return (
                self.center.x - self.radius_x,
                self.center.y - self.radius_y,
                self.center.x + self.radius_x,
                self.center.y + self.radius_y,
            );
        }
        // Tight box of a rotated ellipse from the axis projections.
        let rad = self.rotation.to_radians();
        let (sin, cos) = rad.sin_cos();
        let ex = ((self.radius_x * cos).powi(2) + (self.radius_y * sin).powi(2)).sqrt();
        let ey = ((self.radius_x * sin).powi(2) + (self.radius_y * cos).powi(2)).sqrt();
        (
            self.center.x - ex,
            self.center.y - ey,
            self.center.x + ex,
            self.center.y + ey,
        )
    }

    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        let p = rotate_point(*point, self.center, -self.rotation);
        let nx = (p.x - self.center.x) / (self.radius_x + tolerance);
        let ny = (p.y - self.center.y) / (self.radius_y + tolerance);
        nx * nx + ny * ny <= 1.0
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.center.x += dx;
        self.center.y += dy;
    }

    pub fn resize(&mut self, handle: usize, dx: f64, dy: f64) {
        match handle {
            0 | 1 => self.radius_x = (self.radius_x + dx / 2.0).max(1.0),
            2 | 3 => self.radius_y = (self.radius_y + dy / 2.0).max(1.0),
            _ => {
                self.radius_x = (self.radius_x + dx / 2.0).max(1.0);
                self.radius_y = (self.radius_y + dy / 2.0).max(1.0);
            }
        }
    }
}

/// A closed polygon from an ordered vertex list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonShape {
    pub points: Vec<Point>,
    pub rotation: f64,
    pub style: ShapeStyle,
}

impl PolygonShape {
    /// Returns `None` for fewer than 3 vertices.
    pub fn new(points: Vec<Point>) -> Option<Self> {
        if points.len() < 3 {
            return None;
        }
        Some(Self {
            points,
            rotation: 0.0,
            style: ShapeStyle::default(),
        })
    }

    pub fn centroid(&self) -> Point {
        let n = self.points.len() as f64;
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Point::new(sx / n, sy / n)
    }

    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        let center = self.centroid();
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for &c in &self.points {
            let p = rotate_point(c, center, self.rotation);
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        (min_x, min_y, max_x, max_y)
    }

    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        let p = rotate_point(*point, self.centroid(), -self.rotation);
        if point_in_polygon(&p, &self.points) {
            return true;
        }
        // Near-edge hits count within tolerance.
        let n = self.points.len();
        (0..n).any(|i| {
            distance_to_segment(&p, &self.points[i], &self.points[(i + 1) % n]) <= tolerance
        })
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        for p in &mut self.points {
            p.x += dx;
            p.y += dy;
        }
    }

    pub fn resize(&mut self, _handle: usize, dx: f64, dy: f64) {
        let (min_x, min_y, max_x, max_y) = self.bounding_box();
        let width = max_x - min_x;
        let height = max_y - min_y;
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let sx = ((width + dx) / width).max(0.05);
        let sy = ((height + dy) / height).max(0.05);
        let center = self.centroid();
        for p in &mut self.points {
            p.x = center.x + (p.x - center.x) * sx;
            p.y = center.y + (p.y - center.y) * sy;
        }
    }
}

/// Ray-cast even-odd test against the vertex ring.
fn point_in_polygon(p: &Point, points: &[Point]) -> bool {
    let n = points.len();
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let a = points[i];
        let b = points[j];
        if (a.y > p.y) != (b.y > p.y) {
            let x = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

fn distance_to_segment(p: &Point, a: &Point, b: &Point) -> f64 {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let len_sq = abx * abx + aby * aby;
    if len_sq < 1e-12 {
        return p.distance_to(a);
    }
    let t = (((p.x - a.x) * abx + (p.y - a.y) * aby) / len_sq).clamp(0.0, 1.0);
    p.distance_to(&Point::new(a.x + t * abx, a.y + t * aby))
}

/// Enum wrapper for all drawable shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
    Oval(Oval),
    Polygon(PolygonShape),
}

impl Shape {
    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        match self {
            Shape::Rectangle(s) => s.bounding_box(),
            Shape::Circle(s) => s.bounding_box(),
            Shape::Oval(s) => s.bounding_box(),
            Shape::Polygon(s) => s.bounding_box(),
        }
    }

    /// Geometric center, used as the anchor for attached text labels.
    pub fn centroid(&self) -> Point {
        match self {
            Shape::Rectangle(s) => s.center(),
            Shape::Circle(s) => s.center,
            Shape::Oval(s) => s.center,
            Shape::Polygon(s) => s.centroid(),
        }
    }

    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        match self {
            Shape::Rectangle(s) => s.contains_point(point, tolerance),
            Shape::Circle(s) => s.contains_point(point, tolerance),
            Shape::Oval(s) => s.contains_point(point, tolerance),
            Shape::Polygon(s) => s.contains_point(point, tolerance),
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Shape::Rectangle(s) => s.translate(dx, dy),
            Shape::Circle(s) => s.translate(dx, dy),
            Shape::Oval(s) => s.translate(dx, dy),
            Shape::Polygon(s) => s.translate(dx, dy),
        }
    }

    pub fn resize(&mut self, handle: usize, dx: f64, dy: f64) {
        match self {
            Shape::Rectangle(s) => s.resize(handle, dx, dy),
            Shape::Circle(s) => s.resize(handle, dx, dy),
            Shape::Oval(s) => s.resize(handle, dx, dy),
            Shape::Polygon(s) => s.resize(handle, dx, dy),
        }
    }

    pub fn rotation(&self) -> f64 {
        match self {
            Shape::Rectangle(s) => s.rotation,
            Shape::Circle(_) => 0.0,
            Shape::Oval(s) => s.rotation,
            Shape::Polygon(s) => s.rotation,
        }
    }

    pub fn set_rotation(&mut self, angle_deg: f64) {
        match self {
            Shape::Rectangle(s) => s.rotation = angle_deg,
            Shape::Circle(_) => {}
            Shape::Oval(s) => s.rotation = angle_deg,
            Shape::Polygon(s) => s.rotation = angle_deg,
        }
    }

    pub fn style(&self) -> &ShapeStyle {
        match self {
            Shape::Rectangle(s) => &s.style,
            Shape::Circle(s) => &s.style,
            Shape::Oval(s) => &s.style,
            Shape::Polygon(s) => &s.style,
        }
    }

    pub fn style_mut(&mut self) -> &mut ShapeStyle {
        match self {
            Shape::Rectangle(s) => &mut s.style,
            Shape::Circle(s) => &mut s.style,
            Shape::Oval(s) => &mut s.style,
            Shape::Polygon(s) => &mut s.style,
        }
    }
}

/// An identified shape in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeObject {
    pub id: u64,
    pub shape: Shape,
}

/// Partial update applied to an existing shape. `None` fields are left
/// unchanged; removal is a separate operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeUpdate {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub rotation: Option<f64>,
    pub position: Option<Point>,
    pub size: Option<(f64, f64)>,
}
