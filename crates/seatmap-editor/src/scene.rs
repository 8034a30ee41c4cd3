//! The scene aggregate: owns every entity and all structural mutations.

use serde::{Deserialize, Serialize};
use tracing::warn;

use seatmap_core::constants::{GRID_SPACING, GROUP_MARGIN, SEAT_RADIUS};

use crate::model::{
    snap, Point, Seat, SeatGroup, Shape, ShapeObject, ShapeUpdate, TextLabel,
};

/// Complete editable document state. Entities live in insertion-order
/// vectors; later entries render (and hit-test) on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub seats: Vec<Seat>,
    pub groups: Vec<SeatGroup>,
    pub shapes: Vec<ShapeObject>,
    pub texts: Vec<TextLabel>,
    next_id: u64,
    seat_seq: u64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            seats: Vec::new(),
            groups: Vec::new(),
            shapes: Vec::new(),
            texts: Vec::new(),
            next_id: 1,
            seat_seq: 1,
        }
    }

    /// Issues the next unique entity id.
    pub fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Issues the next sequential seat label ("S1", "S2", ...).
    pub fn next_seat_label(&mut self) -> String {
        let n = self.seat_seq;
        self.seat_seq += 1;
        format!("S{}", n)
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
            && self.groups.is_empty()
            && self.shapes.is_empty()
            && self.texts.is_empty()
    }

    // --- lookups ---

    pub fn seat(&self, id: u64) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id == id)
    }

    pub fn seat_mut(&mut self, id: u64) -> Option<&mut Seat> {
        self.seats.iter_mut().find(|s| s.id == id)
    }

    pub fn group(&self, id: u64) -> Option<&SeatGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn group_mut(&mut self, id: u64) -> Option<&mut SeatGroup> {
        self.groups.iter_mut().find(|g| g.id == id)
    }

    pub fn shape(&self, id: u64) -> Option<&ShapeObject> {
        self.shapes.iter().find(|s| s.id == id)
    }

    pub fn shape_mut(&mut self, id: u64) -> Option<&mut ShapeObject> {
        self.shapes.iter_mut().find(|s| s.id == id)
    }

    pub fn text(&self, id: u64) -> Option<&TextLabel> {
        self.texts.iter().find(|t| t.id == id)
    }

    pub fn text_mut(&mut self, id: u64) -> Option<&mut TextLabel> {
        self.texts.iter_mut().find(|t| t.id == id)
    }

    /// Group containing the given seat, if any.
    pub fn group_of_seat(&self, seat_id: u64) -> Option<&SeatGroup> {
        self.groups.iter().find(|g| g.seat_ids.contains(&seat_id))
    }

    // --- hit tests (topmost entity wins) ---

    pub fn seat_at(&self, p: &Point) -> Option<&Seat> {
        self.seats
            .iter()
            .rev()
            .find(|s| s.position.distance_to(p) <= SEAT_RADIUS)
    }

    pub fn group_at(&self, p: &Point) -> Option<&SeatGroup> {
        self.groups.iter().rev().find(|g| g.contains_point(p))
    }

    pub fn shape_at(&self, p: &Point, tolerance: f64) -> Option<&ShapeObject> {
        self.shapes
            .iter()
            .rev()
            .find(|s| s.shape.contains_point(p, tolerance))
    }

    pub fn text_at(&self, p: &Point) -> Option<&TextLabel> {
        self.texts.iter().rev().find(|t| {
            let anchor = self.text_anchor(t);
            // Approximate extent box; good enough for picking.
            let half_w = (t.content.chars().count() as f64 * t.font_size * 0.6 / 2.0).max(8.0);
            let half_h = t.font_size / 2.0 + 4.0;
            p.x >= anchor.x - half_w
                && p.x <= anchor.x + half_w
                && p.y >= anchor.y - half_h
                && p.y <= anchor.y + half_h
        })
    }

    /// Render anchor of a label: its own position, or the attached shape's
    /// centroid. A dangling `shape_id` falls back to the stored position.
    pub fn text_anchor(&self, label: &TextLabel) -> Point {
        match label.shape_id.and_then(|id| self.shape(id)) {
            Some(obj) => obj.shape.centroid(),
            None => label.position,
        }
    }

    // --- insertion ---

    pub fn add_seat(&mut self, position: Point) -> u64 {
        let id = self.generate_id();
        let label = self.next_seat_label();
        self.seats.push(Seat::new(id, position, label));
        id
    }

    pub fn add_shape(&mut self, shape: Shape) -> u64 {
        let id = self.generate_id();
        self.shapes.push(ShapeObject { id, shape });
        id
    }

    pub fn add_text(&mut self, label: TextLabel) -> u64 {
        let id = label.id;
        self.texts.push(label);
        id
    }

    /// Creates a group over existing seats and fits its frame.
    pub fn add_group(&mut self, seat_ids: Vec<u64>) -> u64 {
        let id = self.generate_id();
        self.groups.push(SeatGroup::new(id, seat_ids));
        self.refresh_group_bounds(id);
        id
    }

    // --- deletion with cascades ---

    /// Removes a seat. A containing group shrinks and its frame refits; an
    /// emptied group stays in the scene until deleted explicitly.
    pub fn delete_seat(&mut self, id: u64) -> bool {
        let before = self.seats.len();
        self.seats.retain(|s| s.id != id);
        if self.seats.len() == before {
            return false;
        }
        let owner = self
            .groups
            .iter()
            .position(|g| g.seat_ids.contains(&id))
            .map(|i| self.groups[i].id);
        if let Some(group_id) = owner {
            if let Some(g) = self.group_mut(group_id) {
                g.seat_ids.retain(|&sid| sid != id);
            }
            self.refresh_group_bounds(group_id);
        }
        true
    }

    /// Removes a group and every member seat.
    pub fn delete_group(&mut self, id: u64) -> bool {
        let Some(idx) = self.groups.iter().position(|g| g.id == id) else {
            return false;
        };
        let group = self.groups.remove(idx);
        self.seats.retain(|s| !group.seat_ids.contains(&s.id));
        true
    }

    /// Removes a shape and every text label attached to it.
    pub fn delete_shape(&mut self, id: u64) -> bool {
        let before = self.shapes.len();
        self.shapes.retain(|s| s.id != id);
        if self.shapes.len() == before {
            return false;
        }
        self.texts.retain(|t| t.shape_id != Some(id));
        true
    }

    pub fn delete_text(&mut self, id: u64) -> bool {
        let before = self.texts.len();
        self.texts.retain(|t| t.id != id);
        self.texts.len() != before
    }

    // --- updates ---

    /// Applies a partial update to a shape. Unknown ids are logged and
    /// ignored.
    pub fn update_shape(&mut self, id: u64, update: ShapeUpdate) -> bool {
        let Some(obj) = self.shape_mut(id) else {
            warn!(shape_id = id, "update for unknown shape");
            return false;
        };
        if let Some(pos) = update.position {
            let centroid = obj.shape.centroid();
            obj.shape.translate(pos.x - centroid.x, pos.y - centroid.y);
        }
        if let Some((w, h)) = update.size {
            let (min_x, min_y, max_x, max_y) = obj.shape.bounding_box();
            obj.shape
                .resize(3, w - (max_x - min_x), h - (max_y - min_y));
        }
        if let Some(rotation) = update.rotation {
            obj.shape.set_rotation(rotation);
        }
        let style = obj.shape.style_mut();
        if let Some(fill) = update.fill {
            style.fill = fill;
        }
        if let Some(stroke) = update.stroke {
            style.stroke = stroke;
        }
        if let Some(width) = update.stroke_width {
            style.stroke_width = width;
        }
        true
    }

    /// Refits a group frame to the minimal bounding box of its member seats
    /// plus a fixed margin. An empty group collapses to a zero-size frame.
    pub fn refresh_group_bounds(&mut self, id: u64) {
        let Some(idx) = self.groups.iter().position(|g| g.id == id) else {
            return;
        };
        let member_ids = self.groups[idx].seat_ids.clone();
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        let mut any = false;
        for seat in self.seats.iter().filter(|s| member_ids.contains(&s.id)) {
            any = true;
            min_x = min_x.min(seat.position.x - SEAT_RADIUS);
            min_y = min_y.min(seat.position.y - SEAT_RADIUS);
            max_x = max_x.max(seat.position.x + SEAT_RADIUS);
            max_y = max_y.max(seat.position.y + SEAT_RADIUS);
        }
        let group = &mut self.groups[idx];
        if !any {
            group.width = 0.0;
            group.height = 0.0;
            return;
        }
        group.origin = Point::new(min_x - GROUP_MARGIN, min_y - GROUP_MARGIN);
        group.width = (max_x - min_x) + 2.0 * GROUP_MARGIN;
        group.height = (max_y - min_y) + 2.0 * GROUP_MARGIN;
    }

    /// Moves a group and its member seats by a grid-snapped delta. Returns
    /// the snapped delta actually applied.
    pub fn update_seat_group_position(&mut self, id: u64, dx: f64, dy: f64) -> (f64, f64) {
        let sdx = snap(dx, GRID_SPACING);
        let sdy = snap(dy, GRID_SPACING);
        if sdx == 0.0 && sdy == 0.0 {
            return (0.0, 0.0);
        }
        let Some(idx) = self.groups.iter().position(|g| g.id == id) else {
            return (0.0, 0.0);
        };
        let member_ids = self.groups[idx].seat_ids.clone();
        for seat in self.seats.iter_mut().filter(|s| member_ids.contains(&s.id)) {
            seat.position.x += sdx;
            seat.position.y += sdy;
        }
        let group = &mut self.groups[idx];
        group.origin.x += sdx;
        group.origin.y += sdy;
        (sdx, sdy)
    }

    /// Sets a group's display rotation. Member seat positions are untouched.
    pub fn update_seat_group_rotation(&mut self, id: u64, angle_deg: f64) {
        if let Some(g) = self.group_mut(id) {
            g.rotation = angle_deg;
        }
    }

    /// Replaces the seat population (import path). Shapes and texts are
    /// kept; groups are dropped because the wire format does not carry them.
    pub fn replace_seats(&mut self, seats: Vec<Seat>) {
        let max_id = seats.iter().map(|s| s.id).max().unwrap_or(0);
        self.next_id = self.next_id.max(max_id + 1);
        self.seat_seq = self.seat_seq.max(seats.len() as u64 + 1);
        self.seats = seats;
        self.groups.clear();
    }
}
