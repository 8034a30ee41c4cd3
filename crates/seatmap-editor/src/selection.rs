//! Selection state: a primary entity plus seat/group multi-selection.

use std::collections::BTreeSet;

use crate::model::Point;
use crate::scene::Scene;

/// The primary selected entity. At most one category at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Seat(u64),
    Group(u64),
    Shape(u64),
    Text(u64),
}

/// Tracks the primary selection and the marquee/shift multi-selection of
/// seats and groups. Shapes and texts only ever have a primary selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionManager {
    primary: Selection,
    seat_ids: BTreeSet<u64>,
    group_ids: BTreeSet<u64>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primary(&self) -> Selection {
        self.primary
    }

    pub fn selected_seats(&self) -> impl Iterator<Item = u64> + '_ {
        self.seat_ids.iter().copied()
    }

    pub fn selected_groups(&self) -> impl Iterator<Item = u64> + '_ {
        self.group_ids.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.primary == Selection::None && self.seat_ids.is_empty() && self.group_ids.is_empty()
    }

    pub fn has_multi(&self) -> bool {
        !self.seat_ids.is_empty() || !self.group_ids.is_empty()
    }

    pub fn is_seat_selected(&self, id: u64) -> bool {
        self.seat_ids.contains(&id) || self.primary == Selection::Seat(id)
    }

    pub fn is_group_selected(&self, id: u64) -> bool {
        self.group_ids.contains(&id) || self.primary == Selection::Group(id)
    }

    pub fn clear(&mut self) {
        self.primary = Selection::None;
        self.seat_ids.clear();
        self.group_ids.clear();
    }

    /// Replaces the selection with a single seat.
    pub fn select_seat(&mut self, id: u64) {
        self.clear();
        self.primary = Selection::Seat(id);
        self.seat_ids.insert(id);
    }

    /// Replaces the selection with a single group.
    pub fn select_group(&mut self, id: u64) {
        self.clear();
        self.primary = Selection::Group(id);
        self.group_ids.insert(id);
    }

    pub fn select_shape(&mut self, id: u64) {
        self.clear();
        self.primary = Selection::Shape(id);
    }

    pub fn select_text(&mut self, id: u64) {
        self.clear();
        self.primary = Selection::Text(id);
    }

    /// Shift-click: toggles a seat in the multi-set without disturbing the
    /// other selected seats. The primary follows the last addition.
    pub fn toggle_seat(&mut self, id: u64) {
        if self.seat_ids.remove(&id) {
            if self.primary == Selection::Seat(id) {
                self.primary = match self.seat_ids.iter().next_back() {
                    Some(&last) => Selection::Seat(last),
                    None => Selection::None,
                };
            }
        } else {
            self.seat_ids.insert(id);
            self.primary = Selection::Seat(id);
        }
    }

    pub fn toggle_group(&mut self, id: u64) {
        if self.group_ids.remove(&id) {
            if self.primary == Selection::Group(id) {
                self.primary = match self.group_ids.iter().next_back() {
                    Some(&last) => Selection::Group(last),
                    None => Selection::None,
                };
            }
        } else {
            self.group_ids.insert(id);
            self.primary = Selection::Group(id);
        }
    }

    /// Applies a marquee rectangle: selects every seat whose center lies
    /// inside, and every group with at least one member inside. `additive`
    /// keeps the existing multi-selection (shift-marquee).
    pub fn apply_marquee(&mut self, scene: &Scene, a: Point, b: Point, additive: bool) {
        if !additive {
            self.clear();
        }
        let min_x = a.x.min(b.x);
        let max_x = a.x.max(b.x);
        let min_y = a.y.min(b.y);
        let max_y = a.y.max(b.y);
        let inside = |p: &Point| {
            p.x >= min_x && p.x <= max_x && p.y >= min_y && p.y <= max_y
        };
        for seat in &scene.seats {
            if inside(&seat.position) {
                self.seat_ids.insert(seat.id);
                self.primary = Selection::Seat(seat.id);
            }
        }
        for group in &scene.groups {
            let any_member = group
                .seat_ids
                .iter()
                .filter_map(|&id| scene.seat(id))
                .any(|s| inside(&s.position));
            if any_member {
                self.group_ids.insert(group.id);
                self.primary = Selection::Group(group.id);
            }
        }
    }

    /// Drops selection entries whose entities no longer exist.
    pub fn prune(&mut self, scene: &Scene) {
        self.seat_ids.retain(|&id| scene.seat(id).is_some());
        self.group_ids.retain(|&id| scene.group(id).is_some());
        let gone = match self.primary {
            Selection::None => false,
            Selection::Seat(id) => scene.seat(id).is_none(),
            Selection::Group(id) => scene.group(id).is_none(),
            Selection::Shape(id) => scene.shape(id).is_none(),
            Selection::Text(id) => scene.text(id).is_none(),
        };
        if gone {
            self.primary = Selection::None;
        }
    }
}
