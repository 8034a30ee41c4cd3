//! The editor facade: owns all state and interprets pointer/key events.

use tracing::{debug, warn};

use seatmap_core::constants::{GRID_SPACING, PASTE_OFFSET};

use crate::clipboard::{Clipboard, ClipboardContent};
use crate::history::History;
use crate::model::{
    snap_point, Circle, Oval, Point, PolygonShape, Rectangle, Shape, TextLabel,
};
use crate::scene::Scene;
use crate::selection::{Selection, SelectionManager};
use crate::tools::{block_rows, row_positions, PendingDraw, ShapeKind, Tool};
use crate::viewport::Viewport;

/// Modifier keys accompanying a pointer or key event. `primary` is Ctrl on
/// Linux/Windows and Cmd on macOS.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub primary: bool,
    pub shift: bool,
    pub alt: bool,
}

/// Non-text keys the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Delete,
    Backspace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragTarget {
    Seat(u64),
    Group(u64),
    Shape(u64),
    Text(u64),
}

/// An in-flight move drag. `applied` is the grid-snapped total delta already
/// written into the scene; `before` is the pre-drag snapshot recorded into
/// history once the drag actually moved something.
#[derive(Debug, Clone)]
struct DragState {
    target: DragTarget,
    origin: Point,
    applied: (f64, f64),
    before: Scene,
}

/// Headless seat layout editor. A hosting UI feeds pointer and keyboard
/// events in screen coordinates; the editor maintains scene, viewport,
/// selection, history and clipboard state.
#[derive(Debug, Default)]
pub struct SeatMapEditor {
    pub scene: Scene,
    pub viewport: Viewport,
    pub selection: SelectionManager,
    history: History,
    clipboard: Clipboard,
    tool: Tool,
    pending: PendingDraw,
    drag: Option<DragState>,
    /// Pre-gesture snapshot for handle drags driven through the direct edit
    /// operations; committed as one history entry on `end_gesture`.
    gesture: Option<Scene>,
    pan_anchor: Option<Point>,
    is_modified: bool,
}

impl SeatMapEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// In-progress drawing state, exposed for preview rendering.
    pub fn pending(&self) -> &PendingDraw {
        &self.pending
    }

    /// Seat positions a pending row or block drag would create, for ghost
    /// rendering. `None` while no row drag is active.
    pub fn row_preview(&self) -> Option<Vec<Point>> {
        match &self.pending {
            PendingDraw::Row { start, current } => {
                Some(row_positions(*start, *current, GRID_SPACING))
            }
            PendingDraw::Rows { start, current } => Some(
                block_rows(*start, *current, GRID_SPACING)
                    .into_iter()
                    .flatten()
                    .collect(),
            ),
            _ => None,
        }
    }

    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    pub fn mark_saved(&mut self) {
        self.is_modified = false;
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    /// Switches tools. A pending polygon with enough vertices is committed,
    /// any other pending drawing is discarded.
    pub fn set_tool(&mut self, tool: Tool) {
        if let PendingDraw::Polygon { points } = std::mem::take(&mut self.pending) {
            self.commit_polygon(points);
        }
        self.pending = PendingDraw::None;
        self.drag = None;
        self.gesture = None;
        self.tool = tool;
        debug!(?tool, "tool selected");
    }

    /// Records the current scene as an undo point.
    fn checkpoint(&mut self) {
        self.history.record(self.scene.clone());
        self.is_modified = true;
    }

    /// Checkpoint for the direct edit operations. Inside a gesture the
    /// snapshot is already captured, so repeated per-move calls collapse
    /// into the single entry committed by [`end_gesture`](Self::end_gesture).
    fn edit_checkpoint(&mut self) {
        if self.gesture.is_some() {
            self.is_modified = true;
        } else {
            self.checkpoint();
        }
    }

    /// Starts a handle-drag gesture: resize/rotate/text edits until
    /// `end_gesture` become one undo step.
    pub fn begin_gesture(&mut self) {
        if self.gesture.is_none() {
            self.gesture = Some(self.scene.clone());
        }
    }

    /// Ends a handle-drag gesture, recording the pre-gesture scene when
    /// anything actually changed.
    pub fn end_gesture(&mut self) {
        if let Some(before) = self.gesture.take() {
            if before != self.scene {
                self.history.record(before);
                self.is_modified = true;
            }
        }
    }

    // --- pointer events (screen coordinates) ---

    pub fn pointer_down(&mut self, screen: Point, mods: Modifiers) {
        if mods.alt || self.tool == Tool::Pan {
            self.pan_anchor = Some(screen);
            return;
        }
        let logical = self.viewport.screen_to_logical(screen);
        let snapped = snap_point(logical, GRID_SPACING);
        match self.tool {
            Tool::Select => self.select_down(logical, mods),
            Tool::Seat => {
                self.checkpoint();
                let id = self.scene.add_seat(snapped);
                self.selection.select_seat(id);
            }
            Tool::Row => {
                self.pending = PendingDraw::Row {
                    start: snapped,
                    current: snapped,
                }
            }
            Tool::Rows => {
                self.pending = PendingDraw::Rows {
                    start: snapped,
                    current: snapped,
                }
            }
            Tool::Text => self.place_text(snapped),
            Tool::Rectangle => {
                self.pending = PendingDraw::Shape {
                    kind: ShapeKind::Rectangle,
                    start: snapped,
                    current: snapped,
                }
            }
            Tool::Circle => {
                self.pending = PendingDraw::Shape {
                    kind: ShapeKind::Circle,
                    start: snapped,
                    current: snapped,
                }
            }
            Tool::Oval => {
                self.pending = PendingDraw::Shape {
                    kind: ShapeKind::Oval,
                    start: snapped,
                    current: snapped,
                }
            }
            Tool::Polygon => match &mut self.pending {
                PendingDraw::Polygon { points } => points.push(snapped),
                _ => self.pending = PendingDraw::Polygon { points: vec![snapped] },
            },
            Tool::Erase => self.erase_at(logical),
            Tool::Pan => {}
        }
    }

    pub fn pointer_move(&mut self, screen: Point) {
        if let Some(anchor) = self.pan_anchor {
            self.viewport.pan_by(screen.x - anchor.x, screen.y - anchor.y);
            self.pan_anchor = Some(screen);
            return;
        }
        let logical = self.viewport.screen_to_logical(screen);
        if self.drag.is_some() {
            self.drag_move(logical);
            return;
        }
        match &mut self.pending {
            PendingDraw::Shape { current, .. }
            | PendingDraw::Row { current, .. }
            | PendingDraw::Rows { current, .. } => {
                *current = snap_point(logical, GRID_SPACING);
            }
            PendingDraw::Marquee { current, .. } => *current = logical,
            _ => {}
        }
    }

    pub fn pointer_up(&mut self, screen: Point, mods: Modifiers) {
        if self.pan_anchor.take().is_some() {
            return;
        }
        let logical = self.viewport.screen_to_logical(screen);
        if let Some(drag) = self.drag.take() {
            self.finish_drag(drag);
            return;
        }
        match std::mem::take(&mut self.pending) {
            PendingDraw::Row { start, .. } => {
                let end = snap_point(logical, GRID_SPACING);
                self.commit_row(start, end);
            }
            PendingDraw::Rows { start, .. } => {
                let end = snap_point(logical, GRID_SPACING);
                self.commit_block(start, end);
            }
            PendingDraw::Shape { kind, start, .. } => {
                let end = snap_point(logical, GRID_SPACING);
                self.commit_shape(kind, start, end);
            }
            PendingDraw::Marquee { start, .. } => {
                self.selection
                    .apply_marquee(&self.scene, start, logical, mods.shift);
            }
            // Polygon vertices accumulate across clicks.
            polygon @ PendingDraw::Polygon { .. } => self.pending = polygon,
            PendingDraw::None => {}
        }
    }

    /// Double-click commits a pending polygon.
    pub fn pointer_double_click(&mut self, _screen: Point) {
        if let PendingDraw::Polygon { points } = std::mem::take(&mut self.pending) {
            self.commit_polygon(points);
        }
    }

    /// Wheel input: with the primary modifier held it zooms at the cursor,
    /// otherwise it scrolls the view vertically.
    pub fn wheel(&mut self, cursor: Point, delta_y: f64, mods: Modifiers) {
        if mods.primary {
            self.viewport.wheel_zoom(cursor, delta_y > 0.0);
        } else {
            self.viewport.pan_by(0.0, delta_y);
        }
    }

    // --- keyboard ---

    pub fn key_down(&mut self, key: Key, mods: Modifiers) {
        if mods.primary {
            if let Key::Char(c) = key {
                match c.to_ascii_lowercase() {
                    'z' if mods.shift => self.redo(),
                    'z' => self.undo(),
                    'y' => self.redo(),
                    'c' => self.copy_selected(),
                    'x' => self.cut_selected(),
                    'v' => self.paste(),
                    _ => {}
                }
            }
            return;
        }
        match key {
            Key::Delete | Key::Backspace => self.delete_selected(),
            Key::Escape => {
                // Escape cancels a pending drawing before touching selection.
                if !self.pending.is_none() {
                    self.pending = PendingDraw::None;
                } else {
                    self.selection.clear();
                }
            }
            Key::Enter => {
                if let PendingDraw::Polygon { points } = std::mem::take(&mut self.pending) {
                    self.commit_polygon(points);
                }
            }
            Key::Char(c) => {
                if let Some(tool) = Tool::from_shortcut(c) {
                    self.set_tool(tool);
                }
            }
        }
    }

    // --- select tool ---

    fn select_down(&mut self, logical: Point, mods: Modifiers) {
        let tolerance = 3.0 / self.viewport.zoom;
        if let Some(seat) = self.scene.seat_at(&logical) {
            let seat_id = seat.id;
            // A seat inside a group selects (and drags) the whole group.
            if let Some(group) = self.scene.group_of_seat(seat_id) {
                let group_id = group.id;
                if mods.shift {
                    self.selection.toggle_group(group_id);
                } else {
                    self.selection.select_group(group_id);
                }
                self.start_drag(DragTarget::Group(group_id), logical);
            } else {
                if mods.shift {
                    self.selection.toggle_seat(seat_id);
                } else {
                    self.selection.select_seat(seat_id);
                }
                self.start_drag(DragTarget::Seat(seat_id), logical);
            }
            return;
        }
        if let Some(label) = self.scene.text_at(&logical) {
            let id = label.id;
            let free = label.shape_id.is_none();
            self.selection.select_text(id);
            if free {
                self.start_drag(DragTarget::Text(id), logical);
            }
            return;
        }
        if let Some(obj) = self.scene.shape_at(&logical, tolerance) {
            let id = obj.id;
            self.selection.select_shape(id);
            self.start_drag(DragTarget::Shape(id), logical);
            return;
        }
        if let Some(group) = self.scene.group_at(&logical) {
            let id = group.id;
            if mods.shift {
                self.selection.toggle_group(id);
            } else {
                self.selection.select_group(id);
            }
            self.start_drag(DragTarget::Group(id), logical);
            return;
        }
        if !mods.shift {
            self.selection.clear();
        }
        self.pending = PendingDraw::Marquee {
            start: logical,
            current: logical,
        };
    }

    fn start_drag(&mut self, target: DragTarget, origin: Point) {
        self.drag = Some(DragState {
            target,
            origin,
            applied: (0.0, 0.0),
            before: self.scene.clone(),
        });
    }

    fn drag_move(&mut self, logical: Point) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        let total = snap_point(
            Point::new(logical.x - drag.origin.x, logical.y - drag.origin.y),
            GRID_SPACING,
        );
        let dx = total.x - drag.applied.0;
        let dy = total.y - drag.applied.1;
        if dx == 0.0 && dy == 0.0 {
            return;
        }
        drag.applied = (total.x, total.y);
        let target = drag.target;
        match target {
            DragTarget::Seat(id) => {
                if let Some(seat) = self.scene.seat_mut(id) {
                    seat.position.x += dx;
                    seat.position.y += dy;
                }
            }
            DragTarget::Group(id) => {
                let member_ids = self
                    .scene
                    .group(id)
                    .map(|g| g.seat_ids.clone())
                    .unwrap_or_default();
                for seat in self
                    .scene
                    .seats
                    .iter_mut()
                    .filter(|s| member_ids.contains(&s.id))
                {
                    seat.position.x += dx;
                    seat.position.y += dy;
                }
                if let Some(group) = self.scene.group_mut(id) {
                    group.origin.x += dx;
                    group.origin.y += dy;
                }
            }
            DragTarget::Shape(id) => {
                if let Some(obj) = self.scene.shape_mut(id) {
                    obj.shape.translate(dx, dy);
                }
            }
            DragTarget::Text(id) => {
                if let Some(label) = self.scene.text_mut(id) {
                    label.position.x += dx;
                    label.position.y += dy;
                }
            }
        }
    }

    fn finish_drag(&mut self, drag: DragState) {
        if drag.applied == (0.0, 0.0) {
            return;
        }
        self.history.record(drag.before);
        self.is_modified = true;
    }

    // --- tool commits ---

    fn commit_row(&mut self, start: Point, end: Point) {
        self.checkpoint();
        let positions = row_positions(start, end, GRID_SPACING);
        let mut seat_ids = Vec::with_capacity(positions.len());
        for (col, pos) in positions.into_iter().enumerate() {
            let id = self.scene.add_seat(pos);
            if let Some(seat) = self.scene.seat_mut(id) {
                seat.row = Some(1);
                seat.column = Some(col as u32 + 1);
            }
            seat_ids.push(id);
        }
        let group_id = self.scene.add_group(seat_ids);
        self.selection.select_group(group_id);
    }

    fn commit_block(&mut self, a: Point, b: Point) {
        self.checkpoint();
        let mut last_group = None;
        for (row_idx, row) in block_rows(a, b, GRID_SPACING).into_iter().enumerate() {
            let mut seat_ids = Vec::with_capacity(row.len());
            for (col, pos) in row.into_iter().enumerate() {
                let id = self.scene.add_seat(pos);
                if let Some(seat) = self.scene.seat_mut(id) {
                    seat.row = Some(row_idx as u32 + 1);
                    seat.column = Some(col as u32 + 1);
                }
                seat_ids.push(id);
            }
            last_group = Some(self.scene.add_group(seat_ids));
        }
        self.selection.clear();
        if let Some(id) = last_group {
            self.selection.select_group(id);
        }
    }

    fn commit_shape(&mut self, kind: ShapeKind, start: Point, end: Point) {
        let min_x = start.x.min(end.x);
        let min_y = start.y.min(end.y);
        let width = (end.x - start.x).abs();
        let height = (end.y - start.y).abs();
        let shape = match kind {
            ShapeKind::Rectangle => {
                Rectangle::new(min_x, min_y, width, height).map(Shape::Rectangle)
            }
            ShapeKind::Circle => {
                let radius = start.distance_to(&end);
                Circle::new(start, radius).map(Shape::Circle)
            }
            ShapeKind::Oval => {
                let center = Point::new((start.x + end.x) / 2.0, (start.y + end.y) / 2.0);
                Oval::new(center, width / 2.0, height / 2.0).map(Shape::Oval)
            }
        };
        // Zero-size drags produce nothing.
        let Some(shape) = shape else {
            return;
        };
        self.checkpoint();
        let id = self.scene.add_shape(shape);
        self.selection.select_shape(id);
    }

    fn commit_polygon(&mut self, points: Vec<Point>) {
        let Some(polygon) = PolygonShape::new(points) else {
            return;
        };
        self.checkpoint();
        let id = self.scene.add_shape(Shape::Polygon(polygon));
        self.selection.select_shape(id);
    }

    /// Creates a free label at the snapped point. Attaching it to a shape
    /// is a separate, explicit operation.
    fn place_text(&mut self, snapped: Point) {
        self.checkpoint();
        let id = self.scene.generate_id();
        self.scene.add_text(TextLabel::new(id, snapped, "Text"));
        self.selection.select_text(id);
    }

    fn erase_at(&mut self, logical: Point) {
        let tolerance = 3.0 / self.viewport.zoom;
        let target = if let Some(seat) = self.scene.seat_at(&logical) {
            Some(DragTarget::Seat(seat.id))
        } else if let Some(label) = self.scene.text_at(&logical) {
            Some(DragTarget::Text(label.id))
        } else if let Some(obj) = self.scene.shape_at(&logical, tolerance) {
            Some(DragTarget::Shape(obj.id))
        } else {
            self.scene.group_at(&logical).map(|g| DragTarget::Group(g.id))
        };
        let Some(target) = target else {
            return;
        };
        self.checkpoint();
        match target {
            DragTarget::Seat(id) => {
                self.scene.delete_seat(id);
            }
            DragTarget::Text(id) => {
                self.scene.delete_text(id);
            }
            DragTarget::Shape(id) => {
                self.scene.delete_shape(id);
            }
            DragTarget::Group(id) => {
                self.scene.delete_group(id);
            }
        }
        self.selection.prune(&self.scene);
    }

    // --- history ---

    pub fn undo(&mut self) {
        if let Some(restored) = self.history.undo(self.scene.clone()) {
            self.scene = restored;
            self.selection.clear();
            self.pending = PendingDraw::None;
            self.gesture = None;
            self.is_modified = true;
        }
    }

    pub fn redo(&mut self) {
        if let Some(restored) = self.history.redo(self.scene.clone()) {
            self.scene = restored;
            self.selection.clear();
            self.pending = PendingDraw::None;
            self.gesture = None;
            self.is_modified = true;
        }
    }

    // --- clipboard ---

    /// Captures the current selection into the clipboard.
    pub fn copy_selected(&mut self) {
        let content = match self.selection.primary() {
            Selection::Shape(id) => self.scene.shape(id).map(|obj| ClipboardContent::Shape {
                shape: obj.shape.clone(),
                labels: self
                    .scene
                    .texts
                    .iter()
                    .filter(|t| t.shape_id == Some(id))
                    .cloned()
                    .collect(),
            }),
            Selection::Text(id) => self.scene.text(id).cloned().map(ClipboardContent::Text),
            Selection::None => None,
            Selection::Seat(_) | Selection::Group(_) => {
                let groups: Vec<_> = self
                    .selection
                    .selected_groups()
                    .filter_map(|id| self.scene.group(id))
                    .cloned()
                    .collect();
                let mut seat_ids: Vec<u64> = self.selection.selected_seats().collect();
                for group in &groups {
                    for &id in &group.seat_ids {
                        if !seat_ids.contains(&id) {
                            seat_ids.push(id);
                        }
                    }
                }
                let seats: Vec<_> = seat_ids
                    .into_iter()
                    .filter_map(|id| self.scene.seat(id))
                    .cloned()
                    .collect();
                if seats.is_empty() {
                    None
                } else {
                    Some(ClipboardContent::Seats { seats, groups })
                }
            }
        };
        if let Some(content) = content {
            self.clipboard.set(content);
        }
    }

    /// Copy, then delete the selection.
    pub fn cut_selected(&mut self) {
        self.copy_selected();
        if !self.clipboard.is_empty() {
            self.delete_selected();
        }
    }

    /// Pastes the clipboard at a fixed offset from the copied position and
    /// selects the clones. The clipboard keeps its content.
    pub fn paste(&mut self) {
        let Some(content) = self.clipboard.get().cloned() else {
            return;
        };
        self.checkpoint();
        match content {
            ClipboardContent::Seats { seats, groups } => {
                self.selection.clear();
                let mut id_map = std::collections::HashMap::new();
                for seat in seats {
                    let new_id = self.scene.generate_id();
                    id_map.insert(seat.id, new_id);
                    let mut clone = seat;
                    clone.id = new_id;
                    clone.position.x += PASTE_OFFSET;
                    clone.position.y += PASTE_OFFSET;
                    self.scene.seats.push(clone);
                }
                let had_groups = !groups.is_empty();
                for group in groups {
                    let seat_ids: Vec<u64> = group
                        .seat_ids
                        .iter()
                        .filter_map(|old| id_map.get(old).copied())
                        .collect();
                    let new_id = self.scene.add_group(seat_ids);
                    self.selection.toggle_group(new_id);
                }
                if !had_groups {
                    for &new_id in id_map.values() {
                        self.selection.toggle_seat(new_id);
                    }
                }
            }
            ClipboardContent::Shape { mut shape, labels } => {
                shape.translate(PASTE_OFFSET, PASTE_OFFSET);
                let shape_id = self.scene.add_shape(shape);
                for label in labels {
                    let id = self.scene.generate_id();
                    let mut clone = label;
                    clone.id = id;
                    clone.shape_id = Some(shape_id);
                    self.scene.add_text(clone);
                }
                self.selection.select_shape(shape_id);
            }
            ClipboardContent::Text(label) => {
                let id = self.scene.generate_id();
                let mut clone = label;
                clone.id = id;
                clone.shape_id = None;
                clone.position.x += PASTE_OFFSET;
                clone.position.y += PASTE_OFFSET;
                self.scene.add_text(clone);
                self.selection.select_text(id);
            }
        }
    }

    // --- direct edit operations (property panel / handle gestures) ---

    /// Applies a partial update to a shape through the undo history.
    pub fn update_shape(&mut self, id: u64, update: crate::model::ShapeUpdate) {
        if self.scene.shape(id).is_none() {
            return;
        }
        self.edit_checkpoint();
        self.scene.update_shape(id, update);
    }

    /// Resizes the primary selected shape by dragging `handle` (corner
    /// index) by a logical-space delta.
    pub fn resize_selected(&mut self, handle: usize, dx: f64, dy: f64) {
        if let Selection::Shape(id) = self.selection.primary() {
            self.edit_checkpoint();
            if let Some(obj) = self.scene.shape_mut(id) {
                obj.shape.resize(handle, dx, dy);
            }
        }
    }

    /// Sets the rotation of the primary selected shape, group or text.
    pub fn set_selected_rotation(&mut self, angle_deg: f64) {
        match self.selection.primary() {
            Selection::Shape(id) => {
                self.edit_checkpoint();
                if let Some(obj) = self.scene.shape_mut(id) {
                    obj.shape.set_rotation(angle_deg);
                }
            }
            Selection::Group(id) => {
                self.edit_checkpoint();
                self.scene.update_seat_group_rotation(id, angle_deg);
            }
            Selection::Text(id) => {
                self.edit_checkpoint();
                if let Some(label) = self.scene.text_mut(id) {
                    label.rotation = angle_deg;
                }
            }
            Selection::Seat(_) | Selection::None => {}
        }
    }

    /// Anchors a label to a shape. The label then renders at the shape's
    /// centroid and is deleted with it.
    pub fn attach_text_to_shape(&mut self, text_id: u64, shape_id: u64) {
        if self.scene.text(text_id).is_none() || self.scene.shape(shape_id).is_none() {
            warn!(text_id, shape_id, "attach target not found");
            return;
        }
        self.checkpoint();
        if let Some(label) = self.scene.text_mut(text_id) {
            label.shape_id = Some(shape_id);
        }
    }

    /// Releases a label from its shape, keeping it where it was rendered.
    pub fn detach_text(&mut self, text_id: u64) {
        let Some(label) = self.scene.text(text_id) else {
            return;
        };
        if label.shape_id.is_none() {
            return;
        }
        let anchor = self.scene.text_anchor(label);
        self.checkpoint();
        if let Some(label) = self.scene.text_mut(text_id) {
            label.position = anchor;
            label.shape_id = None;
        }
    }

    /// Sets the content of the primary selected text label.
    pub fn set_selected_text(&mut self, content: &str, font_size: f64) {
        if let Selection::Text(id) = self.selection.primary() {
            self.edit_checkpoint();
            if let Some(label) = self.scene.text_mut(id) {
                label.content = content.to_string();
                label.font_size = font_size;
            }
        }
    }

    // --- import/export ---

    /// Replaces the seat population from the host's JSON seat array. The
    /// input is parsed and validated in full before the scene is touched, so
    /// a failed import leaves the editor unchanged.
    pub fn import_seats(&mut self, json: &str) -> crate::Result<()> {
        let records = crate::serialization::records_from_json(json)?;
        let seats = crate::serialization::seats_from_records(records)?;
        self.checkpoint();
        self.scene.replace_seats(seats);
        self.selection.clear();
        self.pending = PendingDraw::None;
        self.gesture = None;
        Ok(())
    }

    /// The host's JSON seat array for the current scene.
    pub fn export_seats_json(&self) -> anyhow::Result<String> {
        crate::serialization::records_to_json(&self.scene)
    }

    /// SVG rendition of the scene at the viewport's canvas size.
    pub fn export_svg(&self) -> String {
        crate::export::scene_to_svg(
            &self.scene,
            self.viewport.canvas_width,
            self.viewport.canvas_height,
        )
    }

    /// PDF rendition of the scene at the viewport's canvas size.
    pub fn export_pdf(&self, title: &str) -> crate::Result<Vec<u8>> {
        crate::export::scene_to_pdf(
            &self.scene,
            self.viewport.canvas_width,
            self.viewport.canvas_height,
            title,
        )
    }

    /// Saves the full design (scene + viewport) to a `.seatmap` file.
    pub fn save_design(
        &mut self,
        name: &str,
        path: impl AsRef<std::path::Path>,
    ) -> anyhow::Result<()> {
        let file =
            crate::serialization::DesignFile::new(name, self.scene.clone(), self.viewport);
        file.save_to_file(path)?;
        self.is_modified = false;
        Ok(())
    }

    /// Loads a design file, replacing the scene and viewport. History and
    /// selection are reset.
    pub fn load_design(&mut self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        let file = crate::serialization::DesignFile::load_from_file(path)?;
        self.scene = file.scene;
        self.viewport = file.viewport;
        self.selection.clear();
        self.history.clear();
        self.pending = PendingDraw::None;
        self.gesture = None;
        self.is_modified = false;
        Ok(())
    }

    /// Deletes everything selected. Multi-selected seats and groups take
    /// precedence over a primary shape or text.
    pub fn delete_selected(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        self.checkpoint();
        if self.selection.has_multi() {
            let groups: Vec<u64> = self.selection.selected_groups().collect();
            let seats: Vec<u64> = self.selection.selected_seats().collect();
            for id in groups {
                self.scene.delete_group(id);
            }
            for id in seats {
                self.scene.delete_seat(id);
            }
        } else {
            match self.selection.primary() {
                Selection::Shape(id) => {
                    self.scene.delete_shape(id);
                }
                Selection::Text(id) => {
                    self.scene.delete_text(id);
                }
                Selection::Seat(id) => {
                    self.scene.delete_seat(id);
                }
                Selection::Group(id) => {
                    self.scene.delete_group(id);
                }
                Selection::None => {}
            }
        }
        self.selection.clear();
    }
}
