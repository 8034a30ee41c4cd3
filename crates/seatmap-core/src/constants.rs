//! Editor-wide constants.

/// Snap increment for placed and dragged entities, in logical units.
pub const GRID_SPACING: f64 = 25.0;

/// Snap increment used by canvas-mode hosts (coarser grid).
pub const CANVAS_GRID_SPACING: f64 = 40.0;

/// Offset applied to pasted entities on both axes, in logical units.
pub const PASTE_OFFSET: f64 = 30.0;

/// Maximum number of undo snapshots kept; the oldest entry is evicted first.
pub const UNDO_DEPTH: usize = 100;

/// Zoom range of the viewport.
pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 5.0;

/// Geometric zoom factors per wheel notch.
pub const ZOOM_IN_FACTOR: f64 = 1.1;
pub const ZOOM_OUT_FACTOR: f64 = 0.9;

/// Margin added around a seat group's minimal member bounding box.
pub const GROUP_MARGIN: f64 = 10.0;

/// Render radius of a seat circle, in logical units.
pub const SEAT_RADIUS: f64 = 10.0;

/// Default font size for text labels.
pub const DEFAULT_FONT_SIZE: f64 = 14.0;

/// Default canvas dimensions, in pixels.
pub const DEFAULT_CANVAS_WIDTH: f64 = 1200.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 800.0;
