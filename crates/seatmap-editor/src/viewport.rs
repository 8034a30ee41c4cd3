//! Pixel/logical coordinate transform with pan and clamped zoom.

use std::fmt;

use serde::{Deserialize, Serialize};

use seatmap_core::constants::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, MAX_ZOOM, MIN_ZOOM, ZOOM_IN_FACTOR,
    ZOOM_OUT_FACTOR,
};

use crate::model::Point;

fn default_canvas_width() -> f64 {
    DEFAULT_CANVAS_WIDTH
}

fn default_canvas_height() -> f64 {
    DEFAULT_CANVAS_HEIGHT
}

/// View state mapping logical coordinates to screen pixels.
///
/// `screen = logical * zoom + pan`. Logical space is y-down, matching the
/// SVG output coordinate system. `canvas_width`/`canvas_height` is the
/// logical drawing surface, used as the default export page size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
    #[serde(default = "default_canvas_width")]
    pub canvas_width: f64,
    #[serde(default = "default_canvas_height")]
    pub canvas_height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: 1.0,
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen_to_logical(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.pan_x) / self.zoom,
            (screen.y - self.pan_y) / self.zoom,
        )
    }

    pub fn logical_to_screen(&self, logical: Point) -> Point {
        Point::new(
            logical.x * self.zoom + self.pan_x,
            logical.y * self.zoom + self.pan_y,
        )
    }

    /// Shifts the view by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Sets the zoom, clamped to the allowed range.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Applies one wheel notch of zoom anchored at `cursor` (screen
    /// coordinates): the logical point under the cursor stays put.
    pub fn wheel_zoom(&mut self, cursor: Point, zoom_in: bool) {
        let factor = if zoom_in {
            ZOOM_IN_FACTOR
        } else {
            ZOOM_OUT_FACTOR
        };
        let new_zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            return;
        }
        let anchor = self.screen_to_logical(cursor);
        self.zoom = new_zoom;
        self.pan_x = cursor.x - anchor.x * self.zoom;
        self.pan_y = cursor.y - anchor.y * self.zoom;
    }

    /// Resets pan and zoom to the identity view. Canvas size is kept.
    pub fn center(&mut self) {
        self.pan_x = 0.0;
        self.pan_y = 0.0;
        self.zoom = 1.0;
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pan=({:.1}, {:.1}) zoom={:.0}%",
            self.pan_x,
            self.pan_y,
            self.zoom * 100.0
        )
    }
}
