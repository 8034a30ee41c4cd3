//! Free-standing and shape-attached text labels.

use serde::{Deserialize, Serialize};

use seatmap_core::constants::DEFAULT_FONT_SIZE;

use super::Point;

/// A text label. When `shape_id` is set the label is attached to that shape:
/// it renders at the shape's centroid and is deleted with the shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLabel {
    pub id: u64,
    /// Anchor for free-standing labels. Ignored while `shape_id` is set.
    pub position: Point,
    pub content: String,
    pub font_size: f64,
    pub color: String,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub shape_id: Option<u64>,
}

impl TextLabel {
    pub fn new(id: u64, position: Point, content: impl Into<String>) -> Self {
        Self {
            id,
            position,
            content: content.into(),
            font_size: DEFAULT_FONT_SIZE,
            color: "#111827".to_string(),
            rotation: 0.0,
            shape_id: None,
        }
    }
}
