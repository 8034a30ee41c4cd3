//! Seats and seat groups.

use serde::{Deserialize, Serialize};

use seatmap_core::SeatStatus;

use super::Point;

/// A single bookable seat, rendered as a labeled circle at `position`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub id: u64,
    pub position: Point,
    /// Display label, e.g. "S12".
    pub label: String,
    /// 1-based row index when placed by a row or block tool.
    #[serde(default)]
    pub row: Option<u32>,
    /// 1-based column index when placed by a row or block tool.
    #[serde(default)]
    pub column: Option<u32>,
    #[serde(default)]
    pub status: SeatStatus,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub ticket_type: Option<String>,
}

impl Seat {
    pub fn new(id: u64, position: Point, label: impl Into<String>) -> Self {
        Self {
            id,
            position,
            label: label.into(),
            row: None,
            column: None,
            status: SeatStatus::default(),
            price: None,
            category: None,
            color: None,
            ticket_type: None,
        }
    }
}

/// A group of seats produced by the row/block tools, moved and selected as
/// one unit. `origin`/`width`/`height` is the group frame: the minimal
/// bounding box of the member seats plus a fixed margin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatGroup {
    pub id: u64,
    pub seat_ids: Vec<u64>,
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    /// Display rotation in degrees. Affects rendering only; member seat
    /// positions stay axis-aligned in the model.
    #[serde(default)]
    pub rotation: f64,
}

impl SeatGroup {
    pub fn new(id: u64, seat_ids: Vec<u64>) -> Self {
        Self {
            id,
            seat_ids,
            origin: Point::default(),
            width: 0.0,
            height: 0.0,
            rotation: 0.0,
        }
    }

    /// Axis-aligned frame test, ignoring the display rotation.
    pub fn contains_point(&self, p: &Point) -> bool {
        p.x >= self.origin.x
            && p.x <= self.origin.x + self.width
            && p.y >= self.origin.y
            && p.y <= self.origin.y + self.height
    }
}
