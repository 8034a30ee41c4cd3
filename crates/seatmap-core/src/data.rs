//! Persistence wire records exchanged with the hosting application.
//!
//! The host stores seat layouts as a flat JSON array of seat records.
//! Field names are camelCase on the wire; optional fields are omitted
//! when absent and tolerated when missing.

use serde::{Deserialize, Serialize};

use crate::constants::SEAT_RADIUS;

/// Booking status of a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    #[default]
    Available,
    Occupied,
    Reserved,
    Disabled,
}

fn default_seat_extent() -> f64 {
    SEAT_RADIUS * 2.0
}

/// One seat as stored by the host.
///
/// `x`/`y` are the seat center in logical coordinates. `row`/`column` are
/// 1-based grid indices when the seat was placed by a row or block tool,
/// absent for individually placed seats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatRecord {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
    pub x: f64,
    pub y: f64,
    #[serde(default = "default_seat_extent")]
    pub width: f64,
    #[serde(default = "default_seat_extent")]
    pub height: f64,
    #[serde(default)]
    pub status: SeatStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_type: Option<String>,
    pub seat_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_name: Option<String>,
}

impl SeatRecord {
    /// Builds a record with the default extent and no grid placement.
    pub fn new(id: u64, x: f64, y: f64, seat_name: impl Into<String>) -> Self {
        Self {
            id,
            row: None,
            column: None,
            x,
            y,
            width: default_seat_extent(),
            height: default_seat_extent(),
            status: SeatStatus::default(),
            price: None,
            category: None,
            color: None,
            ticket_type: None,
            seat_name: seat_name.into(),
            row_name: None,
        }
    }
}
