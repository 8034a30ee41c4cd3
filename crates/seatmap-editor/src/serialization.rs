//! Persistence: the host seat-record wire format and the `.seatmap` design
//! file.

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use seatmap_core::{ImportError, Result, SeatRecord};

use crate::model::{Point, Seat};
use crate::scene::Scene;
use crate::viewport::Viewport;

/// Design file format version.
const FILE_FORMAT_VERSION: &str = "1.0";

/// Converts the scene's seats to the flat wire format. Groups are an
/// editor-side construct and are not carried on the wire.
pub fn scene_to_records(scene: &Scene) -> Vec<SeatRecord> {
    scene
        .seats
        .iter()
        .map(|seat| {
            let mut rec = SeatRecord::new(seat.id, seat.position.x, seat.position.y, &seat.label);
            rec.row = seat.row;
            rec.column = seat.column;
            rec.status = seat.status;
            rec.price = seat.price;
            rec.category = seat.category.clone();
            rec.color = seat.color.clone();
            rec.ticket_type = seat.ticket_type.clone();
            rec.row_name = seat.row.map(|r| format!("R{}", r));
            rec
        })
        .collect()
}

/// Builds scene seats from wire records, rejecting duplicate ids.
pub fn seats_from_records(records: Vec<SeatRecord>) -> Result<Vec<Seat>> {
    let mut seen = std::collections::HashSet::new();
    let mut seats = Vec::with_capacity(records.len());
    for rec in records {
        if !seen.insert(rec.id) {
            return Err(ImportError::DuplicateSeatId { id: rec.id }.into());
        }
        let mut seat = Seat::new(rec.id, Point::new(rec.x, rec.y), rec.seat_name);
        seat.row = rec.row;
        seat.column = rec.column;
        seat.status = rec.status;
        seat.price = rec.price;
        seat.category = rec.category;
        seat.color = rec.color;
        seat.ticket_type = rec.ticket_type;
        seats.push(seat);
    }
    Ok(seats)
}

/// Parses the host's JSON seat array.
pub fn records_from_json(json: &str) -> Result<Vec<SeatRecord>> {
    serde_json::from_str(json).map_err(|e| {
        ImportError::Parse {
            reason: e.to_string(),
        }
        .into()
    })
}

/// Serializes the scene's seats as the host's JSON seat array.
pub fn records_to_json(scene: &Scene) -> anyhow::Result<String> {
    serde_json::to_string_pretty(&scene_to_records(scene)).context("Failed to serialize seats")
}

/// Complete design file: full scene plus view state and metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignFile {
    pub version: String,
    pub metadata: DesignMetadata,
    pub viewport: Viewport,
    pub scene: Scene,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
}

impl DesignFile {
    pub fn new(name: impl Into<String>, scene: Scene, viewport: Viewport) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: DesignMetadata {
                name: name.into(),
                created: now,
                modified: now,
                author: String::new(),
                description: String::new(),
            },
            viewport,
            scene,
        }
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize design")?;
        std::fs::write(path.as_ref(), json).context("Failed to write design file")?;
        Ok(())
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read design file")?;
        let mut design: DesignFile =
            serde_json::from_str(&content).context("Failed to parse design file")?;
        design.metadata.modified = Utc::now();
        Ok(design)
    }
}
