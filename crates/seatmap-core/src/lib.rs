//! # Seatmap Core
//!
//! Shared foundation for the seatmap layout editor:
//! - Editor-wide constants (grid spacing, zoom range, history depth)
//! - The persistence wire records exchanged with the hosting application
//! - Error types for import/export boundaries
//!
//! All error types use `thiserror` for ergonomic error handling.

pub mod constants;
pub mod data;
pub mod error;

pub use data::{SeatRecord, SeatStatus};
pub use error::{Error, ExportError, ImportError, Result};
