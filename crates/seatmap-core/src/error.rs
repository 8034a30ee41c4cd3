//! Error types for the import/export boundaries.

use thiserror::Error;

/// Errors raised while ingesting a seat layout from the host.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to parse seat data: {reason}")]
    Parse { reason: String },

    #[error("duplicate seat id {id} in imported data")]
    DuplicateSeatId { id: u64 },
}

/// Errors raised while producing an export artifact.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF generation failed: {reason}")]
    Pdf { reason: String },
}

/// Unified error type for the editor crates.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the editor crates.
pub type Result<T> = std::result::Result<T, Error>;
