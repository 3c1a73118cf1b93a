//! Error handling for the analytics core.

pub mod util;

use std::path::PathBuf;

/// Typed errors raised by the analytics core
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A column expected by a view or deserializer is missing
    #[error("Column '{column}' not found in record batch")]
    ColumnNotFound {
        /// Name of the missing column
        column: String,
    },

    /// A column exists but cannot be read as the expected type
    #[error("Column '{column}' has an incompatible type, expected {expected}")]
    InvalidDataType {
        /// Name of the offending column
        column: String,
        /// Human-readable name of the expected type
        expected: String,
    },

    /// A dataset file is absent from the data directory
    #[error("Dataset file not found: {path}")]
    DatasetNotFound {
        /// Path that was probed
        path: PathBuf,
    },

    /// An uploaded file was rejected before touching the data directory
    #[error("Upload rejected: {reason}")]
    UploadRejected {
        /// User-visible rejection reason
        reason: String,
    },
}

/// Result type used throughout the crate
pub type Result<T> = anyhow::Result<T>;
