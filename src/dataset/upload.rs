//! Dataset upload handling
//!
//! The upload path is the only user-visible failure surface: non-CSV
//! files and unparseable content are rejected with an error, and the
//! data directory is left untouched. A successful upload overwrites the
//! file of the same name; loaded tables are unaffected until the
//! datasets are reloaded.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::DashboardConfig;
use crate::dataset::loader::read_csv_from;
use crate::error::util::validate_directory;
use crate::error::{Error, Result};
use crate::utils::logging::log_operation_complete;

/// Outcome of a successful upload
#[derive(Debug, Clone, Serialize)]
pub struct UploadReport {
    /// File name the dataset was saved under
    pub file_name: String,
    /// Number of data rows in the uploaded table
    pub rows: usize,
    /// Number of columns in the uploaded table
    pub columns: usize,
    /// Full path the file was written to
    pub saved_to: PathBuf,
    /// When the upload was accepted
    pub uploaded_at: DateTime<Utc>,
}

/// Validate and store an uploaded CSV file
///
/// # Arguments
/// * `config` - Dashboard configuration (target data directory)
/// * `file_name` - Original name of the uploaded file
/// * `bytes` - Raw file content
///
/// # Errors
/// Returns `Error::UploadRejected` for non-CSV names, and a parse error
/// if the content is not valid CSV. In both cases nothing is written.
pub fn handle_upload(
    config: &DashboardConfig,
    file_name: &str,
    bytes: &[u8],
) -> Result<UploadReport> {
    let name = Path::new(file_name)
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::UploadRejected {
            reason: format!("invalid file name: {file_name}"),
        })?;

    let is_csv = Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        return Err(Error::UploadRejected {
            reason: "only .csv files are accepted".to_string(),
        }
        .into());
    }

    // Parse first so corrupt content never reaches the data directory
    let batch = read_csv_from(Cursor::new(bytes), config.infer_max_records, name)
        .with_context(|| format!("Uploaded file {name} is not valid CSV"))?;

    validate_directory(&config.data_dir, "saving uploaded dataset")?;
    let saved_to = config.data_dir.join(name);
    fs::write(&saved_to, bytes)
        .with_context(|| format!("Failed to write uploaded dataset to {}", saved_to.display()))?;
    log_operation_complete("saved", &saved_to, batch.num_rows());

    Ok(UploadReport {
        file_name: name.to_string(),
        rows: batch.num_rows(),
        columns: batch.num_columns(),
        saved_to,
        uploaded_at: Utc::now(),
    })
}
