//! Configuration for the analytics core.

use std::path::PathBuf;

/// Configuration for dataset loading and view computation
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Directory containing the fixed-name CSV dataset files
    pub data_dir: PathBuf,
    /// Whether to check loaded tables against their declared schemas
    pub validate_schema: bool,
    /// Whether to show a progress bar while loading datasets
    pub show_progress: bool,
    /// Maximum number of records to sample for CSV schema inference
    pub infer_max_records: Option<usize>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            validate_schema: true,
            show_progress: true,
            infer_max_records: Some(1000),
        }
    }
}
