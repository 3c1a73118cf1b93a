//! CSV dataset loading
//!
//! Datasets are read from fixed-name CSV files with inferred schemas.
//! The boundary the views depend on never fails: any read or parse
//! problem is logged and replaced by an empty table, which downstream
//! consumers render as "no data for this view".

use std::io::{Read, Seek};
use std::sync::Arc;

use anyhow::Context;
use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::record_batch::RecordBatch;
use indicatif::ParallelProgressIterator;
use rayon::prelude::*;

use crate::config::DashboardConfig;
use crate::dataset::{Dataset, DatasetStore};
use crate::error::Result;
use crate::error::util::safe_open_file;
use crate::utils::logging::{
    create_main_progress_bar, finish_progress_bar, log_operation_complete, log_operation_start,
    log_warning,
};

/// Read a CSV source into a single record batch with an inferred schema
///
/// # Arguments
/// * `input` - Any readable, seekable CSV source
/// * `infer_max_records` - Row limit for schema inference (None samples everything)
/// * `source` - Description of the source for error context
///
/// # Errors
/// Returns an error if schema inference or record decoding fails.
pub fn read_csv_from<R: Read + Seek>(
    mut input: R,
    infer_max_records: Option<usize>,
    source: &str,
) -> Result<RecordBatch> {
    let format = Format::default().with_header(true);
    let (schema, _) = format
        .infer_schema(&mut input, infer_max_records)
        .with_context(|| format!("Failed to infer CSV schema for {source}"))?;
    input
        .rewind()
        .with_context(|| format!("Failed to rewind CSV source {source}"))?;

    let schema = Arc::new(schema);
    let reader = ReaderBuilder::new(schema.clone())
        .with_format(format)
        .build(input)
        .with_context(|| format!("Failed to build CSV reader for {source}"))?;

    let mut batches = Vec::new();
    for batch in reader {
        batches.push(batch.with_context(|| format!("Failed to read CSV records from {source}"))?);
    }

    if batches.is_empty() {
        return Ok(RecordBatch::new_empty(schema));
    }
    Ok(arrow::compute::concat_batches(&schema, &batches)?)
}

/// Read a dataset file from the configured data directory
///
/// # Errors
/// Returns an error if the file is missing or not parseable as CSV.
pub fn read_dataset(config: &DashboardConfig, dataset: Dataset) -> Result<RecordBatch> {
    let path = config.data_dir.join(dataset.file_name());
    log_operation_start("Reading dataset", &path);
    let file = safe_open_file(&path, "reading csv dataset")?;
    let batch = read_csv_from(file, config.infer_max_records, &path.display().to_string())?;
    log_operation_complete("loaded", &path, batch.num_rows());
    Ok(batch)
}

/// Load a dataset, substituting an empty table on any failure
///
/// This is the boundary the views depend on: it never fails. Read and
/// parse problems are logged and the dataset is treated as absent.
#[must_use]
pub fn load_or_empty(config: &DashboardConfig, dataset: Dataset) -> RecordBatch {
    match read_dataset(config, dataset) {
        Ok(batch) => {
            if config.validate_schema {
                warn_missing_columns(dataset, &batch);
            }
            batch
        }
        Err(err) => {
            log_warning(
                &format!("Falling back to an empty table for {dataset}: {err:#}"),
                Some(&config.data_dir),
            );
            RecordBatch::new_empty(Arc::new(arrow::datatypes::Schema::empty()))
        }
    }
}

/// Load the full dataset set in parallel
///
/// Missing or corrupt files produce empty tables; the store always has
/// an entry for every dataset.
#[must_use]
pub fn load_all(config: &DashboardConfig) -> DatasetStore {
    let loaded: Vec<(Dataset, RecordBatch)> = if config.show_progress {
        let pb = create_main_progress_bar(Dataset::ALL.len() as u64, Some("Loading MSME datasets"));
        let loaded = Dataset::ALL
            .par_iter()
            .progress_with(pb.clone())
            .map(|dataset| (*dataset, load_or_empty(config, *dataset)))
            .collect();
        finish_progress_bar(&pb, "datasets loaded");
        loaded
    } else {
        Dataset::ALL
            .par_iter()
            .map(|dataset| (*dataset, load_or_empty(config, *dataset)))
            .collect()
    };

    let mut store = DatasetStore::empty();
    for (dataset, batch) in loaded {
        store.set(dataset, batch);
    }
    store
}

/// Warn about declared columns absent from a loaded table
fn warn_missing_columns(dataset: Dataset, batch: &RecordBatch) {
    let declared = dataset.schema();
    let loaded = batch.schema();
    for field in declared.fields() {
        if loaded.index_of(field.name()).is_err() {
            log::warn!(
                "Dataset {dataset} is missing declared column '{}'; views depending on it will show no data",
                field.name()
            );
        }
    }
}
