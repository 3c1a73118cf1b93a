//! Region filtering for profile tables
//!
//! Narrows a table to rows matching an optional state and optional
//! district, by exact case-sensitive equality. The two selectors are
//! independent and compose by intersection. Tables without the selector
//! column pass through unchanged, and the input batch is never mutated.

use arrow::array::{Array, ArrayRef, BooleanArray, StringArray};
use arrow::compute::filter as arrow_filter;
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;

use anyhow::Context;

use crate::error::Result;
use crate::utils::arrow::{downcast_array, get_column};

/// Column holding the top-level region (state) name
pub const REGION_COLUMN: &str = "State";

/// Column holding the sub-region (district) name
pub const SUBREGION_COLUMN: &str = "District";

/// Filter a record batch based on a boolean mask
///
/// # Arguments
/// * `batch` - The record batch to filter
/// * `mask` - The boolean mask indicating which rows to keep
///
/// # Returns
/// A new record batch with only rows where mask is true
///
/// # Errors
/// Returns an error if filtering fails
pub fn filter_record_batch(batch: &RecordBatch, mask: &BooleanArray) -> Result<RecordBatch> {
    if batch.num_rows() != mask.len() {
        return Err(anyhow::anyhow!(
            "Mask length ({}) doesn't match batch row count ({})",
            mask.len(),
            batch.num_rows()
        ));
    }

    let filtered_columns: Vec<ArrayRef> = batch
        .columns()
        .iter()
        .map(|col| arrow_filter(col, mask))
        .collect::<arrow::error::Result<_>>()
        .with_context(|| "Failed to apply boolean filter to columns")?;

    RecordBatch::try_new(batch.schema(), filtered_columns)
        .with_context(|| "Failed to create filtered record batch")
}

/// Keep only rows where a string column equals a value exactly
///
/// Null rows never match. A batch without the column is returned
/// unchanged.
fn retain_matching(batch: &RecordBatch, column_name: &str, value: &str) -> Result<RecordBatch> {
    let Some(column) = get_column(batch, column_name, &DataType::Utf8, false)? else {
        return Ok(batch.clone());
    };
    let strings = downcast_array::<StringArray>(&column, column_name, "String")?;

    let mut values = Vec::with_capacity(strings.len());
    for i in 0..strings.len() {
        values.push(!strings.is_null(i) && strings.value(i) == value);
    }
    filter_record_batch(batch, &BooleanArray::from(values))
}

/// Narrow a table to an optional region and optional sub-region
///
/// # Arguments
/// * `batch` - The table to filter
/// * `region` - Optional state selector (exact match)
/// * `subregion` - Optional district selector (exact match)
///
/// # Returns
/// A new record batch containing only the matching rows; the input is
/// left untouched. An empty input is returned unchanged.
///
/// # Errors
/// Returns an error if a selector column cannot be read as strings.
pub fn filter_region(
    batch: &RecordBatch,
    region: Option<&str>,
    subregion: Option<&str>,
) -> Result<RecordBatch> {
    if batch.num_rows() == 0 {
        return Ok(batch.clone());
    }

    let mut filtered = batch.clone();
    if let Some(region) = region {
        filtered = retain_matching(&filtered, REGION_COLUMN, region)?;
    }
    if let Some(subregion) = subregion {
        if filtered.num_rows() > 0 {
            filtered = retain_matching(&filtered, SUBREGION_COLUMN, subregion)?;
        }
    }
    Ok(filtered)
}
