//! Utilities for working with Arrow arrays.
//!
//! This module provides utility functions for safely extracting and converting
//! data from Arrow arrays, handling type conversion and error handling.

use anyhow::Context;
use arrow::array::{Array, ArrayRef};
use arrow::compute::cast;
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use log::warn;

use crate::error::{Error, Result};

/// Get a column from a record batch with automatic type adaptation
///
/// This function provides a convenient way to extract a column from a record batch,
/// while ensuring it has the expected data type. If the column has a different type,
/// it will attempt to convert it to the expected type with Arrow's cast kernel.
///
/// # Arguments
///
/// * `batch` - The record batch containing the column
/// * `column_name` - The name of the column to extract
/// * `expected_type` - The expected data type for the column
/// * `required` - Whether the column is required (error if missing) or optional (None if missing)
///
/// # Returns
///
/// * `Ok(Some(ArrayRef))` - The column array (converted if necessary) if found
/// * `Ok(None)` - If the column is not found or unconvertible and `required` is false
/// * `Err(Error)` - If the column is not found or unconvertible and `required` is true
pub fn get_column(
    batch: &RecordBatch,
    column_name: &str,
    expected_type: &DataType,
    required: bool,
) -> Result<Option<ArrayRef>> {
    let Ok(idx) = batch.schema().index_of(column_name) else {
        if required {
            return Err(Error::ColumnNotFound {
                column: column_name.to_string(),
            }
            .into());
        }
        return Ok(None);
    };

    let column = batch.column(idx).clone();
    if column.data_type() == expected_type {
        return Ok(Some(column));
    }

    match cast(&column, expected_type) {
        Ok(converted) => Ok(Some(converted)),
        Err(err) => {
            if required {
                return Err(Error::InvalidDataType {
                    column: column_name.to_string(),
                    expected: format!("{expected_type:?}"),
                })
                .with_context(|| format!("Cast failed: {err}"));
            }
            warn!("Failed to convert column '{column_name}' to {expected_type:?}: {err}");
            Ok(None)
        }
    }
}

/// Downcast a column to a specific array type with clear error messages
///
/// # Arguments
///
/// * `array` - The array reference to downcast
/// * `column_name` - The name of the column (for error messages)
/// * `expected_type_name` - A human-readable name of the expected type (for error messages)
///
/// # Returns
///
/// * `Ok(&A)` - The downcasted array reference
/// * `Err(Error)` - If the downcast fails
pub fn downcast_array<'a, A: Array + 'static>(
    array: &'a ArrayRef,
    column_name: &str,
    expected_type_name: &str,
) -> Result<&'a A> {
    array
        .as_any()
        .downcast_ref::<A>()
        .ok_or_else(|| {
            Error::InvalidDataType {
                column: column_name.to_string(),
                expected: expected_type_name.to_string(),
            }
            .into()
        })
}
