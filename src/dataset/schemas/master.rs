//! Merged master file schema definitions

use arrow::datatypes::{DataType, Field, Schema};
use std::sync::Arc;

/// Get the Arrow schema for the optional merged master file
///
/// Row-level registrations with NIC codes, used for sector breakdowns.
pub fn msme_master_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("State", DataType::Utf8, false),
        Field::new("District", DataType::Utf8, true),
        Field::new("nic_code", DataType::Utf8, true),
        Field::new("msme_count", DataType::Int64, true),
    ]))
}
