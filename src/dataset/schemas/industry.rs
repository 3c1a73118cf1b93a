//! Industry profile schema definitions

use arrow::datatypes::{DataType, Field, Schema};
use std::sync::Arc;

/// Get the Arrow schema for the industry profile
///
/// Sector composition per district. The percentage columns are sourced
/// independently and need not sum to 100.
pub fn industry_profile_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("State", DataType::Utf8, false),
        Field::new("District", DataType::Utf8, true),
        Field::new("manufacturing_pct", DataType::Float64, true),
        Field::new("services_pct", DataType::Float64, true),
        Field::new("industry_diversity_index", DataType::Float64, true),
    ]))
}
