//! Employment profile schema definitions

use arrow::datatypes::{DataType, Field, Schema};
use std::sync::Arc;

/// Get the Arrow schema for the employment profile
///
/// Employment and investment totals per district. `enterprise_type_split`
/// is a free-text "Micro: N | Small: N | Medium: N" field decoded by the
/// enterprise split decoder.
pub fn employment_profile_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("State", DataType::Utf8, false),
        Field::new("District", DataType::Utf8, true),
        Field::new("total_employment", DataType::Int64, true),
        Field::new("total_investment", DataType::Float64, true),
        Field::new("total_msmes", DataType::Int64, true),
        Field::new("enterprise_type_split", DataType::Utf8, true),
        Field::new("avg_employment", DataType::Float64, true),
    ]))
}
