//! Social profile schema definitions

use arrow::datatypes::{DataType, Field, Schema};
use std::sync::Arc;

/// Get the Arrow schema for the social profile
///
/// Ownership and social-category breakdown per district. The gender
/// columns need not sum to `total_msmes`.
pub fn social_profile_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("State", DataType::Utf8, false),
        Field::new("District", DataType::Utf8, true),
        Field::new("female_owned", DataType::Int64, true),
        Field::new("male_owned", DataType::Int64, true),
        Field::new("general_count", DataType::Int64, true),
        Field::new("obc_count", DataType::Int64, true),
        Field::new("sc_count", DataType::Int64, true),
        Field::new("st_count", DataType::Int64, true),
        Field::new("total_msmes", DataType::Int64, true),
    ]))
}
