//! Location profile schema definitions

use arrow::datatypes::{DataType, Field, Schema};
use std::sync::Arc;

/// Get the Arrow schema for the location profile
///
/// The location profile carries enterprise counts per district and
/// district industries centre (DIC).
pub fn location_profile_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("State", DataType::Utf8, false),
        Field::new("District", DataType::Utf8, true),
        Field::new("Dic_Name", DataType::Utf8, true),
        Field::new("msme_count", DataType::Int64, true),
    ]))
}
