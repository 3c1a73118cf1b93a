//! Composite score schema definitions

use arrow::datatypes::{DataType, Field, Schema};
use std::sync::Arc;

/// Get the Arrow schema for the composite development score
///
/// One precomputed row per state with the final score, its category and
/// the four dimension sub-scores.
pub fn composite_score_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("State", DataType::Utf8, false),
        Field::new("Final_MSME_Score", DataType::Float64, true),
        Field::new("Category", DataType::Utf8, true),
        Field::new("Scale_Score", DataType::Float64, true),
        Field::new("Social_Score", DataType::Float64, true),
        Field::new("Employment_Score", DataType::Float64, true),
        Field::new("Industry_Score", DataType::Float64, true),
    ]))
}
