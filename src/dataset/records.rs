//! Typed row models for the profile datasets
//!
//! Each profile table deserializes into a plain row struct so the
//! aggregation pipeline works on typed values rather than raw arrays.
//! Rows without a state value are skipped during deserialization;
//! missing or null numeric cells read as zero.

use std::fmt;

use arrow::array::{Array, Float64Array, Int64Array, StringArray};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use serde::Serialize;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::utils::arrow::{downcast_array, get_column};

/// A record type deserialized from one of the profile datasets
pub trait ProfileRecord: Sized {
    /// Dataset this record type is read from
    fn dataset() -> Dataset;

    /// Deserialize all rows of a record batch, skipping rows without a
    /// state value
    ///
    /// # Errors
    /// Returns an error if a present column cannot be read as its
    /// expected type.
    fn from_batch(batch: &RecordBatch) -> Result<Vec<Self>>;
}

/// One row of the location profile
#[derive(Debug, Clone)]
pub struct LocationRecord {
    pub state: String,
    pub district: Option<String>,
    pub dic_name: Option<String>,
    pub msme_count: i64,
}

impl ProfileRecord for LocationRecord {
    fn dataset() -> Dataset {
        Dataset::LocationProfile
    }

    fn from_batch(batch: &RecordBatch) -> Result<Vec<Self>> {
        if batch.num_rows() == 0 {
            return Ok(Vec::new());
        }
        let Some(state) = utf8_column(batch, "State")? else {
            return Ok(Vec::new());
        };
        let district = utf8_column(batch, "District")?;
        let dic_name = utf8_column(batch, "Dic_Name")?;
        let msme_count = int_column(batch, "msme_count")?;

        let mut records = Vec::with_capacity(batch.num_rows());
        for row in 0..batch.num_rows() {
            let Some(state_value) = string_at(&state, row) else {
                continue;
            };
            records.push(Self {
                state: state_value,
                district: district.as_ref().and_then(|c| string_at(c, row)),
                dic_name: dic_name.as_ref().and_then(|c| string_at(c, row)),
                msme_count: int_at(msme_count.as_ref(), row),
            });
        }
        Ok(records)
    }
}

/// One row of the social profile
#[derive(Debug, Clone)]
pub struct SocialRecord {
    pub state: String,
    pub district: Option<String>,
    pub female_owned: i64,
    pub male_owned: i64,
    pub general_count: i64,
    pub obc_count: i64,
    pub sc_count: i64,
    pub st_count: i64,
    pub total_msmes: i64,
}

impl ProfileRecord for SocialRecord {
    fn dataset() -> Dataset {
        Dataset::SocialProfile
    }

    fn from_batch(batch: &RecordBatch) -> Result<Vec<Self>> {
        if batch.num_rows() == 0 {
            return Ok(Vec::new());
        }
        let Some(state) = utf8_column(batch, "State")? else {
            return Ok(Vec::new());
        };
        let district = utf8_column(batch, "District")?;
        let female_owned = int_column(batch, "female_owned")?;
        let male_owned = int_column(batch, "male_owned")?;
        let general_count = int_column(batch, "general_count")?;
        let obc_count = int_column(batch, "obc_count")?;
        let sc_count = int_column(batch, "sc_count")?;
        let st_count = int_column(batch, "st_count")?;
        let total_msmes = int_column(batch, "total_msmes")?;

        let mut records = Vec::with_capacity(batch.num_rows());
        for row in 0..batch.num_rows() {
            let Some(state_value) = string_at(&state, row) else {
                continue;
            };
            records.push(Self {
                state: state_value,
                district: district.as_ref().and_then(|c| string_at(c, row)),
                female_owned: int_at(female_owned.as_ref(), row),
                male_owned: int_at(male_owned.as_ref(), row),
                general_count: int_at(general_count.as_ref(), row),
                obc_count: int_at(obc_count.as_ref(), row),
                sc_count: int_at(sc_count.as_ref(), row),
                st_count: int_at(st_count.as_ref(), row),
                total_msmes: int_at(total_msmes.as_ref(), row),
            });
        }
        Ok(records)
    }
}

/// One row of the employment profile
#[derive(Debug, Clone)]
pub struct EmploymentRecord {
    pub state: String,
    pub district: Option<String>,
    pub total_employment: i64,
    pub total_investment: f64,
    pub total_msmes: i64,
    pub enterprise_type_split: Option<String>,
    pub avg_employment: f64,
}

impl ProfileRecord for EmploymentRecord {
    fn dataset() -> Dataset {
        Dataset::EmploymentProfile
    }

    fn from_batch(batch: &RecordBatch) -> Result<Vec<Self>> {
        if batch.num_rows() == 0 {
            return Ok(Vec::new());
        }
        let Some(state) = utf8_column(batch, "State")? else {
            return Ok(Vec::new());
        };
        let district = utf8_column(batch, "District")?;
        let total_employment = int_column(batch, "total_employment")?;
        let total_investment = float_column(batch, "total_investment")?;
        let total_msmes = int_column(batch, "total_msmes")?;
        let split = utf8_column(batch, "enterprise_type_split")?;
        let avg_employment = float_column(batch, "avg_employment")?;

        let mut records = Vec::with_capacity(batch.num_rows());
        for row in 0..batch.num_rows() {
            let Some(state_value) = string_at(&state, row) else {
                continue;
            };
            records.push(Self {
                state: state_value,
                district: district.as_ref().and_then(|c| string_at(c, row)),
                total_employment: int_at(total_employment.as_ref(), row),
                total_investment: float_at(total_investment.as_ref(), row),
                total_msmes: int_at(total_msmes.as_ref(), row),
                enterprise_type_split: split.as_ref().and_then(|c| string_at(c, row)),
                avg_employment: float_at(avg_employment.as_ref(), row),
            });
        }
        Ok(records)
    }
}

/// One row of the industry profile
#[derive(Debug, Clone)]
pub struct IndustryRecord {
    pub state: String,
    pub district: Option<String>,
    pub manufacturing_pct: f64,
    pub services_pct: f64,
    pub industry_diversity_index: f64,
}

impl ProfileRecord for IndustryRecord {
    fn dataset() -> Dataset {
        Dataset::IndustryProfile
    }

    fn from_batch(batch: &RecordBatch) -> Result<Vec<Self>> {
        if batch.num_rows() == 0 {
            return Ok(Vec::new());
        }
        let Some(state) = utf8_column(batch, "State")? else {
            return Ok(Vec::new());
        };
        let district = utf8_column(batch, "District")?;
        let manufacturing = float_column(batch, "manufacturing_pct")?;
        let services = float_column(batch, "services_pct")?;
        let diversity = float_column(batch, "industry_diversity_index")?;

        let mut records = Vec::with_capacity(batch.num_rows());
        for row in 0..batch.num_rows() {
            let Some(state_value) = string_at(&state, row) else {
                continue;
            };
            records.push(Self {
                state: state_value,
                district: district.as_ref().and_then(|c| string_at(c, row)),
                manufacturing_pct: float_at(manufacturing.as_ref(), row),
                services_pct: float_at(services.as_ref(), row),
                industry_diversity_index: float_at(diversity.as_ref(), row),
            });
        }
        Ok(records)
    }
}

/// Development stage assigned to a composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreCategory {
    Nascent,
    Emerging,
    Developing,
    Advanced,
}

impl ScoreCategory {
    /// All categories in ascending development order
    pub const ALL: [Self; 4] = [
        Self::Nascent,
        Self::Emerging,
        Self::Developing,
        Self::Advanced,
    ];

    /// Get the display name for this category
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Nascent => "Nascent",
            Self::Emerging => "Emerging",
            Self::Developing => "Developing",
            Self::Advanced => "Advanced",
        }
    }

    /// Parse a category label; unknown labels yield `None`
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Nascent" => Some(Self::Nascent),
            "Emerging" => Some(Self::Emerging),
            "Developing" => Some(Self::Developing),
            "Advanced" => Some(Self::Advanced),
            _ => None,
        }
    }
}

impl fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One row of the composite score table
#[derive(Debug, Clone)]
pub struct ScoreRecord {
    pub state: String,
    pub final_score: f64,
    pub category: Option<ScoreCategory>,
    pub scale_score: f64,
    pub social_score: f64,
    pub employment_score: f64,
    pub industry_score: f64,
}

impl ProfileRecord for ScoreRecord {
    fn dataset() -> Dataset {
        Dataset::CompositeScore
    }

    fn from_batch(batch: &RecordBatch) -> Result<Vec<Self>> {
        if batch.num_rows() == 0 {
            return Ok(Vec::new());
        }
        let Some(state) = utf8_column(batch, "State")? else {
            return Ok(Vec::new());
        };
        let final_score = float_column(batch, "Final_MSME_Score")?;
        let category = utf8_column(batch, "Category")?;
        let scale_score = float_column(batch, "Scale_Score")?;
        let social_score = float_column(batch, "Social_Score")?;
        let employment_score = float_column(batch, "Employment_Score")?;
        let industry_score = float_column(batch, "Industry_Score")?;

        let mut records = Vec::with_capacity(batch.num_rows());
        for row in 0..batch.num_rows() {
            let Some(state_value) = string_at(&state, row) else {
                continue;
            };
            records.push(Self {
                state: state_value,
                final_score: float_at(final_score.as_ref(), row),
                category: category
                    .as_ref()
                    .and_then(|c| string_at(c, row))
                    .and_then(|label| ScoreCategory::from_label(&label)),
                scale_score: float_at(scale_score.as_ref(), row),
                social_score: float_at(social_score.as_ref(), row),
                employment_score: float_at(employment_score.as_ref(), row),
                industry_score: float_at(industry_score.as_ref(), row),
            });
        }
        Ok(records)
    }
}

fn utf8_column(batch: &RecordBatch, name: &str) -> Result<Option<StringArray>> {
    match get_column(batch, name, &DataType::Utf8, false)? {
        Some(array) => Ok(Some(downcast_array::<StringArray>(&array, name, "String")?.clone())),
        None => Ok(None),
    }
}

fn int_column(batch: &RecordBatch, name: &str) -> Result<Option<Int64Array>> {
    match get_column(batch, name, &DataType::Int64, false)? {
        Some(array) => Ok(Some(downcast_array::<Int64Array>(&array, name, "Int64")?.clone())),
        None => Ok(None),
    }
}

fn float_column(batch: &RecordBatch, name: &str) -> Result<Option<Float64Array>> {
    match get_column(batch, name, &DataType::Float64, false)? {
        Some(array) => Ok(Some(
            downcast_array::<Float64Array>(&array, name, "Float64")?.clone(),
        )),
        None => Ok(None),
    }
}

fn string_at(column: &StringArray, row: usize) -> Option<String> {
    if row >= column.len() || column.is_null(row) {
        return None;
    }
    let value = column.value(row);
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn int_at(column: Option<&Int64Array>, row: usize) -> i64 {
    column.map_or(0, |c| {
        if row >= c.len() || c.is_null(row) {
            0
        } else {
            c.value(row)
        }
    })
}

fn float_at(column: Option<&Float64Array>, row: usize) -> f64 {
    column.map_or(0.0, |c| {
        if row >= c.len() || c.is_null(row) {
            0.0
        } else {
            c.value(row)
        }
    })
}
