//! Dataset catalog, loading and typed row models
//!
//! The dashboard works from a fixed set of CSV files in a configured
//! directory. Each dataset has a declared Arrow schema and, for the
//! profile tables, a typed row model deserialized from record batches.

pub mod loader;
pub mod records;
pub mod schemas;
pub mod upload;

use std::fmt;
use std::sync::Arc;

use arrow::datatypes::Schema;
use arrow::record_batch::RecordBatch;

/// The fixed set of datasets backing the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    /// Enterprise counts per district and DIC
    LocationProfile,
    /// Ownership and social-category breakdown
    SocialProfile,
    /// Employment and investment statistics
    EmploymentProfile,
    /// Sector composition percentages
    IndustryProfile,
    /// Precomputed per-state development score
    CompositeScore,
    /// Optional merged master file with NIC codes
    MsmeMaster,
}

impl Dataset {
    /// All datasets in loading order
    pub const ALL: [Self; 6] = [
        Self::LocationProfile,
        Self::SocialProfile,
        Self::EmploymentProfile,
        Self::IndustryProfile,
        Self::CompositeScore,
        Self::MsmeMaster,
    ];

    /// Fixed file name of this dataset inside the data directory
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::LocationProfile => "location_profile.csv",
            Self::SocialProfile => "social_profile.csv",
            Self::EmploymentProfile => "employment_profile.csv",
            Self::IndustryProfile => "industry_profile.csv",
            Self::CompositeScore => "composite_score.csv",
            Self::MsmeMaster => "msme_merged.csv",
        }
    }

    /// Declared Arrow schema for this dataset
    #[must_use]
    pub fn schema(self) -> Arc<Schema> {
        match self {
            Self::LocationProfile => schemas::location_profile_schema(),
            Self::SocialProfile => schemas::social_profile_schema(),
            Self::EmploymentProfile => schemas::employment_profile_schema(),
            Self::IndustryProfile => schemas::industry_profile_schema(),
            Self::CompositeScore => schemas::composite_score_schema(),
            Self::MsmeMaster => schemas::msme_master_schema(),
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LocationProfile => "location_profile",
            Self::SocialProfile => "social_profile",
            Self::EmploymentProfile => "employment_profile",
            Self::IndustryProfile => "industry_profile",
            Self::CompositeScore => "composite_score",
            Self::MsmeMaster => "msme_merged",
        };
        write!(f, "{name}")
    }
}

/// In-memory store of all loaded datasets
///
/// Built once at startup and treated as immutable afterwards; every view
/// computation only reads from it.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    /// Location profile table
    pub location: RecordBatch,
    /// Social profile table
    pub social: RecordBatch,
    /// Employment profile table
    pub employment: RecordBatch,
    /// Industry profile table
    pub industry: RecordBatch,
    /// Composite score table
    pub score: RecordBatch,
    /// Merged master table
    pub master: RecordBatch,
}

impl DatasetStore {
    /// A store with every table empty
    #[must_use]
    pub fn empty() -> Self {
        let empty = RecordBatch::new_empty(Arc::new(Schema::empty()));
        Self {
            location: empty.clone(),
            social: empty.clone(),
            employment: empty.clone(),
            industry: empty.clone(),
            score: empty.clone(),
            master: empty,
        }
    }

    /// Get the loaded table for a dataset
    #[must_use]
    pub fn get(&self, dataset: Dataset) -> &RecordBatch {
        match dataset {
            Dataset::LocationProfile => &self.location,
            Dataset::SocialProfile => &self.social,
            Dataset::EmploymentProfile => &self.employment,
            Dataset::IndustryProfile => &self.industry,
            Dataset::CompositeScore => &self.score,
            Dataset::MsmeMaster => &self.master,
        }
    }

    /// Replace the table for a dataset
    pub fn set(&mut self, dataset: Dataset, batch: RecordBatch) {
        match dataset {
            Dataset::LocationProfile => self.location = batch,
            Dataset::SocialProfile => self.social = batch,
            Dataset::EmploymentProfile => self.employment = batch,
            Dataset::IndustryProfile => self.industry = batch,
            Dataset::CompositeScore => self.score = batch,
            Dataset::MsmeMaster => self.master = batch,
        }
    }
}
