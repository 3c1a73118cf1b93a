//! Declared Arrow schemas for the profile datasets
//!
//! One schema per fixed-name CSV file. Loaded tables are checked against
//! these declarations; missing columns are tolerated and logged.

mod employment;
mod industry;
mod location;
mod master;
mod score;
mod social;

pub use employment::employment_profile_schema;
pub use industry::industry_profile_schema;
pub use location::location_profile_schema;
pub use master::msme_master_schema;
pub use score::composite_score_schema;
pub use social::social_profile_schema;
