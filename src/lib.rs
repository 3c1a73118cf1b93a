//! Analytics core for MSME statistics: loads pre-aggregated CSV
//! datasets, filters them by state and district, and computes the
//! per-tab KPIs, map series, chart datasets and insights the dashboard
//! renders.

pub mod aggregate;
pub mod config;
pub mod context;
pub mod dataset;
pub mod dss;
pub mod error;
pub mod filter;
pub mod geo;
pub mod sector;
pub mod utils;
pub mod view;

// Re-export the most common types for easier use
// Core types
pub use config::DashboardConfig;
pub use context::AppContext;
pub use error::{Error, Result};

// Datasets
pub use dataset::loader::{load_all, load_or_empty};
pub use dataset::upload::{UploadReport, handle_upload};
pub use dataset::{Dataset, DatasetStore};

// Arrow types
pub use arrow::datatypes::Schema as ArrowSchema;
pub use arrow::record_batch::RecordBatch;

// Filtering and aggregation
pub use aggregate::{Tab, regions, render_tab, subregions};
pub use dss::{HighlightMode, highlight};
pub use filter::filter_region;
pub use sector::Sector;

// View data handed to the renderer
pub use view::{Chart, DssView, Kpi, MapSeries, TabView};
