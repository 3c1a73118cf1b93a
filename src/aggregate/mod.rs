//! Per-tab aggregation pipelines
//!
//! Each dashboard tab narrows its dataset with the region filter, rolls
//! the rows up by state and derives KPIs, a map series, chart datasets
//! and insight statements. All pipelines degrade to a neutral empty
//! view instead of failing: an error anywhere inside a tab computation
//! is caught at `render_tab`, logged, and replaced by an empty view.

pub mod employment;
pub mod enterprise;
pub mod industry;
pub mod location;
pub mod score;
pub mod social;
pub mod support;

use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use crate::context::AppContext;
use crate::dataset::Dataset;
use crate::dataset::records::{LocationRecord, ProfileRecord};
use crate::utils::logging::log_warning;
use crate::view::TabView;

/// The five dashboard profile tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tab {
    /// Location & infrastructure
    Location,
    /// Social inclusion
    Social,
    /// Employment & scale
    Employment,
    /// Industry profile
    Industry,
    /// Development score
    Score,
}

impl Tab {
    /// All tabs in display order
    pub const ALL: [Self; 5] = [
        Self::Location,
        Self::Social,
        Self::Employment,
        Self::Industry,
        Self::Score,
    ];

    /// Get the display label for this tab
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Location => "Location & Infrastructure",
            Self::Social => "Social Inclusion",
            Self::Employment => "Employment & Scale",
            Self::Industry => "Industry Profile",
            Self::Score => "Development Score",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Compute the view for a tab, falling back to an empty view on error
///
/// This is the boundary between the aggregation pipelines and the
/// renderer: it never fails and never panics. The score tab ignores the
/// district selector, matching the granularity of its table.
#[must_use]
pub fn render_tab(
    ctx: &AppContext,
    tab: Tab,
    region: Option<&str>,
    subregion: Option<&str>,
) -> TabView {
    let result = match tab {
        Tab::Location => location::location_view(ctx, region, subregion),
        Tab::Social => social::social_view(ctx, region, subregion),
        Tab::Employment => employment::employment_view(ctx, region, subregion),
        Tab::Industry => industry::industry_view(ctx, region, subregion),
        Tab::Score => score::score_view(ctx, region),
    };

    result.unwrap_or_else(|err| {
        log::error!("{tab} view failed, rendering empty view: {err:#}");
        TabView::empty(tab.label())
    })
}

/// Distinct states available for selection, sorted
///
/// Derived from the location profile; an unloadable table yields no
/// choices rather than an error.
#[must_use]
pub fn regions(ctx: &AppContext) -> Vec<String> {
    match LocationRecord::from_batch(ctx.store.get(Dataset::LocationProfile)) {
        Ok(rows) => rows.into_iter().map(|r| r.state).sorted().dedup().collect(),
        Err(err) => {
            log_warning(&format!("Failed to list states: {err:#}"), None);
            Vec::new()
        }
    }
}

/// Distinct districts of a state, sorted
#[must_use]
pub fn subregions(ctx: &AppContext, region: &str) -> Vec<String> {
    match LocationRecord::from_batch(ctx.store.get(Dataset::LocationProfile)) {
        Ok(rows) => rows
            .into_iter()
            .filter(|r| r.state == region)
            .filter_map(|r| r.district)
            .sorted()
            .dedup()
            .collect(),
        Err(err) => {
            log_warning(&format!("Failed to list districts: {err:#}"), None);
            Vec::new()
        }
    }
}
