//! Decision-support highlighting
//!
//! The DSS view recolors the per-state map by one of four highlight
//! modes: raw density, top-30% density, low female ownership, or
//! top-30% employment. The auxiliary joins tolerate an empty social or
//! employment table by leaving the base coloring untouched.

use std::fmt;

use serde::Serialize;

use crate::aggregate::support::{group_fold, pct, quantile, top_n_by};
use crate::context::AppContext;
use crate::dataset::Dataset;
use crate::dataset::records::{EmploymentRecord, LocationRecord, ProfileRecord, SocialRecord};
use crate::error::Result;
use crate::filter::filter_region;
use crate::view::{ColorScale, DssView, LabeledValue, MapPoint, MapSeries};

/// Share of states kept when a threshold mode is active (the top 30%)
const THRESHOLD_QUANTILE: f64 = 0.7;

/// Women-ownership share below which a state needs focus
const LOW_FEMALE_PCT: f64 = 20.0;

/// Map highlight modes of the decision-support view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HighlightMode {
    /// Plain count-based coloring
    None,
    /// Highlight the top 30% of states by enterprise count
    HighDensity,
    /// Highlight states by their women-ownership gap
    LowFemale,
    /// Highlight the top 30% of states by employment
    HighEmployment,
}

impl HighlightMode {
    /// Get the selector label for this mode
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::HighDensity => "high_density",
            Self::LowFemale => "low_female",
            Self::HighEmployment => "high_employment",
        }
    }
}

impl fmt::Display for HighlightMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Per-state row of the DSS summary
#[derive(Debug, Clone)]
struct DssRow {
    state: String,
    msme_count: i64,
    highlight_score: f64,
}

/// Compute the decision-support view
///
/// Never fails: any internal error is logged and an empty view is
/// returned instead.
#[must_use]
pub fn highlight(ctx: &AppContext, region: Option<&str>, mode: HighlightMode) -> DssView {
    highlight_inner(ctx, region, mode).unwrap_or_else(|err| {
        log::error!("DSS view failed, rendering empty view: {err:#}");
        DssView::empty("No data available")
    })
}

fn highlight_inner(
    ctx: &AppContext,
    region: Option<&str>,
    mode: HighlightMode,
) -> Result<DssView> {
    let filtered = filter_region(ctx.store.get(Dataset::LocationProfile), region, None)?;
    let rows = LocationRecord::from_batch(&filtered)?;
    if rows.is_empty() {
        return Ok(DssView::empty("No data available"));
    }

    let counts: Vec<(String, i64)> =
        group_fold(&rows, |r| r.state.as_str(), |acc: &mut i64, r| {
            *acc += r.msme_count;
        });
    let mut summary: Vec<DssRow> = counts
        .into_iter()
        .map(|(state, msme_count)| DssRow {
            state,
            msme_count,
            highlight_score: msme_count as f64,
        })
        .collect();

    let mut scale = ColorScale::Viridis;
    let mut color_label = "MSME Count".to_string();
    let mut insight = "All India view - select a highlight option".to_string();

    match mode {
        HighlightMode::None => {}
        HighlightMode::HighDensity => {
            let values: Vec<f64> = summary.iter().map(|r| r.msme_count as f64).collect();
            let threshold = quantile(&values, THRESHOLD_QUANTILE);
            for row in &mut summary {
                if (row.msme_count as f64) < threshold {
                    row.highlight_score = 0.0;
                }
            }
            let highlighted = summary
                .iter()
                .filter(|r| r.msme_count as f64 >= threshold)
                .count();
            scale = ColorScale::ThresholdRed;
            color_label = "Highlight Score".to_string();
            insight = format!("{highlighted} states highlighted (top 30% MSME density)");
        }
        HighlightMode::LowFemale => {
            let social_rows = SocialRecord::from_batch(ctx.store.get(Dataset::SocialProfile))?;
            if !social_rows.is_empty() {
                let women_by_state: Vec<(String, (i64, i64))> = group_fold(
                    &social_rows,
                    |r| r.state.as_str(),
                    |acc: &mut (i64, i64), r| {
                        acc.0 += r.female_owned;
                        acc.1 += r.total_msmes;
                    },
                );
                let mut low_count = 0_usize;
                for row in &mut summary {
                    let joined = women_by_state
                        .iter()
                        .find(|(state, _)| state == &row.state)
                        .map(|(_, (female, total))| pct(*female as f64, *total as f64));
                    match joined {
                        Some(women_pct) => {
                            row.highlight_score = 100.0 - women_pct;
                            if women_pct < LOW_FEMALE_PCT {
                                low_count += 1;
                            }
                        }
                        // No social data for this state: leave it unhighlighted
                        None => row.highlight_score = 0.0,
                    }
                }
                scale = ColorScale::WomenGap;
                color_label = "Ownership Gap".to_string();
                insight = format!(
                    "{low_count} states need focus on women entrepreneurship (< 20% female owned)"
                );
            }
        }
        HighlightMode::HighEmployment => {
            let employment_rows =
                EmploymentRecord::from_batch(ctx.store.get(Dataset::EmploymentProfile))?;
            if !employment_rows.is_empty() {
                let employment_by_state: Vec<(String, i64)> = group_fold(
                    &employment_rows,
                    |r| r.state.as_str(),
                    |acc: &mut i64, r| *acc += r.total_employment,
                );
                let lookup = |state: &str| -> f64 {
                    employment_by_state
                        .iter()
                        .find(|(s, _)| s == state)
                        .map_or(0.0, |(_, employment)| *employment as f64)
                };
                let values: Vec<f64> = summary.iter().map(|r| lookup(&r.state)).collect();
                let threshold = quantile(&values, THRESHOLD_QUANTILE);
                let mut highlighted = 0_usize;
                for row in &mut summary {
                    let employment = lookup(&row.state);
                    if employment < threshold {
                        row.highlight_score = 0.0;
                    } else {
                        row.highlight_score = employment;
                        highlighted += 1;
                    }
                }
                scale = ColorScale::ThresholdGreen;
                color_label = "Total Employment".to_string();
                insight = format!("{highlighted} states are high employment generators (top 30%)");
            }
        }
    }

    let map = MapSeries {
        title: format!("DSS: {mode}"),
        color_label,
        aux_label: None,
        scale,
        points: summary
            .iter()
            .map(|row| {
                let coords = ctx.geo.coords_or_center(&row.state);
                MapPoint {
                    region: row.state.clone(),
                    lat: coords.lat,
                    lon: coords.lon,
                    color_value: row.highlight_score,
                    size_value: (mode == HighlightMode::None).then(|| row.msme_count as f64),
                    aux_value: None,
                }
            })
            .collect(),
    };

    let with_district: Vec<&LocationRecord> = rows.iter().filter(|r| r.district.is_some()).collect();
    let district_counts: Vec<(String, i64)> = group_fold(
        &with_district,
        |r| r.district.as_deref().unwrap_or_default(),
        |acc: &mut i64, r| *acc += r.msme_count,
    );
    let top_subregions = top_n_by(&district_counts, 15, |(_, count)| *count as f64)
        .into_iter()
        .map(|(district, count)| LabeledValue::new(district, count as f64))
        .collect();

    Ok(DssView {
        map,
        top_subregions,
        insight,
    })
}
