//! Industry profile tab
//!
//! Sector composition: manufacturing-vs-services map and grouped bars,
//! diversity index ranking. Rankings switch from state rollups to
//! district rows when a state is selected.

use crate::aggregate::support::{MeanAcc, group_fold, top_n_by};
use crate::context::AppContext;
use crate::dataset::Dataset;
use crate::dataset::records::{IndustryRecord, ProfileRecord};
use crate::error::Result;
use crate::filter::filter_region;
use crate::view::{
    Chart, ColorScale, GroupedBars, Kpi, LabeledValue, MapPoint, MapSeries, Orientation, TabView,
};

const HEADER: &str = "Industry Profile";

/// Per-state means of the three industry metrics
#[derive(Debug, Clone, Copy, Default)]
struct IndustryAcc {
    manufacturing: MeanAcc,
    services: MeanAcc,
    diversity: MeanAcc,
}

/// Compute the industry tab view
///
/// # Errors
/// Returns an error if the underlying table cannot be filtered or read.
pub fn industry_view(
    ctx: &AppContext,
    region: Option<&str>,
    subregion: Option<&str>,
) -> Result<TabView> {
    let filtered = filter_region(ctx.store.get(Dataset::IndustryProfile), region, subregion)?;

    let mut view = TabView::empty(HEADER);

    let rows = IndustryRecord::from_batch(&filtered)?;
    if rows.is_empty() {
        return Ok(view);
    }

    let state_agg: Vec<(String, IndustryAcc)> =
        group_fold(&rows, |r| r.state.as_str(), |acc: &mut IndustryAcc, r| {
            acc.manufacturing.push(r.manufacturing_pct);
            acc.services.push(r.services_pct);
            acc.diversity.push(r.industry_diversity_index);
        });

    view.map = MapSeries {
        title: "Manufacturing vs Services %".to_string(),
        color_label: "Manufacturing %".to_string(),
        aux_label: Some("Services %".to_string()),
        scale: ColorScale::RdYlGnReversed,
        points: state_agg
            .iter()
            .map(|(state, acc)| {
                let coords = ctx.geo.coords_or_center(state);
                MapPoint {
                    region: state.clone(),
                    lat: coords.lat,
                    lon: coords.lon,
                    color_value: acc.manufacturing.mean(),
                    size_value: None,
                    aux_value: Some(acc.services.mean()),
                }
            })
            .collect(),
    };

    let mut manufacturing_all = MeanAcc::default();
    let mut services_all = MeanAcc::default();
    let mut diversity_all = MeanAcc::default();
    for r in &rows {
        manufacturing_all.push(r.manufacturing_pct);
        services_all.push(r.services_pct);
        diversity_all.push(r.industry_diversity_index);
    }
    view.kpis = vec![
        Kpi::percent("Avg Manufacturing", manufacturing_all.mean()),
        Kpi::percent("Avg Services", services_all.mean()),
        Kpi::score("Avg Diversity Index", diversity_all.mean()),
    ];

    let series = vec!["Manufacturing".to_string(), "Services".to_string()];
    if region.is_some() {
        // District rows of the selected state, first 15 in table order
        let groups = rows
            .iter()
            .take(15)
            .map(|r| GroupedBars {
                label: r.district.clone().unwrap_or_else(|| r.state.clone()),
                values: vec![r.manufacturing_pct, r.services_pct],
            })
            .collect();
        view.charts.push(Chart::GroupedBar {
            title: "Manufacturing vs Services by District".to_string(),
            series,
            groups,
        });

        view.charts.push(Chart::Bar {
            title: "Industry Diversity Index by District".to_string(),
            orientation: Orientation::Vertical,
            bars: top_n_by(&rows, 15, |r| r.industry_diversity_index)
                .into_iter()
                .map(|r| {
                    LabeledValue::new(
                        r.district.clone().unwrap_or_else(|| r.state.clone()),
                        r.industry_diversity_index,
                    )
                })
                .collect(),
        });
    } else {
        let groups = top_n_by(&state_agg, 15, |(_, acc)| acc.manufacturing.mean())
            .into_iter()
            .map(|(state, acc)| GroupedBars {
                label: state,
                values: vec![acc.manufacturing.mean(), acc.services.mean()],
            })
            .collect();
        view.charts.push(Chart::GroupedBar {
            title: "Manufacturing vs Services by State (Top 15)".to_string(),
            series,
            groups,
        });

        view.charts.push(Chart::Bar {
            title: "Industry Diversity Index by State (Top 15)".to_string(),
            orientation: Orientation::Vertical,
            bars: top_n_by(&state_agg, 15, |(_, acc)| acc.diversity.mean())
                .into_iter()
                .map(|(state, acc)| LabeledValue::new(state, acc.diversity.mean()))
                .collect(),
        });
    }

    Ok(view)
}
