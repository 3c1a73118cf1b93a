//! Employment & scale tab
//!
//! Employment and investment totals: employment map, jobs/investment
//! KPIs, enterprise-type breakdown and two efficiency rankings.

use crate::aggregate::enterprise;
use crate::aggregate::support::{group_fold, ratio, top_n_by};
use crate::context::AppContext;
use crate::dataset::Dataset;
use crate::dataset::records::{EmploymentRecord, ProfileRecord};
use crate::error::Result;
use crate::filter::filter_region;
use crate::view::{Chart, ColorScale, Kpi, LabeledValue, MapPoint, MapSeries, Orientation, TabView};

const HEADER: &str = "Employment & Investment";
const MAP_CAPTION: &str =
    "Bubble size shows total employment. Color intensity indicates employment levels across states.";

/// Compute the employment tab view
///
/// # Errors
/// Returns an error if the underlying table cannot be filtered or read.
pub fn employment_view(
    ctx: &AppContext,
    region: Option<&str>,
    subregion: Option<&str>,
) -> Result<TabView> {
    let filtered = filter_region(ctx.store.get(Dataset::EmploymentProfile), region, subregion)?;

    let mut view = TabView::empty(HEADER);
    view.map_caption = MAP_CAPTION.to_string();

    let rows = EmploymentRecord::from_batch(&filtered)?;
    if rows.is_empty() {
        return Ok(view);
    }

    let state_agg: Vec<(String, i64)> =
        group_fold(&rows, |r| r.state.as_str(), |acc: &mut i64, r| {
            *acc += r.total_employment;
        });

    view.map = MapSeries {
        title: "Employment".to_string(),
        color_label: "Total Employment".to_string(),
        aux_label: None,
        scale: ColorScale::Plasma,
        points: state_agg
            .iter()
            .map(|(state, employment)| {
                let coords = ctx.geo.coords_or_center(state);
                MapPoint {
                    region: state.clone(),
                    lat: coords.lat,
                    lon: coords.lon,
                    color_value: *employment as f64,
                    size_value: Some(*employment as f64),
                    aux_value: None,
                }
            })
            .collect(),
    };

    let total_employment: i64 = rows.iter().map(|r| r.total_employment).sum();
    let total_investment: f64 = rows.iter().map(|r| r.total_investment).sum();
    let total_msmes: i64 = rows.iter().map(|r| r.total_msmes).sum();
    let investment_per_job = ratio(total_investment, total_employment as f64);
    let avg_emp_per_msme = ratio(total_employment as f64, total_msmes as f64);

    view.insights = vec![
        format!("Total {total_employment} jobs created across {total_msmes} MSMEs"),
        format!("Average {avg_emp_per_msme:.1} employees per enterprise"),
        format!("Investment efficiency: {investment_per_job:.1} lakh invested per job created"),
    ];

    view.kpis = vec![
        Kpi::count("Total Jobs", total_employment.max(0) as u64),
        Kpi::amount("Total Investment", total_investment),
        Kpi::amount("Investment per Job", investment_per_job),
    ];

    let split = enterprise::breakdown(&rows);
    view.charts.push(Chart::Bar {
        title: "Employment by Enterprise Type".to_string(),
        orientation: Orientation::Vertical,
        bars: split
            .entries
            .iter()
            .map(|entry| LabeledValue::new(entry.kind.display_name(), entry.employment))
            .collect(),
    });

    // Jobs created per unit of investment, positive rows only
    let efficient: Vec<(&EmploymentRecord, f64)> = rows
        .iter()
        .map(|r| (r, ratio(r.total_employment as f64, r.total_investment)))
        .filter(|(_, efficiency)| *efficiency > 0.0)
        .collect();
    view.charts.push(Chart::Bar {
        title: "Top 15: Employment per Lakh Investment".to_string(),
        orientation: Orientation::Horizontal,
        bars: top_n_by(&efficient, 15, |(_, efficiency)| *efficiency)
            .into_iter()
            .map(|(r, efficiency)| {
                let label = if region.is_some() {
                    r.state.clone()
                } else {
                    r.district.clone().unwrap_or_else(|| r.state.clone())
                };
                LabeledValue::new(label, efficiency)
            })
            .collect(),
    });

    view.charts.push(Chart::Bar {
        title: "Top 15 Employment Generators".to_string(),
        orientation: Orientation::Vertical,
        bars: top_n_by(&rows, 15, |r| r.total_employment as f64)
            .into_iter()
            .map(|r| {
                let label = r.district.clone().unwrap_or_else(|| r.state.clone());
                LabeledValue::new(label, r.total_employment as f64)
            })
            .collect(),
    });

    Ok(view)
}
