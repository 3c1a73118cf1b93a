//! Location & infrastructure tab
//!
//! Per-state enterprise counts: density map, total/district KPIs,
//! top-district and top-state (or DIC share) rankings.

use itertools::Itertools;

use crate::aggregate::support::{group_fold, pct, top_n_by};
use crate::context::AppContext;
use crate::dataset::Dataset;
use crate::dataset::records::{LocationRecord, ProfileRecord};
use crate::error::Result;
use crate::filter::filter_region;
use crate::view::{Chart, ColorScale, Kpi, LabeledValue, MapPoint, MapSeries, Orientation, TabView};

const HEADER: &str = "Location Distribution";
const MAP_CAPTION: &str =
    "Bubble size represents MSME density. Darker colors indicate higher concentration of enterprises.";

/// Compute the location tab view
///
/// # Errors
/// Returns an error if the underlying table cannot be filtered or read.
pub fn location_view(
    ctx: &AppContext,
    region: Option<&str>,
    subregion: Option<&str>,
) -> Result<TabView> {
    let filtered = filter_region(ctx.store.get(Dataset::LocationProfile), region, subregion)?;

    let mut view = TabView::empty(HEADER);
    view.map_caption = MAP_CAPTION.to_string();

    let rows = LocationRecord::from_batch(&filtered)?;
    if rows.is_empty() {
        return Ok(view);
    }

    let state_agg: Vec<(String, i64)> =
        group_fold(&rows, |r| r.state.as_str(), |acc: &mut i64, r| {
            *acc += r.msme_count;
        });

    view.map = MapSeries {
        title: "MSME Density".to_string(),
        color_label: "MSME Count".to_string(),
        aux_label: None,
        scale: ColorScale::Viridis,
        points: state_agg
            .iter()
            .map(|(state, count)| {
                let coords = ctx.geo.coords_or_center(state);
                MapPoint {
                    region: state.clone(),
                    lat: coords.lat,
                    lon: coords.lon,
                    color_value: *count as f64,
                    size_value: Some(*count as f64),
                    aux_value: None,
                }
            })
            .collect(),
    };

    let total: i64 = rows.iter().map(|r| r.msme_count).sum();
    let district_count = rows
        .iter()
        .filter_map(|r| r.district.as_deref())
        .unique()
        .count();

    let top_states = top_n_by(&state_agg, 3, |(_, count)| *count as f64);
    if let Some((leader, leader_count)) = top_states.first() {
        let top_3_total: i64 = top_states.iter().map(|(_, count)| count).sum();
        let top_3_share = pct(top_3_total as f64, total as f64);
        view.insights = vec![
            format!("{leader} leads with {leader_count} MSMEs"),
            format!("Top 3 states account for {top_3_share:.1}% of total enterprises"),
            format!("Total {district_count} districts have registered MSMEs"),
        ];
    }

    view.kpis = vec![
        Kpi::count("Total MSMEs", total.max(0) as u64),
        Kpi::count("Districts", district_count as u64),
    ];

    let with_district: Vec<&LocationRecord> =
        rows.iter().filter(|r| r.district.is_some()).collect();
    let district_agg: Vec<(String, i64)> = group_fold(
        &with_district,
        |r| r.district.as_deref().unwrap_or_default(),
        |acc: &mut i64, r| *acc += r.msme_count,
    );
    view.charts.push(Chart::Bar {
        title: "Top 10 Districts by MSME Count".to_string(),
        orientation: Orientation::Vertical,
        bars: top_n_by(&district_agg, 10, |(_, count)| *count as f64)
            .into_iter()
            .map(|(district, count)| LabeledValue::new(district, count as f64))
            .collect(),
    });

    if region.is_some() {
        // Single-state view: break the state down by DIC instead of
        // ranking states
        let with_dic: Vec<&LocationRecord> = rows.iter().filter(|r| r.dic_name.is_some()).collect();
        let dic_agg: Vec<(String, i64)> = group_fold(
            &with_dic,
            |r| r.dic_name.as_deref().unwrap_or_default(),
            |acc: &mut i64, r| *acc += r.msme_count,
        );
        view.charts.push(Chart::Pie {
            title: "DIC Distribution".to_string(),
            donut: true,
            slices: dic_agg
                .into_iter()
                .map(|(dic, count)| LabeledValue::new(dic, count as f64))
                .collect(),
        });
    } else {
        view.charts.push(Chart::Bar {
            title: "Top 10 States by MSME Count".to_string(),
            orientation: Orientation::Vertical,
            bars: top_n_by(&state_agg, 10, |(_, count)| *count as f64)
                .into_iter()
                .map(|(state, count)| LabeledValue::new(state, count as f64))
                .collect(),
        });
    }

    Ok(view)
}
