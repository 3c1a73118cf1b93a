//! Development scorecard tab
//!
//! Precomputed per-state composite scores: score map, ranking with
//! category coloring, top-5 radar profiles and the category histogram.
//! Only the state selector applies on this tab; the score table has no
//! district granularity.

use crate::aggregate::support::{MeanAcc, ratio, top_n_by};
use crate::context::AppContext;
use crate::dataset::Dataset;
use crate::dataset::records::{ProfileRecord, ScoreCategory, ScoreRecord};
use crate::error::Result;
use crate::filter::filter_region;
use crate::view::{
    CategoryBand, Chart, ColorScale, Kpi, MapPoint, MapSeries, RadarTrace, ScoreEntry, TabView,
};

const HEADER: &str = "Development Scorecard";
const MAP_CAPTION: &str =
    "Color coding shows MSME development score (Red: Low, Yellow: Medium, Green: High).";

const RADAR_AXES: [&str; 4] = [
    "Scale Score",
    "Social Score",
    "Employment Score",
    "Industry Score",
];

/// Compute the development scorecard view
///
/// # Errors
/// Returns an error if the underlying table cannot be filtered or read.
pub fn score_view(ctx: &AppContext, region: Option<&str>) -> Result<TabView> {
    let filtered = filter_region(ctx.store.get(Dataset::CompositeScore), region, None)?;

    let mut view = TabView::empty(HEADER);
    view.map_caption = MAP_CAPTION.to_string();

    let rows = ScoreRecord::from_batch(&filtered)?;
    if rows.is_empty() {
        return Ok(view);
    }

    view.map = MapSeries {
        title: "MSME Score".to_string(),
        color_label: "Final MSME Score".to_string(),
        aux_label: None,
        scale: ColorScale::RdYlGn,
        points: rows
            .iter()
            .map(|r| {
                let coords = ctx.geo.coords_or_center(&r.state);
                MapPoint {
                    region: r.state.clone(),
                    lat: coords.lat,
                    lon: coords.lon,
                    color_value: r.final_score,
                    size_value: None,
                    aux_value: None,
                }
            })
            .collect(),
    };

    let mut score_mean = MeanAcc::default();
    for r in &rows {
        score_mean.push(r.final_score);
    }
    let avg_score = score_mean.mean();

    let ranked = top_n_by(&rows, rows.len(), |r| r.final_score);
    let leader = &ranked[0];

    let count_in = |category: ScoreCategory| -> u64 {
        rows.iter().filter(|r| r.category == Some(category)).count() as u64
    };
    let developing_count = count_in(ScoreCategory::Developing);
    let nascent_count = count_in(ScoreCategory::Nascent);

    view.insights = vec![
        format!(
            "{} ranks #1 with {:.1} score",
            leader.state, leader.final_score
        ),
        format!(
            "{developing_count} states in 'Developing' stage, {nascent_count} need urgent focus"
        ),
        format!("National average MSME development score: {avg_score:.1}/100"),
    ];

    view.kpis = vec![
        Kpi::score("Avg MSME Score", avg_score),
        Kpi::text("Top Performer", &leader.state),
        Kpi::count("States/UTs", rows.len() as u64),
    ];

    view.charts.push(Chart::ScoreRanking {
        title: "Top 20 State Rankings by MSME Score".to_string(),
        entries: ranked
            .iter()
            .take(20)
            .map(|r| ScoreEntry {
                region: r.state.clone(),
                score: r.final_score,
                category: r.category,
                scale_score: r.scale_score,
                social_score: r.social_score,
                employment_score: r.employment_score,
                industry_score: r.industry_score,
            })
            .collect(),
    });

    // Radar axes and each trace are closed cyclically for rendering
    let mut axes: Vec<String> = RADAR_AXES.iter().map(ToString::to_string).collect();
    axes.push(RADAR_AXES[0].to_string());
    view.charts.push(Chart::Radar {
        title: "Top 5 States: Multi-Dimensional Score Analysis".to_string(),
        axes,
        traces: ranked
            .iter()
            .take(5)
            .map(|r| {
                let values = vec![
                    r.scale_score,
                    r.social_score,
                    r.employment_score,
                    r.industry_score,
                    r.scale_score,
                ];
                RadarTrace {
                    label: r.state.clone(),
                    values,
                }
            })
            .collect(),
    });

    view.charts.push(Chart::CategoryCombo {
        title: "Category Distribution & Average Scores".to_string(),
        bands: ScoreCategory::ALL
            .into_iter()
            .map(|category| {
                let members: Vec<&ScoreRecord> = rows
                    .iter()
                    .filter(|r| r.category == Some(category))
                    .collect();
                let total: f64 = members.iter().map(|r| r.final_score).sum();
                CategoryBand {
                    category,
                    count: members.len() as u64,
                    mean_score: ratio(total, members.len() as f64),
                }
            })
            .collect(),
    });

    Ok(view)
}
