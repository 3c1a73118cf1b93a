//! Social inclusion tab
//!
//! Ownership and social-category composition: women-ownership map,
//! gender KPIs, category and gender distribution charts.

use crate::aggregate::support::{group_fold, pct, top_n_by};
use crate::context::AppContext;
use crate::dataset::Dataset;
use crate::dataset::records::{ProfileRecord, SocialRecord};
use crate::error::Result;
use crate::filter::filter_region;
use crate::view::{Chart, ColorScale, Kpi, LabeledValue, MapPoint, MapSeries, TabView};

const HEADER: &str = "Social Inclusion";
const MAP_CAPTION: &str =
    "Map shows female ownership percentage. Larger bubbles indicate more enterprises.";

/// Per-state ownership sums
#[derive(Debug, Clone, Copy, Default)]
struct SocialAcc {
    female_owned: i64,
    total_msmes: i64,
    sc_count: i64,
    st_count: i64,
}

/// Compute the social inclusion tab view
///
/// # Errors
/// Returns an error if the underlying table cannot be filtered or read.
pub fn social_view(
    ctx: &AppContext,
    region: Option<&str>,
    subregion: Option<&str>,
) -> Result<TabView> {
    let filtered = filter_region(ctx.store.get(Dataset::SocialProfile), region, subregion)?;

    let mut view = TabView::empty(HEADER);
    view.map_caption = MAP_CAPTION.to_string();

    let rows = SocialRecord::from_batch(&filtered)?;
    if rows.is_empty() {
        return Ok(view);
    }

    let state_agg: Vec<(String, SocialAcc)> =
        group_fold(&rows, |r| r.state.as_str(), |acc: &mut SocialAcc, r| {
            acc.female_owned += r.female_owned;
            acc.total_msmes += r.total_msmes;
            acc.sc_count += r.sc_count;
            acc.st_count += r.st_count;
        });

    // Per-state women ownership share, against total enterprises
    let women_by_state: Vec<(String, f64, i64)> = state_agg
        .iter()
        .map(|(state, acc)| {
            (
                state.clone(),
                pct(acc.female_owned as f64, acc.total_msmes as f64),
                acc.total_msmes,
            )
        })
        .collect();

    view.map = MapSeries {
        title: "Female Ownership %".to_string(),
        color_label: "Women Ownership %".to_string(),
        aux_label: None,
        scale: ColorScale::RdPu,
        points: women_by_state
            .iter()
            .map(|(state, women_pct, total)| {
                let coords = ctx.geo.coords_or_center(state);
                MapPoint {
                    region: state.clone(),
                    lat: coords.lat,
                    lon: coords.lon,
                    color_value: *women_pct,
                    size_value: Some(*total as f64),
                    aux_value: None,
                }
            })
            .collect(),
    };

    let female_total: i64 = rows.iter().map(|r| r.female_owned).sum();
    let male_total: i64 = rows.iter().map(|r| r.male_owned).sum();
    let msme_total: i64 = rows.iter().map(|r| r.total_msmes).sum();
    // The aggregate share uses the gender columns alone; the per-state
    // map metric uses total enterprises. The two denominators drift and
    // are not reconciled.
    let women_share = pct(female_total as f64, (female_total + male_total) as f64);

    let sc_st_total: i64 = rows.iter().map(|r| r.sc_count + r.st_count).sum();
    let sc_st_share = pct(sc_st_total as f64, msme_total as f64);

    if let Some((top_state, top_pct, _)) =
        top_n_by(&women_by_state, 1, |(_, women_pct, _)| *women_pct).first()
    {
        view.insights = vec![
            format!("Women own {women_share:.1}% of MSMEs ({female_total} enterprises)"),
            format!("{top_state} leads in women entrepreneurship ({top_pct:.1}%)"),
            format!("SC/ST entrepreneurs represent {sc_st_share:.1}% of total MSMEs"),
        ];
    }

    view.kpis = vec![
        Kpi::count("Women Owned", female_total.max(0) as u64),
        Kpi::count("Men Owned", male_total.max(0) as u64),
    ];

    let general_total: i64 = rows.iter().map(|r| r.general_count).sum();
    let obc_total: i64 = rows.iter().map(|r| r.obc_count).sum();
    let sc_total: i64 = rows.iter().map(|r| r.sc_count).sum();
    let st_total: i64 = rows.iter().map(|r| r.st_count).sum();
    view.charts.push(Chart::Pie {
        title: "Social Category Distribution".to_string(),
        donut: true,
        slices: vec![
            LabeledValue::new("General", general_total as f64),
            LabeledValue::new("OBC", obc_total as f64),
            LabeledValue::new("SC", sc_total as f64),
            LabeledValue::new("ST", st_total as f64),
        ],
    });
    view.charts.push(Chart::Pie {
        title: "Gender Distribution".to_string(),
        donut: false,
        slices: vec![
            LabeledValue::new("Male", male_total as f64),
            LabeledValue::new("Female", female_total as f64),
        ],
    });

    Ok(view)
}
