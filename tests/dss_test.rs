mod utils;

use msme_analytics::dataset::{Dataset, DatasetStore};
use msme_analytics::dss::{HighlightMode, highlight};
use msme_analytics::view::ColorScale;

use utils::{five_state_location_batch, full_store, social_batch, test_context};

#[test]
fn none_mode_colors_by_raw_counts() {
    let ctx = test_context(full_store());
    let view = highlight(&ctx, None, HighlightMode::None);

    assert_eq!(view.map.scale, ColorScale::Viridis);
    assert_eq!(view.insight, "All India view - select a highlight option");
    assert_eq!(view.map.points.len(), 3);
    for point in &view.map.points {
        // Plain mode sizes bubbles by count
        assert!(point.size_value.is_some());
    }
    // Top districts table is always present
    assert_eq!(view.top_subregions.len(), 4);
    assert_eq!(view.top_subregions[0].label, "PUNE");
}

/// The 70th percentile of [10,20,30,40,50] is 38: exactly the two
/// states at or above it stay highlighted
#[test]
fn high_density_zeroes_out_below_threshold() {
    let mut store = DatasetStore::empty();
    store.set(Dataset::LocationProfile, five_state_location_batch());
    let ctx = test_context(store);

    let view = highlight(&ctx, None, HighlightMode::HighDensity);
    assert_eq!(view.map.scale, ColorScale::ThresholdRed);
    assert!(view.insight.starts_with("2 states"));

    let highlighted: Vec<&str> = view
        .map
        .points
        .iter()
        .filter(|p| p.color_value > 0.0)
        .map(|p| p.region.as_str())
        .collect();
    assert_eq!(highlighted.len(), 2);
    assert!(highlighted.contains(&"KERALA"));
    assert!(highlighted.contains(&"PUNJAB"));

    for point in &view.map.points {
        if point.region == "DELHI" || point.region == "GOA" || point.region == "SIKKIM" {
            assert!((point.color_value).abs() < f64::EPSILON);
        }
    }
}

#[test]
fn low_female_scores_by_ownership_gap() {
    let ctx = test_context(full_store());
    let view = highlight(&ctx, None, HighlightMode::LowFemale);

    assert_eq!(view.map.scale, ColorScale::WomenGap);
    // No fixture state is below 20% female ownership
    assert!(view.insight.starts_with("0 states"));

    let maharashtra = view
        .map
        .points
        .iter()
        .find(|p| p.region == "MAHARASHTRA")
        .expect("map should cover MAHARASHTRA");
    // 200 of 500 female-owned: gap is 60
    assert!((maharashtra.color_value - 60.0).abs() < 1e-9);
}

/// An empty auxiliary table leaves the base coloring untouched
#[test]
fn low_female_with_empty_social_table_is_a_no_op() {
    let mut store = DatasetStore::empty();
    store.set(Dataset::LocationProfile, five_state_location_batch());
    let ctx = test_context(store);

    let view = highlight(&ctx, None, HighlightMode::LowFemale);
    assert_eq!(view.map.scale, ColorScale::Viridis);
    assert_eq!(view.insight, "All India view - select a highlight option");
}

#[test]
fn high_employment_highlights_top_states() {
    let ctx = test_context(full_store());
    let view = highlight(&ctx, None, HighlightMode::HighEmployment);

    assert_eq!(view.map.scale, ColorScale::ThresholdGreen);
    // Employment [1000,3000,5000]: the 70th percentile is 4200, so only
    // MAHARASHTRA stays highlighted
    assert!(view.insight.starts_with("1 states"));
    let nonzero: Vec<&str> = view
        .map
        .points
        .iter()
        .filter(|p| p.color_value > 0.0)
        .map(|p| p.region.as_str())
        .collect();
    assert_eq!(nonzero, vec!["MAHARASHTRA"]);
}

#[test]
fn high_employment_with_empty_employment_table_is_a_no_op() {
    let mut store = DatasetStore::empty();
    store.set(Dataset::LocationProfile, five_state_location_batch());
    store.set(Dataset::SocialProfile, social_batch());
    let ctx = test_context(store);

    let view = highlight(&ctx, None, HighlightMode::HighEmployment);
    assert_eq!(view.map.scale, ColorScale::Viridis);
}

#[test]
fn state_selection_narrows_the_dss_view() {
    let ctx = test_context(full_store());
    let view = highlight(&ctx, Some("MAHARASHTRA"), HighlightMode::None);
    assert_eq!(view.map.points.len(), 1);
    assert_eq!(view.map.points[0].region, "MAHARASHTRA");
    assert_eq!(view.top_subregions.len(), 2);
}

#[test]
fn empty_location_table_yields_no_data_view() {
    let ctx = test_context(DatasetStore::empty());
    let view = highlight(&ctx, None, HighlightMode::HighDensity);
    assert!(view.map.points.is_empty());
    assert_eq!(view.insight, "No data available");
}
