//! Presentation-boundary data types
//!
//! Every view computation ends in one of these serializable structures,
//! handed to the rendering layer as-is. Nothing here knows about chart
//! styling or layout; the types carry exactly the data a renderer needs.

use serde::Serialize;

use crate::dataset::records::ScoreCategory;

/// A single key-performance-indicator tile
#[derive(Debug, Clone, Serialize)]
pub struct Kpi {
    /// Short display label
    pub label: String,
    /// The indicator value
    pub value: KpiValue,
}

impl Kpi {
    /// A whole-number KPI (enterprise or job counts)
    #[must_use]
    pub fn count(label: &str, value: u64) -> Self {
        Self {
            label: label.to_string(),
            value: KpiValue::Count(value),
        }
    }

    /// A monetary KPI (investment figures, in lakh)
    #[must_use]
    pub fn amount(label: &str, value: f64) -> Self {
        Self {
            label: label.to_string(),
            value: KpiValue::Amount(value),
        }
    }

    /// A percentage KPI
    #[must_use]
    pub fn percent(label: &str, value: f64) -> Self {
        Self {
            label: label.to_string(),
            value: KpiValue::Percent(value),
        }
    }

    /// A unitless score KPI
    #[must_use]
    pub fn score(label: &str, value: f64) -> Self {
        Self {
            label: label.to_string(),
            value: KpiValue::Score(value),
        }
    }

    /// A textual KPI (e.g. a leading state name)
    #[must_use]
    pub fn text(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: KpiValue::Text(value.to_string()),
        }
    }
}

/// Value payload of a KPI tile
#[derive(Debug, Clone, Serialize)]
pub enum KpiValue {
    /// Whole-number count
    Count(u64),
    /// Monetary amount in lakh
    Amount(f64),
    /// Percentage in [0, 100]
    Percent(f64),
    /// Unitless score
    Score(f64),
    /// Free text
    Text(String),
}

/// Continuous color scale a renderer should apply to map points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColorScale {
    Viridis,
    Plasma,
    RdPu,
    RdYlGn,
    RdYlGnReversed,
    /// Grey below threshold, red gradient above
    ThresholdRed,
    /// Grey below threshold, green gradient above
    ThresholdGreen,
    /// Green (low gap) through yellow to orange (high gap)
    WomenGap,
}

/// One bubble on the country map
#[derive(Debug, Clone, Serialize)]
pub struct MapPoint {
    /// State name
    pub region: String,
    pub lat: f64,
    pub lon: f64,
    /// Value driving the color scale
    pub color_value: f64,
    /// Optional value driving the bubble size
    pub size_value: Option<f64>,
    /// Optional secondary value for hover display
    pub aux_value: Option<f64>,
}

/// A map-ready series of per-state points
#[derive(Debug, Clone, Serialize)]
pub struct MapSeries {
    /// Map title
    pub title: String,
    /// Label of the color-driving metric
    pub color_label: String,
    /// Label of the secondary hover metric, when present
    pub aux_label: Option<String>,
    /// Color scale to apply
    pub scale: ColorScale,
    /// Per-state points
    pub points: Vec<MapPoint>,
}

impl MapSeries {
    /// A series with no points
    #[must_use]
    pub fn empty() -> Self {
        Self {
            title: String::new(),
            color_label: String::new(),
            aux_label: None,
            scale: ColorScale::Viridis,
            points: Vec::new(),
        }
    }
}

/// A labelled numeric value, the unit of most chart datasets
#[derive(Debug, Clone, Serialize)]
pub struct LabeledValue {
    pub label: String,
    pub value: f64,
}

impl LabeledValue {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Bar direction for bar charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Bars for one label in a grouped bar chart, parallel to the series list
#[derive(Debug, Clone, Serialize)]
pub struct GroupedBars {
    pub label: String,
    pub values: Vec<f64>,
}

/// One entry of the development score ranking
#[derive(Debug, Clone, Serialize)]
pub struct ScoreEntry {
    pub region: String,
    pub score: f64,
    pub category: Option<ScoreCategory>,
    pub scale_score: f64,
    pub social_score: f64,
    pub employment_score: f64,
    pub industry_score: f64,
}

/// One trace of a radar chart; values are closed cyclically (the first
/// value is repeated at the end) to match the axes
#[derive(Debug, Clone, Serialize)]
pub struct RadarTrace {
    pub label: String,
    pub values: Vec<f64>,
}

/// One development category band with its state count and mean score
#[derive(Debug, Clone, Serialize)]
pub struct CategoryBand {
    pub category: ScoreCategory,
    pub count: u64,
    pub mean_score: f64,
}

/// A renderable chart dataset
#[derive(Debug, Clone, Serialize)]
pub enum Chart {
    /// Simple bar chart
    Bar {
        title: String,
        orientation: Orientation,
        bars: Vec<LabeledValue>,
    },
    /// Pie or donut chart
    Pie {
        title: String,
        donut: bool,
        slices: Vec<LabeledValue>,
    },
    /// Grouped bar chart with one bar per series entry per group
    GroupedBar {
        title: String,
        series: Vec<String>,
        groups: Vec<GroupedBars>,
    },
    /// Horizontal score ranking with category coloring
    ScoreRanking {
        title: String,
        entries: Vec<ScoreEntry>,
    },
    /// Multi-dimensional radar comparison
    Radar {
        title: String,
        axes: Vec<String>,
        traces: Vec<RadarTrace>,
    },
    /// Category histogram combined with per-category mean score
    CategoryCombo {
        title: String,
        bands: Vec<CategoryBand>,
    },
}

/// Everything a dashboard tab hands to the renderer
#[derive(Debug, Clone, Serialize)]
pub struct TabView {
    /// Section header for the chart column
    pub header: String,
    /// Short explanation shown under the map title
    pub map_caption: String,
    /// KPI tiles
    pub kpis: Vec<Kpi>,
    /// Map-ready per-state series
    pub map: MapSeries,
    /// One to three chart datasets
    pub charts: Vec<Chart>,
    /// Narrative insight statements
    pub insights: Vec<String>,
}

impl TabView {
    /// A neutral view with nothing to show
    #[must_use]
    pub fn empty(header: &str) -> Self {
        Self {
            header: header.to_string(),
            map_caption: String::new(),
            kpis: Vec::new(),
            map: MapSeries::empty(),
            charts: Vec::new(),
            insights: Vec::new(),
        }
    }
}

/// Decision-support view: highlighted map, top districts and one insight
#[derive(Debug, Clone, Serialize)]
pub struct DssView {
    /// Highlighted per-state map
    pub map: MapSeries,
    /// Top districts by enterprise count
    pub top_subregions: Vec<LabeledValue>,
    /// Single decision insight line
    pub insight: String,
}

impl DssView {
    /// A view with no map content and the given insight text
    #[must_use]
    pub fn empty(insight: &str) -> Self {
        Self {
            map: MapSeries::empty(),
            top_subregions: Vec::new(),
            insight: insight.to_string(),
        }
    }
}
