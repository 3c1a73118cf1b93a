use log::{info, warn};
use msme_analytics::dss::HighlightMode;
use msme_analytics::sector::sector_mix;
use msme_analytics::{
    AppContext, DashboardConfig, Dataset, Result, Tab, highlight, regions, render_tab,
};
use std::path::PathBuf;

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let data_dir = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("data"), PathBuf::from);
    if !data_dir.exists() {
        warn!("Data directory not found: {}", data_dir.display());
        return Ok(());
    }

    info!("Loading MSME datasets from: {}", data_dir.display());
    let config = DashboardConfig {
        data_dir,
        ..DashboardConfig::default()
    };
    let ctx = AppContext::load(config);

    let states = regions(&ctx);
    info!("{} states available for selection", states.len());

    for tab in Tab::ALL {
        let view = render_tab(&ctx, tab, None, None);
        info!(
            "{}: {} KPIs, {} map points, {} charts, {} insights",
            view.header,
            view.kpis.len(),
            view.map.points.len(),
            view.charts.len(),
            view.insights.len()
        );
    }

    let dss = highlight(&ctx, None, HighlightMode::HighDensity);
    info!("DSS ({}): {}", HighlightMode::HighDensity, dss.insight);

    match sector_mix(ctx.store.get(Dataset::MsmeMaster)) {
        Ok(mix) => {
            for (sector, count) in mix {
                info!("Sector {sector}: {count} enterprises");
            }
        }
        Err(err) => warn!("Sector breakdown unavailable: {err:#}"),
    }

    // Emit the all-India location view for downstream consumers
    let location = render_tab(&ctx, Tab::Location, None, None);
    println!("{}", serde_json::to_string_pretty(&location)?);

    Ok(())
}
