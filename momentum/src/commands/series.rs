// momentum/src/commands/series.rs
//
// USE CASE: Inspect a single metric over the recorded history.

use std::path::PathBuf;

use momentum_core::domain::scoring::DEFAULT_MOVING_AVERAGE_DAYS;
use momentum_core::domain::{Metric, TimeSeriesAnalyzer};
use momentum_core::infrastructure::adapters::load_snapshots;
use momentum_core::infrastructure::config::load_project_config;

use super::display;

pub fn execute(
    project_dir: PathBuf,
    metric: String,
    window: Option<u32>,
    smooth: bool,
    changes: bool,
) -> anyhow::Result<()> {
    // Fail on a bad name before touching the disk.
    let metric: Metric = metric.parse()?;

    let config = load_project_config(&project_dir)?;
    let snapshots = load_snapshots(&project_dir.join(&config.snapshots_path))?;
    let Some(now) = snapshots.last().map(|s| s.timestamp) else {
        anyhow::bail!("❌ No snapshots found for '{}'", config.name);
    };

    let mut analyzer = TimeSeriesAnalyzer::from_series(&snapshots);
    analyzer.update_weights(&config.weights)?;

    let points = if smooth {
        let days = window.map_or(DEFAULT_MOVING_AVERAGE_DAYS, |hours| hours.div_ceil(24).max(1));
        println!("📈 {} (EMA over {} day(s))", metric.display_name(), days);
        analyzer.get_moving_average_at(metric, days, now)
    } else {
        let window = window.unwrap_or(config.time_window);
        println!("📈 {} (last {}h)", metric.display_name(), window);
        analyzer.get_time_series_data_at(metric, window, now)
    };

    if points.is_empty() {
        println!("   No points in window.");
    } else {
        println!("{}", display::series_table(&points));
    }

    if changes {
        let events = analyzer.detect_trend_changes(metric);
        if events.is_empty() {
            println!("➖ No trend changes detected.");
        } else {
            println!("🔀 {} trend change(s):", events.len());
            println!("{}", display::changes_table(&events));
        }
    }

    Ok(())
}
