// momentum/src/commands/breakdown.rs
//
// USE CASE: See which domain carried the score at each recorded point.

use std::path::PathBuf;

use momentum_core::domain::TimeSeriesAnalyzer;
use momentum_core::infrastructure::adapters::load_snapshots;
use momentum_core::infrastructure::config::load_project_config;

use super::display;

pub fn execute(project_dir: PathBuf, window: u32) -> anyhow::Result<()> {
    let config = load_project_config(&project_dir)?;
    let snapshots = load_snapshots(&project_dir.join(&config.snapshots_path))?;
    let Some(now) = snapshots.last().map(|s| s.timestamp) else {
        anyhow::bail!("❌ No snapshots found for '{}'", config.name);
    };

    let analyzer = TimeSeriesAnalyzer::from_series(&snapshots);
    let points = analyzer.get_time_series_breakdown_at(window, now);

    println!("🧭 Domain breakdown for '{}' (last {}h)", config.name, window);
    if points.is_empty() {
        println!("   No points in window.");
    } else {
        println!("{}", display::breakdown_table(&points));
    }

    Ok(())
}
