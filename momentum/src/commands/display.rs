// momentum/src/commands/display.rs
//
// Terminal tables shared by the commands.

use chrono::DateTime;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Table};

use momentum_core::domain::scoring::stats::format_number;
use momentum_core::domain::scoring::{
    MomentumScore, ScoringWeights, TimeSeriesAllPoint, TimeSeriesPoint, TrendChange,
};
use momentum_core::domain::AnomalyAlert;

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header);
    table
}

pub fn timestamp(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| millis.to_string())
}

pub fn score_table(score: &MomentumScore) -> Table {
    let mut table = new_table(vec!["Overall", "GitHub", "Social", "Onchain", "Community", "Trend", "Confidence"]);
    table.add_row(vec![
        Cell::new(score.overall),
        Cell::new(score.github),
        Cell::new(score.social),
        Cell::new(score.onchain),
        Cell::new(score.community),
        Cell::new(score.trend),
        Cell::new(format!("{:.2}", score.confidence)),
    ]);
    table
}

pub fn alerts_table(alerts: &[AnomalyAlert]) -> Table {
    let mut table = new_table(vec!["Severity", "Metric", "Value", "Expected", "Description"]);
    for alert in alerts {
        let (lo, hi) = alert.expected_range;
        table.add_row(vec![
            Cell::new(alert.severity),
            Cell::new(&alert.metric),
            Cell::new(format_number(alert.value)),
            Cell::new(format!("{:.2} - {:.2}", lo, hi)),
            Cell::new(&alert.description),
        ]);
    }
    table
}

pub fn weights_table(weights: &ScoringWeights) -> Table {
    let mut table = new_table(vec!["Domain", "Weight", "Share"]);
    for (name, value) in weights.named() {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(format!("{:.4}", value)),
            Cell::new(format!("{:.1}%", value * 100.0)),
        ]);
    }
    table
}

pub fn series_table(points: &[TimeSeriesPoint]) -> Table {
    let mut table = new_table(vec!["Time (UTC)", "Value"]);
    for point in points {
        table.add_row(vec![
            Cell::new(timestamp(point.timestamp)),
            Cell::new(format!("{:.2}", point.value)),
        ]);
    }
    table
}

pub fn breakdown_table(points: &[TimeSeriesAllPoint]) -> Table {
    let mut table = new_table(vec!["Time (UTC)", "GitHub", "Social", "Onchain", "Community"]);
    for point in points {
        table.add_row(vec![
            Cell::new(timestamp(point.timestamp)),
            Cell::new(format!("{:.2}%", point.github)),
            Cell::new(format!("{:.2}%", point.social)),
            Cell::new(format!("{:.2}%", point.onchain)),
            Cell::new(format!("{:.2}%", point.community)),
        ]);
    }
    table
}

pub fn changes_table(changes: &[TrendChange]) -> Table {
    let mut table = new_table(vec!["Time (UTC)", "Direction", "Strength"]);
    for change in changes {
        table.add_row(vec![
            Cell::new(timestamp(change.timestamp)),
            Cell::new(format!("{:?}", change.direction).to_lowercase()),
            Cell::new(format!("{:.1}%", change.strength * 100.0)),
        ]);
    }
    table
}
