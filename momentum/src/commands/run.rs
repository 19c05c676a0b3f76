// momentum/src/commands/run.rs
//
// USE CASE: Replay recorded snapshots tick by tick and report the final state.

use anyhow::Context;
use std::path::PathBuf;
use tracing::info;

use momentum_core::application::{MomentumAgent, MomentumReport};
use momentum_core::infrastructure::adapters::{ReplayClock, ReplayFetcher, load_snapshots};
use momentum_core::infrastructure::config::load_project_config;
use momentum_core::infrastructure::fs::atomic_write;
use momentum_core::infrastructure::template::JinjaRenderer;

use super::display;

pub async fn execute(
    project_dir: PathBuf,
    json: bool,
    context: bool,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config = load_project_config(&project_dir)?;
    let snapshots_dir = project_dir.join(&config.snapshots_path);
    let snapshots = load_snapshots(&snapshots_dir)?;

    if snapshots.is_empty() {
        anyhow::bail!(
            "❌ No snapshots found in {}\n👉 Add *.json or *.jsonl files under '{}'.",
            snapshots_dir.display(),
            config.snapshots_path
        );
    }

    let stamps: Vec<i64> = snapshots.iter().map(|s| s.timestamp).collect();
    let clock = ReplayClock::new(stamps[0]);
    let mut agent =
        MomentumAgent::with_clock(ReplayFetcher::new(snapshots), JinjaRenderer::new(), clock.clone());

    if !json {
        println!("🚀 Replaying {} snapshots for '{}'...", stamps.len(), config.name);
    }

    let mut last: Option<MomentumReport> = None;
    for ts in &stamps {
        clock.advance_to(*ts);
        last = Some(agent.run(&config).await?);
    }
    let report = last.context("No tick was executed")?;
    info!(ticks = stamps.len(), overall = report.score.overall, "Replay finished");

    if let Some(path) = &output {
        let body = serde_json::to_string_pretty(&report)?;
        atomic_write(path, body)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report, agent.alert_history(&report.project_id).len());
        if let Some(path) = &output {
            println!("📄 JSON report saved to {}", path.display());
        }
    }

    if context {
        println!("{}", report.narrative_context);
    }

    Ok(())
}

fn print_summary(report: &MomentumReport, history_len: usize) {
    println!("\n📊 Momentum at {}", display::timestamp(report.data.timestamp));
    println!("{}", display::score_table(&report.score));

    if report.alerts.is_empty() {
        println!("✅ No anomalies on the latest tick.");
    } else {
        println!("\n⚠️  {} anomaly alert(s) on the latest tick:", report.alerts.len());
        println!("{}", display::alerts_table(&report.alerts));
    }
    println!("🗂️  {} alert(s) recorded over the replay.", history_len);
}
