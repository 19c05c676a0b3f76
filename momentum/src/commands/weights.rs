// momentum/src/commands/weights.rs
//
// USE CASE: Show the weights a project is actually scored with.

use std::path::PathBuf;

use momentum_core::domain::ScoringWeights;
use momentum_core::infrastructure::config::load_project_config;

use super::display;

pub fn execute(project_dir: PathBuf) -> anyhow::Result<()> {
    let config = load_project_config(&project_dir)?;
    let weights = ScoringWeights::default().apply(&config.weights)?;

    if config.weights.is_empty() {
        println!("⚖️  Default weights for '{}':", config.name);
    } else {
        println!("⚖️  Normalized weights for '{}':", config.name);
    }
    println!("{}", display::weights_table(&weights));
    Ok(())
}
