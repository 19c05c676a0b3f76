// momentum/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `run --json` keeps stdout parseable.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            project_dir,
            json,
            context,
            output,
        } => commands::run::execute(project_dir, json, context, output).await?,

        Commands::Weights { project_dir } => commands::weights::execute(project_dir)?,

        Commands::Series {
            project_dir,
            metric,
            window,
            smooth,
            changes,
        } => commands::series::execute(project_dir, metric, window, smooth, changes)?,

        Commands::Breakdown {
            project_dir,
            window,
        } => commands::breakdown::execute(project_dir, window)?,
    }

    Ok(())
}
