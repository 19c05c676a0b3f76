// momentum/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use momentum_core::domain::scoring::DEFAULT_BREAKDOWN_WINDOW_HOURS;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "momentum")]
#[command(about = "Cross-domain momentum scoring & anomaly detection", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🚀 Replays recorded snapshots through the scoring engine
    Run {
        /// Project directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Print the final report as JSON
        #[arg(long)]
        json: bool,

        /// Print the narrative context document
        #[arg(long)]
        context: bool,

        /// Also write the JSON report to this file
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// ⚖️  Shows the effective (normalized) scoring weights
    Weights {
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
    },

    /// 📈 Prints one metric over the time window
    Series {
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Metric name (ex: "overall", "twitter_engagement")
        #[arg(long, short)]
        metric: String,

        /// Window in hours (defaults to the project's time-window, or 7 days with --smooth)
        #[arg(long, short)]
        window: Option<u32>,

        /// Show the EMA moving average instead of raw values
        #[arg(long)]
        smooth: bool,

        /// Also list trend-change events over the whole series
        #[arg(long)]
        changes: bool,
    },

    /// 🧭 Per-domain score percentages for each recorded point
    Breakdown {
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Window in hours
        #[arg(long, short, default_value_t = DEFAULT_BREAKDOWN_WINDOW_HOURS)]
        window: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use clap::Parser;

    #[test]
    fn test_cli_parse_run_defaults() -> Result<()> {
        let args = Cli::parse_from(["momentum", "run"]);
        match args.command {
            Commands::Run {
                project_dir,
                json,
                context,
                output,
            } => {
                assert_eq!(project_dir.to_string_lossy(), ".");
                assert!(!json && !context);
                assert_eq!(output, None);
                Ok(())
            }
            _ => bail!("Expected Run command"),
        }
    }

    #[test]
    fn test_cli_parse_run_flags() -> Result<()> {
        let args = Cli::parse_from([
            "momentum",
            "run",
            "--json",
            "--context",
            "--project-dir",
            "/tmp",
            "-o",
            "out.json",
        ]);
        match args.command {
            Commands::Run {
                project_dir,
                json,
                context,
                output,
            } => {
                assert_eq!(project_dir.to_string_lossy(), "/tmp");
                assert!(json && context);
                assert_eq!(output, Some(PathBuf::from("out.json")));
                Ok(())
            }
            _ => bail!("Expected Run command"),
        }
    }

    #[test]
    fn test_cli_parse_series() -> Result<()> {
        let args = Cli::parse_from([
            "momentum",
            "series",
            "--metric",
            "github_stars",
            "--window",
            "48",
            "--changes",
        ]);
        match args.command {
            Commands::Series {
                metric,
                window,
                smooth,
                changes,
                ..
            } => {
                assert_eq!(metric, "github_stars");
                assert_eq!(window, Some(48));
                assert!(!smooth);
                assert!(changes);
                Ok(())
            }
            _ => bail!("Expected Series command"),
        }
    }

    #[test]
    fn test_cli_parse_breakdown_default_window() -> Result<()> {
        let args = Cli::parse_from(["momentum", "breakdown"]);
        match args.command {
            Commands::Breakdown { window, .. } => {
                assert_eq!(window, 48);
                Ok(())
            }
            _ => bail!("Expected Breakdown command"),
        }
    }

    #[test]
    fn test_cli_series_requires_metric() {
        assert!(Cli::try_parse_from(["momentum", "series"]).is_err());
    }
}
