// momentum-core/src/infrastructure/config/project.rs

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::domain::project::configuration::ProjectConfig;
use crate::infrastructure::error::InfrastructureError;

pub const CONFIG_CANDIDATES: [&str; 2] = ["momentum.yaml", "momentum_project.yaml"];

pub const ENV_TIME_WINDOW: &str = "MOMENTUM_TIME_WINDOW";
pub const ENV_SNAPSHOTS_PATH: &str = "MOMENTUM_SNAPSHOTS_PATH";

/// Loads, layers and validates the project manifest found in `project_dir`.
#[instrument(skip(project_dir))]
pub fn load_project_config(project_dir: &Path) -> Result<ProjectConfig, InfrastructureError> {
    load_project_config_with_env(project_dir, |key| std::env::var(key).ok())
}

/// Same as [`load_project_config`] with an injectable environment lookup.
pub fn load_project_config_with_env<F>(
    project_dir: &Path,
    env: F,
) -> Result<ProjectConfig, InfrastructureError>
where
    F: Fn(&str) -> Option<String>,
{
    let config_path = find_main_config(project_dir)?;
    info!(path = ?config_path, "Loading project manifest");

    let content = fs::read_to_string(&config_path)?;
    let mut config: ProjectConfig = serde_yaml::from_str(&content)?;

    // Pattern 'Layering': MOMENTUM_TIME_WINDOW=72 momentum run
    apply_env_overrides(&mut config, env)?;

    config.validate()?;
    Ok(config)
}

fn find_main_config(root: &Path) -> Result<PathBuf, InfrastructureError> {
    for filename in CONFIG_CANDIDATES {
        let p = root.join(filename);
        if p.exists() {
            return Ok(p);
        }
    }
    Err(InfrastructureError::ConfigNotFound(format!(
        "No configuration file found in {:?}. Checked: {:?}",
        root, CONFIG_CANDIDATES
    )))
}

fn apply_env_overrides<F>(config: &mut ProjectConfig, env: F) -> Result<(), InfrastructureError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = env(ENV_TIME_WINDOW) {
        let hours = val.trim().parse::<u32>().map_err(|_| {
            InfrastructureError::ConfigError(format!(
                "{} must be a positive integer, got '{}'",
                ENV_TIME_WINDOW, val
            ))
        })?;
        info!(old = config.time_window, new = hours, "Overriding time window via ENV");
        config.time_window = hours;
    }
    if let Some(val) = env(ENV_SNAPSHOTS_PATH) {
        if val.trim().is_empty() {
            warn!("Ignoring empty {}", ENV_SNAPSHOTS_PATH);
        } else {
            info!(old = ?config.snapshots_path, new = ?val, "Overriding snapshots path via ENV");
            config.snapshots_path = val;
        }
    }
    Ok(())
}
