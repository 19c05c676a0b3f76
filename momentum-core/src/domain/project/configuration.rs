// momentum-core/src/domain/project/configuration.rs

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use validator::{Validate, ValidationError};

use crate::domain::scoring::{DEFAULT_SERIES_WINDOW_HOURS, PartialWeights, ScoringWeights};

fn re_contract_address() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^0x[a-fA-F0-9]{40}$").unwrap_or_else(|_| {
            // Never matches; the pattern above is a literal.
            Regex::new("$^").unwrap_or_else(|_| unreachable!())
        })
    })
}

fn re_slug_separator() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap_or_else(|_| unreachable!()))
}

/// A tracked project and how it is scored.
#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
#[serde(rename_all = "kebab-case")]
#[validate(schema(function = "validate_project"))]
pub struct ProjectConfig {
    #[validate(length(min = 1, message = "Project name cannot be empty"))]
    pub name: String,

    /// Stable key for the per-project series. Derived from `name` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_repo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord: Option<DiscordChannel>,

    /// Hours of history exposed in timelines and breakdowns.
    #[validate(range(min = 1, max = 8760))]
    #[serde(default = "default_time_window")]
    pub time_window: u32,

    /// Minutes between ticks.
    #[validate(range(min = 1))]
    #[serde(default = "default_update_interval")]
    pub update_interval: u32,

    #[serde(default)]
    pub weights: PartialWeights,

    #[serde(default = "default_snapshots_path")]
    pub snapshots_path: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct DiscordChannel {
    pub server_id: String,
    pub channel_id: String,
}

fn default_time_window() -> u32 {
    DEFAULT_SERIES_WINDOW_HOURS
}
fn default_update_interval() -> u32 {
    60
}
fn default_snapshots_path() -> String {
    "data".to_string()
}

impl ProjectConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            github_repo: None,
            twitter_handle: None,
            contract_address: None,
            token_symbol: None,
            telegram: None,
            discord: None,
            time_window: default_time_window(),
            update_interval: default_update_interval(),
            weights: PartialWeights::default(),
            snapshots_path: default_snapshots_path(),
        }
    }

    /// Explicit `id`, else a lowercase slug of `name`.
    pub fn project_id(&self) -> String {
        if let Some(id) = self.id.as_deref().map(str::trim)
            && !id.is_empty()
        {
            return id.to_string();
        }
        re_slug_separator()
            .replace_all(&self.name.to_lowercase(), "-")
            .trim_matches('-')
            .to_string()
    }
}

fn validate_project(config: &ProjectConfig) -> Result<(), ValidationError> {
    if let Some(address) = &config.contract_address
        && !re_contract_address().is_match(address)
    {
        let mut err = ValidationError::new("contract_address");
        err.message = Some(format!("'{}' is not a valid Ethereum address", address).into());
        return Err(err);
    }

    // Same merge the analyzer performs, so a config that loads also scores.
    if let Err(e) = ScoringWeights::default().apply(&config.weights) {
        let mut err = ValidationError::new("weights");
        err.message = Some(e.to_string().into());
        return Err(err);
    }

    Ok(())
}
