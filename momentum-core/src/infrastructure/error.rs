// momentum-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(momentum::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(momentum::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    #[diagnostic(code(momentum::infra::config))]
    ConfigError(String),

    #[error("Project configuration not found at '{0}'")]
    #[diagnostic(
        code(momentum::infra::config_missing),
        help("Create a momentum.yaml (or momentum_project.yaml) in the project directory.")
    )]
    ConfigNotFound(String),

    #[error("Invalid project configuration: {0}")]
    #[diagnostic(code(momentum::infra::validation))]
    Validation(#[from] validator::ValidationErrors),

    // --- SNAPSHOTS ---
    #[error("Snapshot Parsing Error in '{path}': {source}")]
    #[diagnostic(
        code(momentum::infra::json),
        help("Each snapshot must be a JSON object with at least a numeric `timestamp`.")
    )]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No more snapshots to replay")]
    #[diagnostic(code(momentum::infra::snapshots_exhausted))]
    SnapshotsExhausted,

    // --- TEMPLATING ---
    #[error("Template Rendering Error: {0}")]
    #[diagnostic(
        code(momentum::infra::template),
        help("Check the Jinja syntax ({{ ... }}) of the context template.")
    )]
    TemplateError(#[from] minijinja::Error),
}
