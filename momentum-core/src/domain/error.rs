// momentum-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, PartialEq)]
pub enum DomainError {
    #[error("Invalid weight for \"{key}\": must be a non-negative number (got {value})")]
    #[diagnostic(
        code(momentum::domain::invalid_weight),
        help("Weights must be finite and >= 0. They are renormalized to sum to 1.")
    )]
    InvalidWeight { key: String, value: f64 },

    #[error("Total weight cannot be zero")]
    #[diagnostic(
        code(momentum::domain::zero_total_weight),
        help("At least one of github/social/onchain/community must be > 0.")
    )]
    ZeroTotalWeight,

    #[error("Invalid input: {0}")]
    #[diagnostic(code(momentum::domain::invalid_input))]
    InvalidInput(String),

    #[error("Unknown metric '{0}'")]
    #[diagnostic(
        code(momentum::domain::unknown_metric),
        help("Known metrics: overall, github_stars, github_velocity, github_commits, twitter_engagement, twitter_mentions, twitter_sentiment, onchain_transactions, onchain_volume, onchain_holders, community_mentions.")
    )]
    UnknownMetric(String),
}

impl DomainError {
    /// True for the weight-validation family raised by `update_weights`.
    pub fn is_invalid_weight_input(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidWeight { .. } | DomainError::ZeroTotalWeight
        )
    }
}
