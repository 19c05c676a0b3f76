// momentum-core/src/domain/metrics/metric.rs

use crate::domain::error::DomainError;
use crate::domain::metrics::snapshot::MomentumData;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every series that can be extracted from a `MomentumData` stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Weighted composite score; needs the analyzer's weights to compute.
    Overall,
    GithubStars,
    GithubVelocity,
    GithubCommits,
    TwitterEngagement,
    TwitterMentions,
    TwitterSentiment,
    OnchainTransactions,
    OnchainVolume,
    OnchainHolders,
    CommunityMentions,
}

impl Metric {
    pub const ALL: [Metric; 11] = [
        Metric::Overall,
        Metric::GithubStars,
        Metric::GithubVelocity,
        Metric::GithubCommits,
        Metric::TwitterEngagement,
        Metric::TwitterMentions,
        Metric::TwitterSentiment,
        Metric::OnchainTransactions,
        Metric::OnchainVolume,
        Metric::OnchainHolders,
        Metric::CommunityMentions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overall => "overall",
            Self::GithubStars => "github_stars",
            Self::GithubVelocity => "github_velocity",
            Self::GithubCommits => "github_commits",
            Self::TwitterEngagement => "twitter_engagement",
            Self::TwitterMentions => "twitter_mentions",
            Self::TwitterSentiment => "twitter_sentiment",
            Self::OnchainTransactions => "onchain_transactions",
            Self::OnchainVolume => "onchain_volume",
            Self::OnchainHolders => "onchain_holders",
            Self::CommunityMentions => "community_mentions",
        }
    }

    /// Human label used in alert descriptions.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Overall => "Overall Momentum",
            Self::GithubStars => "GitHub Stars",
            Self::GithubVelocity => "GitHub Commit Velocity",
            Self::GithubCommits => "GitHub Commits",
            Self::TwitterEngagement => "Twitter Engagement",
            Self::TwitterMentions => "Twitter Mentions",
            Self::TwitterSentiment => "Twitter Sentiment",
            Self::OnchainTransactions => "Onchain Transactions",
            Self::OnchainVolume => "Onchain Volume",
            Self::OnchainHolders => "Token Holders",
            Self::CommunityMentions => "Community Mentions",
        }
    }

    /// Reads the metric straight from a snapshot.
    /// Returns `None` for `Overall`, which depends on scoring weights.
    /// Sentiment is remapped from [-1, 1] to [0, 100].
    pub fn field_value(&self, data: &MomentumData) -> Option<f64> {
        let value = match self {
            Self::Overall => return None,
            Self::GithubStars => data.github.stars,
            Self::GithubVelocity => data.github.velocity,
            Self::GithubCommits => data.github.commits,
            Self::TwitterEngagement => data.twitter.engagement,
            Self::TwitterMentions => data.twitter.mentions,
            Self::TwitterSentiment => (data.twitter.sentiment + 1.0) * 50.0,
            Self::OnchainTransactions => data.onchain.transactions,
            Self::OnchainVolume => data.onchain.volume,
            Self::OnchainHolders => data.onchain.holders,
            Self::CommunityMentions => data.community_mentions,
        };
        Some(value)
    }

    /// Extracts one value per snapshot, in series order.
    /// `None` for `Overall`, like [`Metric::field_value`].
    pub fn series(&self, data: &[MomentumData]) -> Option<Vec<f64>> {
        data.iter().map(|d| self.field_value(d)).collect()
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Metric {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == needle)
            .ok_or_else(|| DomainError::UnknownMetric(s.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_display_and_parsing_consistency() -> anyhow::Result<()> {
        for metric in Metric::ALL {
            assert_eq!(Metric::from_str(&metric.to_string())?, metric);
        }
        assert_eq!(Metric::from_str("GITHUB_STARS")?, Metric::GithubStars);
        Ok(())
    }

    #[test]
    fn test_unknown_metric_is_an_error() {
        let res = Metric::from_str("github_watchers");
        assert_eq!(
            res,
            Err(DomainError::UnknownMetric("github_watchers".to_string()))
        );
    }

    #[test]
    fn test_sentiment_is_remapped_to_percent() {
        let mut data = MomentumData::empty(0);
        data.twitter.sentiment = -1.0;
        assert_eq!(Metric::TwitterSentiment.field_value(&data), Some(0.0));
        data.twitter.sentiment = 0.5;
        assert_eq!(Metric::TwitterSentiment.field_value(&data), Some(75.0));
    }

    #[test]
    fn test_overall_has_no_field_value() {
        assert_eq!(Metric::Overall.field_value(&MomentumData::empty(0)), None);
    }

    #[test]
    fn test_series_extraction_preserves_order() {
        let series: Vec<MomentumData> = (0..3)
            .map(|i| {
                let mut d = MomentumData::empty(i);
                d.onchain.volume = i as f64 * 10.0;
                d
            })
            .collect();
        assert_eq!(
            Metric::OnchainVolume.series(&series),
            Some(vec![0.0, 10.0, 20.0])
        );
    }

    #[test]
    fn test_overall_has_no_raw_series() {
        let series: Vec<MomentumData> = (0..3).map(MomentumData::empty).collect();
        assert_eq!(Metric::Overall.series(&series), None);
        assert_eq!(Metric::GithubStars.series(&[]), Some(vec![]));
    }
}
