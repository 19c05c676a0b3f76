// momentum-core/src/domain/metrics/snapshot.rs

use serde::{Deserialize, Serialize};

/// One observation of a project across every tracked domain.
/// Every numeric field defaults to 0 when its data source is unavailable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MomentumData {
    /// Milliseconds since epoch.
    pub timestamp: i64,
    #[serde(default)]
    pub github: GitHubMetrics,
    #[serde(default)]
    pub twitter: TwitterMetrics,
    #[serde(default)]
    pub onchain: OnchainMetrics,
    #[serde(default)]
    pub community_mentions: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interaction_patterns: Option<InteractionMetrics>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GitHubMetrics {
    pub stars: f64,
    pub forks: f64,
    pub commits: f64,
    pub contributors: f64,
    pub issues: f64,
    pub pull_requests: f64,
    pub releases: f64,
    /// Commits per day.
    pub velocity: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TwitterMetrics {
    pub mentions: f64,
    /// In [-1, 1].
    pub sentiment: f64,
    pub engagement: f64,
    pub followers: f64,
    pub retweets: f64,
    pub likes: f64,
    pub impressions: f64,
}

impl TwitterMetrics {
    /// A zero-filled block means the source was unavailable for this tick.
    pub fn is_unavailable(&self) -> bool {
        [
            self.mentions,
            self.sentiment,
            self.engagement,
            self.followers,
            self.retweets,
            self.likes,
            self.impressions,
        ]
        .iter()
        .all(|v| *v == 0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OnchainMetrics {
    pub transactions: f64,
    pub unique_addresses: f64,
    pub volume: f64,
    pub liquidity: f64,
    pub holders: f64,
    pub transfer_count: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InteractionMetrics {
    pub discord_messages: f64,
    pub telegram_messages: f64,
    pub reddit_posts: f64,
    pub medium_posts: f64,
    pub github_discussions: f64,
}

impl MomentumData {
    /// Zero-filled snapshot with every optional block present.
    pub fn empty(timestamp: i64) -> Self {
        Self {
            timestamp,
            interaction_patterns: Some(InteractionMetrics::default()),
            ..Default::default()
        }
    }
}
