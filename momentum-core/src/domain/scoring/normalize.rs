// momentum-core/src/domain/scoring/normalize.rs
//
// Domain sub-scores. Each raw metric is divided by a saturation cap
// (score 1 at the cap, clamped beyond it) and combined with fixed weights.

use crate::domain::metrics::{GitHubMetrics, InteractionMetrics, OnchainMetrics, TwitterMetrics};
use crate::domain::scoring::stats::{saturate, weighted_mean};

/// GitHub: stars, forks, commit velocity, contributors, open activity.
pub fn github_score(github: &GitHubMetrics) -> f64 {
    let activity = github.issues + github.pull_requests;
    weighted_mean([
        (saturate(github.stars, 1_000.0), 0.30),
        (saturate(github.forks, 500.0), 0.20),
        (saturate(github.velocity, 10.0), 0.25),
        (saturate(github.contributors, 20.0), 0.15),
        (saturate(activity, 100.0), 0.10),
    ])
}

/// Twitter: followers, engagement, sentiment, mentions.
/// An all-zero block is an unavailable source and scores 0, so that the
/// neutral sentiment does not leak half a point into empty snapshots.
pub fn social_score(twitter: &TwitterMetrics) -> f64 {
    if twitter.is_unavailable() {
        return 0.0;
    }
    let sentiment = ((twitter.sentiment + 1.0) / 2.0).clamp(0.0, 1.0);
    weighted_mean([
        (saturate(twitter.followers, 10_000.0), 0.20),
        (saturate(twitter.engagement, 1_000.0), 0.40),
        (sentiment, 0.30),
        (saturate(twitter.mentions, 100.0), 0.10),
    ])
}

pub fn onchain_score(onchain: &OnchainMetrics) -> f64 {
    weighted_mean([
        (saturate(onchain.transactions, 1_000.0), 0.25),
        (saturate(onchain.volume, 1_000_000.0), 0.25),
        (saturate(onchain.holders, 10_000.0), 0.20),
        (saturate(onchain.liquidity, 500_000.0), 0.15),
        (saturate(onchain.unique_addresses, 1_000.0), 0.15),
    ])
}

/// Community: aggregate mentions, refined by per-channel activity when known.
pub fn community_score(mentions: f64, interactions: Option<&InteractionMetrics>) -> f64 {
    let mention_score = saturate(mentions, 50.0);

    let Some(i) = interactions else {
        return mention_score;
    };

    weighted_mean([
        (mention_score, 0.30),
        (saturate(i.discord_messages, 100.0), 0.25),
        (saturate(i.telegram_messages, 100.0), 0.20),
        (saturate(i.reddit_posts, 20.0), 0.15),
        (saturate(i.medium_posts, 5.0), 0.10),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_github_partial_profile() {
        let github = GitHubMetrics {
            stars: 100.0,
            forks: 10.0,
            contributors: 2.0,
            velocity: 1.0,
            ..Default::default()
        };
        // 0.3·0.1 + 0.2·0.02 + 0.25·0.1 + 0.15·0.1 = 0.074
        assert!(close(github_score(&github), 0.074));
    }

    #[test]
    fn test_github_saturates_at_caps() {
        let github = GitHubMetrics {
            stars: 50_000.0,
            forks: 9_000.0,
            contributors: 400.0,
            issues: 300.0,
            pull_requests: 300.0,
            velocity: 75.0,
            ..Default::default()
        };
        assert!(close(github_score(&github), 1.0));
    }

    #[test]
    fn test_social_unavailable_scores_zero() {
        assert_eq!(social_score(&TwitterMetrics::default()), 0.0);
    }

    #[test]
    fn test_social_neutral_sentiment_counts_when_live() {
        let twitter = TwitterMetrics {
            mentions: 10.0,
            ..Default::default()
        };
        // 0.3·0.5 + 0.1·0.1 = 0.16
        assert!(close(social_score(&twitter), 0.16));
    }

    #[test]
    fn test_onchain_full_caps() {
        let onchain = OnchainMetrics {
            transactions: 1_000.0,
            unique_addresses: 1_000.0,
            volume: 1_000_000.0,
            liquidity: 500_000.0,
            holders: 10_000.0,
            transfer_count: 0.0,
        };
        assert!(close(onchain_score(&onchain), 1.0));
    }

    #[test]
    fn test_community_without_interactions_uses_mentions_only() {
        assert!(close(community_score(25.0, None), 0.5));
    }

    #[test]
    fn test_community_with_interactions() {
        let interactions = InteractionMetrics {
            discord_messages: 100.0,
            ..Default::default()
        };
        // 0.3·0.5 + 0.25·1.0
        assert!(close(community_score(25.0, Some(&interactions)), 0.4));
    }
}
