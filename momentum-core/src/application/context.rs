// momentum-core/src/application/context.rs

// Markdown context handed to the narrative layer after every tick.

use serde_json::{Value, json};

use crate::application::ports::ContextRenderer;
use crate::domain::anomaly::AnomalyAlert;
use crate::domain::metrics::MomentumData;
use crate::domain::scoring::TimeSeriesAllPoint;
use crate::error::MomentumError;

pub const MOMENTUM_CONTEXT_TEMPLATE: &str = r#"# 🔍 Momentum Analysis Context: {{ project }}

## 📦 GitHub Activity
- Stars: {{ data.github.stars | num }}
- Forks: {{ data.github.forks | num }}
- Commits: {{ data.github.commits | num }}
- Contributors: {{ data.github.contributors | num }}
- Issues: {{ data.github.issues | num }}
- Pull Requests: {{ data.github.pullRequests | num }}
- Releases: {{ data.github.releases | num }}
- Velocity: {{ data.github.velocity | fixed }} commits/day

## 🐦 Twitter Signals
- Mentions: {{ data.twitter.mentions | num }}
- Sentiment: {{ data.twitter.sentiment | fixed }}
- Engagement: {{ data.twitter.engagement | num }}
- Followers: {{ data.twitter.followers | num }}
- Likes: {{ data.twitter.likes | num }}
- Retweets: {{ data.twitter.retweets | num }}
- Impressions: {{ data.twitter.impressions | compact }}

## 🧠 Community Interaction
- Discord Messages: {{ interactions.discordMessages | num }}
- Telegram Messages: {{ interactions.telegramMessages | num }}
- Reddit Posts: {{ interactions.redditPosts | num }}
- Medium Posts: {{ interactions.mediumPosts | num }}
- GitHub Discussions: {{ interactions.githubDiscussions | num }}
- Total Community Mentions: {{ data.communityMentions | num }}

## 🔗 Onchain Activity
- Transactions: {{ data.onchain.transactions | num }}
- Unique Addresses: {{ data.onchain.uniqueAddresses | num }}
- Volume: {{ data.onchain.volume | fixed }}
- Liquidity: ${{ data.onchain.liquidity | fixed }}
- Holders: {{ data.onchain.holders | num }}
- Transfer Count: {{ data.onchain.transferCount | num }}

## 🧭 Federated Time-Series Breakdown
{% for row in breakdown %}
- {{ row.timestamp | datetime }}: GitHub {{ row.github | fixed }}% • Social {{ row.social | fixed }}% • Onchain {{ row.onchain | fixed }}% • Community {{ row.community | fixed }}%
{% else %}
No breakdown data in the current window.
{% endfor %}

## ⚠️ Recent Anomaly Alerts
{% for alert in alerts %}
- [{{ alert.metric }}] {{ alert.description }} (Value: {{ alert.value | num }}, Expected: {{ alert.expectedRange[0] | num }} - {{ alert.expectedRange[1] | num }})
{% else %}
No recent anomaly alerts.
{% endfor %}

### Notes:
Use this context to understand trend direction, signal alignment, anomaly clusters, and cross-domain project health.
"#;

/// JSON context consumed by [`MOMENTUM_CONTEXT_TEMPLATE`].
pub fn build_context(
    project: &str,
    data: &MomentumData,
    alerts: &[AnomalyAlert],
    breakdown: &[TimeSeriesAllPoint],
) -> Result<Value, MomentumError> {
    let interactions = data.interaction_patterns.clone().unwrap_or_default();
    let to_value = |value: Result<Value, serde_json::Error>| {
        value.map_err(|e| MomentumError::InternalError(format!("context serialization: {}", e)))
    };

    Ok(json!({
        "project": project,
        "data": to_value(serde_json::to_value(data))?,
        "interactions": to_value(serde_json::to_value(&interactions))?,
        "alerts": to_value(serde_json::to_value(alerts))?,
        "breakdown": to_value(serde_json::to_value(breakdown))?,
    }))
}

pub fn format_momentum_context<R: ContextRenderer + ?Sized>(
    renderer: &R,
    project: &str,
    data: &MomentumData,
    alerts: &[AnomalyAlert],
    breakdown: &[TimeSeriesAllPoint],
) -> Result<String, MomentumError> {
    let context = build_context(project, data, alerts, breakdown)?;
    renderer.render(MOMENTUM_CONTEXT_TEMPLATE, &context)
}
