// momentum-core/src/application/agent.rs

use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

use crate::application::context::format_momentum_context;
use crate::application::ports::ContextRenderer;
use crate::domain::anomaly::{AnomalyAlert, AnomalyDetector};
use crate::domain::metrics::{Metric, MomentumData};
use crate::domain::project::ProjectConfig;
use crate::domain::scoring::{
    MomentumScore, ScoringWeights, TimeSeriesAllPoint, TimeSeriesAnalyzer, TimeSeriesPoint,
};
use crate::domain::series::SeriesStore;
use crate::error::MomentumError;
use crate::ports::{Clock, MomentumFetcher, SystemClock};

/// Confidence reported when the tick could not fetch fresh data.
pub const FALLBACK_CONFIDENCE: f64 = 0.5;

/// Everything one tick produces for a project.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MomentumReport {
    pub project_id: String,
    pub score: MomentumScore,
    pub data: MomentumData,
    pub alerts: Vec<AnomalyAlert>,
    pub timeline: Vec<TimeSeriesPoint>,
    pub breakdown: Vec<TimeSeriesAllPoint>,
    pub narrative_context: String,
    /// True when the fetch failed and the report carries placeholder values.
    pub degraded: bool,
}

/// Per-tick orchestration: fetch, append, score, detect, render.
///
/// Holds the rolling series of every project it has seen plus one
/// detector per project. `run` takes `&mut self`, so ticks on one agent
/// never overlap.
pub struct MomentumAgent<F, R, C = SystemClock> {
    fetcher: F,
    renderer: R,
    clock: C,
    store: SeriesStore,
    detectors: HashMap<String, AnomalyDetector>,
}

impl<F, R> MomentumAgent<F, R, SystemClock>
where
    F: MomentumFetcher,
    R: ContextRenderer,
{
    pub fn new(fetcher: F, renderer: R) -> Self {
        Self::with_clock(fetcher, renderer, SystemClock)
    }
}

impl<F, R, C> MomentumAgent<F, R, C>
where
    F: MomentumFetcher,
    R: ContextRenderer,
    C: Clock,
{
    pub fn with_clock(fetcher: F, renderer: R, clock: C) -> Self {
        Self {
            fetcher,
            renderer,
            clock,
            store: SeriesStore::new(),
            detectors: HashMap::new(),
        }
    }

    pub fn store(&self) -> &SeriesStore {
        &self.store
    }

    pub fn alert_history(&self, project_id: &str) -> Vec<AnomalyAlert> {
        self.detectors
            .get(project_id)
            .map(|d| d.alert_history().cloned().collect())
            .unwrap_or_default()
    }

    #[instrument(skip(self, config), fields(project = %config.name))]
    pub async fn run(&mut self, config: &ProjectConfig) -> Result<MomentumReport, MomentumError> {
        let project_id = config.project_id();
        let now = self.clock.now_ms();

        // Bad weights fail the tick before anything is fetched or stored.
        let weights = ScoringWeights::default().apply(&config.weights)?;

        let snapshot = match self.fetcher.fetch(config).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "Fetch failed, returning fallback report");
                return self.fallback_report(config, project_id, now);
            }
        };

        let len = self.store.append(&project_id, snapshot.clone());
        debug!(len, timestamp = snapshot.timestamp, "Snapshot appended");

        let series = self.store.series(&project_id);

        let analyzer = TimeSeriesAnalyzer::from_series(series).with_weights(weights);
        let score = analyzer.calculate_momentum_score(Some(&snapshot));

        let detector = self.detectors.entry(project_id.clone()).or_default();
        let mut alerts = detector.detect_anomalies_at(series, now);
        alerts.extend(detector.detect_pattern_anomalies_at(series, now));

        let timeline = analyzer.get_time_series_data_at(Metric::Overall, config.time_window, now);
        let breakdown = analyzer.get_time_series_breakdown_at(config.time_window, now);

        let narrative_context =
            format_momentum_context(&self.renderer, &config.name, &snapshot, &alerts, &breakdown)?;

        info!(
            overall = score.overall,
            trend = %score.trend,
            confidence = score.confidence,
            alerts = alerts.len(),
            "Momentum tick complete"
        );

        Ok(MomentumReport {
            project_id,
            score,
            data: snapshot,
            alerts,
            timeline,
            breakdown,
            narrative_context,
            degraded: false,
        })
    }

    // The series is left untouched.
    fn fallback_report(
        &self,
        config: &ProjectConfig,
        project_id: String,
        now: i64,
    ) -> Result<MomentumReport, MomentumError> {
        let data = MomentumData::empty(now);
        let narrative_context =
            format_momentum_context(&self.renderer, &config.name, &data, &[], &[])?;

        Ok(MomentumReport {
            project_id,
            score: MomentumScore {
                confidence: FALLBACK_CONFIDENCE,
                ..MomentumScore::default()
            },
            data,
            alerts: Vec::new(),
            timeline: Vec::new(),
            breakdown: Vec::new(),
            narrative_context,
            degraded: true,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::scoring::{PartialWeights, Trend};
    use crate::domain::{DomainError, Severity};
    use crate::infrastructure::adapters::ReplayFetcher;
    use crate::infrastructure::template::JinjaRenderer;
    use crate::ports::FixedClock;
    use anyhow::Result;
    use async_trait::async_trait;

    const HOUR_MS: i64 = 3_600_000;

    struct OfflineFetcher;

    #[async_trait]
    impl MomentumFetcher for OfflineFetcher {
        async fn fetch(&self, _project: &ProjectConfig) -> Result<MomentumData, MomentumError> {
            Err(MomentumError::InternalError("upstream offline".to_string()))
        }
    }

    fn snapshot(ts: i64, engagement: f64) -> MomentumData {
        let mut d = MomentumData::empty(ts);
        d.github.stars = 100.0;
        d.github.forks = 10.0;
        d.github.contributors = 2.0;
        d.github.velocity = 1.0;
        d.twitter.engagement = engagement;
        d.twitter.followers = 500.0;
        d
    }

    fn agent_over(
        snapshots: Vec<MomentumData>,
    ) -> MomentumAgent<ReplayFetcher, JinjaRenderer, FixedClock> {
        let now = snapshots.iter().map(|s| s.timestamp).max().unwrap_or(0);
        MomentumAgent::with_clock(
            ReplayFetcher::new(snapshots),
            JinjaRenderer::new(),
            FixedClock(now),
        )
    }

    #[tokio::test]
    async fn test_fetch_failure_returns_fallback() -> Result<()> {
        let mut agent =
            MomentumAgent::with_clock(OfflineFetcher, JinjaRenderer::new(), FixedClock(7));
        let config = ProjectConfig::new("Offline");

        let report = agent.run(&config).await?;
        assert!(report.degraded);
        assert_eq!(report.score.overall, 0);
        assert_eq!(report.score.trend, Trend::Stable);
        assert!((report.score.confidence - FALLBACK_CONFIDENCE).abs() < 1e-12);
        assert_eq!(report.data.timestamp, 7);
        assert!(report.alerts.is_empty() && report.timeline.is_empty() && report.breakdown.is_empty());
        assert!(report.narrative_context.contains("No recent anomaly alerts."));
        assert!(agent.store().is_empty("offline"));
        Ok(())
    }

    #[tokio::test]
    async fn test_ticks_accumulate_series() -> Result<()> {
        let snapshots: Vec<_> = (0..3).map(|i| snapshot(i * HOUR_MS, 50.0)).collect();
        let mut agent = agent_over(snapshots);
        let config = ProjectConfig::new("Acme Protocol");

        for expected in 1..=3 {
            let report = agent.run(&config).await?;
            assert_eq!(report.project_id, "acme-protocol");
            assert_eq!(agent.store().len("acme-protocol"), expected);
            assert!(!report.degraded);
        }

        // Exhausted replay degrades without dropping history.
        let report = agent.run(&config).await?;
        assert!(report.degraded);
        assert_eq!(agent.store().len("acme-protocol"), 3);
        Ok(())
    }

    #[tokio::test]
    async fn test_timeline_and_breakdown_follow_time_window() -> Result<()> {
        let snapshots: Vec<_> = (0..30).map(|i| snapshot(i * HOUR_MS, 50.0)).collect();
        let mut agent = agent_over(snapshots);
        let mut config = ProjectConfig::new("Window");
        config.time_window = 5;

        let mut last = None;
        for _ in 0..30 {
            last = Some(agent.run(&config).await?);
        }
        let report = last.unwrap();
        // now = 29h; window keeps 24h..=29h.
        assert_eq!(report.timeline.len(), 6);
        assert_eq!(report.breakdown.len(), 6);
        assert!(report.timeline.iter().all(|p| p.metric == "overall"));
        Ok(())
    }

    #[tokio::test]
    async fn test_engagement_spike_raises_alert() -> Result<()> {
        let mut snapshots: Vec<_> = (0..19).map(|i| snapshot(i * HOUR_MS, 50.0)).collect();
        snapshots.push(snapshot(19 * HOUR_MS, 5000.0));
        let mut agent = agent_over(snapshots);
        let config = ProjectConfig::new("Spiky");

        let mut last = None;
        for _ in 0..20 {
            last = Some(agent.run(&config).await?);
        }
        let report = last.unwrap();
        let alert = report
            .alerts
            .iter()
            .find(|a| a.metric == "twitter_engagement")
            .unwrap();
        assert_eq!(alert.value, 5000.0);
        assert_eq!(alert.severity, Severity::High);
        assert!(report.narrative_context.contains("- [twitter_engagement]"));
        assert!(
            agent
                .alert_history("spiky")
                .iter()
                .any(|a| a.metric == "twitter_engagement")
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_weights_propagate() -> Result<()> {
        let mut agent = agent_over(vec![snapshot(0, 50.0)]);
        let mut config = ProjectConfig::new("Weights");
        config.weights = PartialWeights {
            github: Some(0.0),
            social: Some(0.0),
            onchain: Some(0.0),
            community: Some(0.0),
        };

        for _ in 0..2 {
            let err = agent.run(&config).await.unwrap_err();
            assert!(matches!(
                err,
                MomentumError::Domain(DomainError::ZeroTotalWeight)
            ));
            assert!(agent.store().is_empty("weights"));
        }

        // The snapshot was never consumed, so a corrected config still scores it.
        config.weights.github = Some(1.0);
        let report = agent.run(&config).await?;
        assert!(!report.degraded);
        assert_eq!(agent.store().len("weights"), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_projects_are_independent() -> Result<()> {
        let mut agent = agent_over(vec![snapshot(0, 50.0), snapshot(HOUR_MS, 60.0)]);
        agent.run(&ProjectConfig::new("One")).await?;
        agent.run(&ProjectConfig::new("Two")).await?;

        assert_eq!(agent.store().len("one"), 1);
        assert_eq!(agent.store().len("two"), 1);
        assert!(agent.alert_history("one").is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_report_serializes_camel_case() -> Result<()> {
        let mut agent = agent_over(vec![snapshot(0, 50.0)]);
        let report = agent.run(&ProjectConfig::new("Json")).await?;
        let value = serde_json::to_value(&report)?;
        assert!(value.get("narrativeContext").is_some());
        assert!(value.get("projectId").is_some());
        assert_eq!(value["score"]["trend"], "stable");
        Ok(())
    }

    #[tokio::test]
    async fn test_exhausted_error_is_not_fatal() -> Result<()> {
        let mut agent = agent_over(Vec::new());
        let report = agent.run(&ProjectConfig::new("Empty")).await?;
        assert!(report.degraded);
        assert!(agent.store().is_empty("empty"));
        Ok(())
    }
}
