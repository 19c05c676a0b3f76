// momentum-core/src/domain/scoring/analyzer.rs

use chrono::Utc;
use tracing::debug;

use crate::domain::error::DomainError;
use crate::domain::metrics::{Metric, MomentumData};
use crate::domain::scoring::normalize::{community_score, github_score, onchain_score, social_score};
use crate::domain::scoring::score::{
    MomentumScore, TimeSeriesAllPoint, TimeSeriesPoint, TrendChange, TrendDirection,
};
use crate::domain::scoring::stats::{
    DEFAULT_EMA_ALPHA, calculate_trend, exponential_moving_average, mean, variance, weighted_mean,
};
use crate::domain::scoring::weights::{PartialWeights, ScoringWeights};

/// Rolling buffer cap; the oldest points are evicted first.
pub const MAX_SERIES_LEN: usize = 1000;
pub const DEFAULT_BREAKDOWN_WINDOW_HOURS: u32 = 48;
pub const DEFAULT_SERIES_WINDOW_HOURS: u32 = 24;
pub const DEFAULT_MOVING_AVERAGE_DAYS: u32 = 7;

const MS_PER_HOUR: i64 = 60 * 60 * 1000;

// Confidence model
const MIN_POINTS_FOR_CONFIDENCE: usize = 5;
const LOW_CONFIDENCE: f64 = 0.3;
const CONFIDENCE_LOOKBACK: usize = 10;
const FULL_VOLUME_POINTS: f64 = 50.0;

// Trend-change detection: 5 points vs the 5 before them, 10% apart.
const TREND_WINDOW: usize = 5;
const TREND_CHANGE_THRESHOLD: f64 = 0.1;

/// Per-domain scores of one snapshot, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
struct SubScores {
    github: f64,
    social: f64,
    onchain: f64,
    community: f64,
}

impl SubScores {
    fn of(data: &MomentumData) -> Self {
        Self {
            github: github_score(&data.github),
            social: social_score(&data.twitter),
            onchain: onchain_score(&data.onchain),
            community: community_score(
                data.community_mentions,
                data.interaction_patterns.as_ref(),
            ),
        }
    }

    fn overall(&self, weights: &ScoringWeights) -> f64 {
        weighted_mean([
            (self.github, weights.github),
            (self.social, weights.social),
            (self.onchain, weights.onchain),
            (self.community, weights.community),
        ])
    }
}

fn to_percent_int(score: f64) -> u8 {
    (score * 100.0).round().clamp(0.0, 100.0) as u8
}

fn to_percent_2dp(score: f64) -> f64 {
    (score * 100.0 * 100.0).round() / 100.0
}

/// Scores a project's rolling history of snapshots.
#[derive(Debug, Clone, Default)]
pub struct TimeSeriesAnalyzer {
    data: Vec<MomentumData>,
    weights: ScoringWeights,
}

impl TimeSeriesAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies and sorts `series`, keeping only the newest `MAX_SERIES_LEN` points.
    pub fn from_series(series: &[MomentumData]) -> Self {
        let mut data = series.to_vec();
        data.sort_by_key(|d| d.timestamp);
        if data.len() > MAX_SERIES_LEN {
            data.drain(..data.len() - MAX_SERIES_LEN);
        }
        Self {
            data,
            weights: ScoringWeights::default(),
        }
    }

    pub fn add_data_point(&mut self, point: MomentumData) {
        self.data.push(point);
        self.data.sort_by_key(|d| d.timestamp);
        if self.data.len() > MAX_SERIES_LEN {
            let excess = self.data.len() - MAX_SERIES_LEN;
            self.data.drain(..excess);
        }
    }

    pub fn data(&self) -> &[MomentumData] {
        &self.data
    }

    pub fn weights(&self) -> ScoringWeights {
        self.weights
    }

    /// Swaps in weights already resolved by [`ScoringWeights::apply`].
    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Validate-then-swap: on error the current weights are left as they were.
    pub fn update_weights(&mut self, partial: &PartialWeights) -> Result<(), DomainError> {
        let next = self.weights.apply(partial)?;
        debug!(?next, "Scoring weights updated");
        self.weights = next;
        Ok(())
    }

    /// Scores `latest`, or the newest buffered point when `None`.
    pub fn calculate_momentum_score(&self, latest: Option<&MomentumData>) -> MomentumScore {
        let Some(point) = latest.or_else(|| self.data.last()) else {
            return MomentumScore::default();
        };

        let sub = SubScores::of(point);
        let overall = sub.overall(&self.weights);

        let history: Vec<f64> = self.data.iter().map(|d| self.overall_score(d)).collect();
        let trend = calculate_trend(&history);
        let confidence = self.calculate_confidence();

        debug!(
            overall,
            github = sub.github,
            social = sub.social,
            onchain = sub.onchain,
            community = sub.community,
            %trend,
            confidence,
            "Momentum score computed"
        );

        MomentumScore {
            overall: to_percent_int(overall),
            github: to_percent_int(sub.github),
            social: to_percent_int(sub.social),
            onchain: to_percent_int(sub.onchain),
            community: to_percent_int(sub.community),
            trend,
            confidence,
        }
    }

    /// Weighted composite in [0, 1] for a single snapshot.
    pub fn overall_score(&self, data: &MomentumData) -> f64 {
        SubScores::of(data).overall(&self.weights)
    }

    /// Consistency of recent overall scores blended with buffer volume.
    pub fn calculate_confidence(&self) -> f64 {
        if self.data.len() < MIN_POINTS_FOR_CONFIDENCE {
            return LOW_CONFIDENCE;
        }

        let start = self.data.len().saturating_sub(CONFIDENCE_LOOKBACK);
        let recent: Vec<f64> = self.data[start..]
            .iter()
            .map(|d| self.overall_score(d))
            .collect();

        let consistency = (1.0 - variance(&recent) * 4.0).max(0.0);
        let volume = (self.data.len() as f64 / FULL_VOLUME_POINTS).min(1.0);

        weighted_mean([(consistency, 0.7), (volume, 0.3)])
    }

    pub fn extract_metric_value(&self, data: &MomentumData, metric: Metric) -> f64 {
        match metric {
            Metric::Overall => self.overall_score(data) * 100.0,
            other => other.field_value(data).unwrap_or(0.0),
        }
    }

    pub fn get_time_series_data(&self, metric: Metric, window_hours: u32) -> Vec<TimeSeriesPoint> {
        self.get_time_series_data_at(metric, window_hours, Utc::now().timestamp_millis())
    }

    /// Points no older than `window_hours` before `now_ms`.
    pub fn get_time_series_data_at(
        &self,
        metric: Metric,
        window_hours: u32,
        now_ms: i64,
    ) -> Vec<TimeSeriesPoint> {
        self.window(window_hours, now_ms)
            .map(|d| TimeSeriesPoint {
                timestamp: d.timestamp,
                value: self.extract_metric_value(d, metric),
                metric: metric.to_string(),
            })
            .collect()
    }

    pub fn get_moving_average(&self, metric: Metric, window_days: u32) -> Vec<TimeSeriesPoint> {
        self.get_moving_average_at(metric, window_days, Utc::now().timestamp_millis())
    }

    /// EMA-smoothed version of `get_time_series_data_at` over `window_days`.
    pub fn get_moving_average_at(
        &self,
        metric: Metric,
        window_days: u32,
        now_ms: i64,
    ) -> Vec<TimeSeriesPoint> {
        let raw = self.get_time_series_data_at(metric, window_days.saturating_mul(24), now_ms);
        let values: Vec<f64> = raw.iter().map(|p| p.value).collect();
        let smoothed = exponential_moving_average(&values, DEFAULT_EMA_ALPHA);

        raw.into_iter()
            .zip(smoothed)
            .map(|(point, value)| TimeSeriesPoint { value, ..point })
            .collect()
    }

    pub fn get_time_series_breakdown(&self, window_hours: u32) -> Vec<TimeSeriesAllPoint> {
        self.get_time_series_breakdown_at(window_hours, Utc::now().timestamp_millis())
    }

    /// Per-domain percentages for each point of the window, rounded to 2 dp.
    pub fn get_time_series_breakdown_at(
        &self,
        window_hours: u32,
        now_ms: i64,
    ) -> Vec<TimeSeriesAllPoint> {
        self.window(window_hours, now_ms)
            .map(|d| {
                let sub = SubScores::of(d);
                TimeSeriesAllPoint {
                    timestamp: d.timestamp,
                    github: to_percent_2dp(sub.github),
                    social: to_percent_2dp(sub.social),
                    onchain: to_percent_2dp(sub.onchain),
                    community: to_percent_2dp(sub.community),
                }
            })
            .collect()
    }

    /// Compares each 5-point window with the 5 points before it across the
    /// whole buffer and reports shifts above 10%.
    pub fn detect_trend_changes(&self, metric: Metric) -> Vec<TrendChange> {
        let values: Vec<f64> = self
            .data
            .iter()
            .map(|d| self.extract_metric_value(d, metric))
            .collect();

        let mut changes = Vec::new();
        for i in (2 * TREND_WINDOW)..values.len() {
            let previous = mean(&values[i - 2 * TREND_WINDOW..i - TREND_WINDOW]);
            let recent = mean(&values[i - TREND_WINDOW..i]);

            if previous == 0.0 {
                continue;
            }

            let change = (recent - previous) / previous;
            if change.abs() > TREND_CHANGE_THRESHOLD {
                changes.push(TrendChange {
                    timestamp: self.data[i].timestamp,
                    direction: if change > 0.0 {
                        TrendDirection::Up
                    } else {
                        TrendDirection::Down
                    },
                    strength: change.abs(),
                });
            }
        }
        changes
    }

    fn window(&self, window_hours: u32, now_ms: i64) -> impl Iterator<Item = &MomentumData> {
        let start = now_ms.saturating_sub(i64::from(window_hours) * MS_PER_HOUR);
        self.data.iter().filter(move |d| d.timestamp >= start)
    }
}
