// momentum-core/src/domain/anomaly/detector.rs

use std::collections::{HashMap, VecDeque};

use chrono::Utc;
use tracing::debug;

use crate::domain::anomaly::alert::{AnomalyAlert, Sensitivity, Severity};
use crate::domain::anomaly::pattern::{
    EXPECTED_CORRELATION_RANGE, EXPECTED_REVERSAL_RANGE, detect_correlation_breaks,
    detect_momentum_reversal,
};
use crate::domain::anomaly::zscore::ZScoreCheck;
use crate::domain::metrics::{Metric, MomentumData};

/// The detector keeps only this many alerts in its history.
pub const ALERT_HISTORY_LIMIT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnomalyThreshold {
    pub metric: Metric,
    pub threshold: f64,
    pub sensitivity: Sensitivity,
}

const DEFAULT_THRESHOLDS: [AnomalyThreshold; 7] = [
    AnomalyThreshold {
        metric: Metric::GithubStars,
        threshold: 2.5,
        sensitivity: Sensitivity::Medium,
    },
    AnomalyThreshold {
        metric: Metric::GithubVelocity,
        threshold: 3.0,
        sensitivity: Sensitivity::High,
    },
    AnomalyThreshold {
        metric: Metric::TwitterEngagement,
        threshold: 2.0,
        sensitivity: Sensitivity::Medium,
    },
    AnomalyThreshold {
        metric: Metric::TwitterMentions,
        threshold: 2.5,
        sensitivity: Sensitivity::Medium,
    },
    AnomalyThreshold {
        metric: Metric::OnchainTransactions,
        threshold: 2.0,
        sensitivity: Sensitivity::High,
    },
    AnomalyThreshold {
        metric: Metric::OnchainVolume,
        threshold: 2.5,
        sensitivity: Sensitivity::High,
    },
    AnomalyThreshold {
        metric: Metric::CommunityMentions,
        threshold: 2.0,
        sensitivity: Sensitivity::Medium,
    },
];

/// Statistical and pattern-level anomaly detection over a project series.
///
/// The per-metric cache is rebuilt from the series on every call; only
/// the alert history survives between calls.
#[derive(Debug, Clone)]
pub struct AnomalyDetector {
    thresholds: Vec<AnomalyThreshold>,
    historical_data: HashMap<Metric, Vec<f64>>,
    alerts: VecDeque<AnomalyAlert>,
}

impl Default for AnomalyDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl AnomalyDetector {
    pub fn new() -> Self {
        Self {
            thresholds: DEFAULT_THRESHOLDS.to_vec(),
            historical_data: HashMap::new(),
            alerts: VecDeque::with_capacity(ALERT_HISTORY_LIMIT),
        }
    }

    pub fn thresholds(&self) -> &[AnomalyThreshold] {
        &self.thresholds
    }

    /// Values seen for `metric` during the last `detect_anomalies` call.
    pub fn historical_values(&self, metric: Metric) -> Option<&[f64]> {
        self.historical_data.get(&metric).map(Vec::as_slice)
    }

    /// Most recent alerts, oldest first.
    pub fn alert_history(&self) -> impl Iterator<Item = &AnomalyAlert> {
        self.alerts.iter()
    }

    pub fn detect_anomalies(&mut self, series: &[MomentumData]) -> Vec<AnomalyAlert> {
        self.detect_anomalies_at(series, Utc::now().timestamp_millis())
    }

    /// Runs the z-score and spike checks for every tracked metric.
    /// Alerts are stamped with `now_ms` and appended to the history.
    pub fn detect_anomalies_at(&mut self, series: &[MomentumData], now_ms: i64) -> Vec<AnomalyAlert> {
        self.refresh_historical_data(series);

        let mut new_alerts = Vec::new();
        for t in &self.thresholds {
            let Some(values) = self.historical_data.get(&t.metric) else {
                continue;
            };
            for deviation in ZScoreCheck::evaluate(values, t.threshold) {
                new_alerts.push(AnomalyAlert::from_deviation(
                    t.metric,
                    &deviation,
                    t.sensitivity,
                    now_ms,
                ));
            }
        }

        if !new_alerts.is_empty() {
            debug!(count = new_alerts.len(), "Metric anomalies detected");
        }
        self.record(&new_alerts);
        new_alerts
    }

    pub fn detect_pattern_anomalies(&self, series: &[MomentumData]) -> Vec<AnomalyAlert> {
        self.detect_pattern_anomalies_at(series, Utc::now().timestamp_millis())
    }

    /// Correlation breaks (medium) followed by momentum reversals (high).
    pub fn detect_pattern_anomalies_at(
        &self,
        series: &[MomentumData],
        now_ms: i64,
    ) -> Vec<AnomalyAlert> {
        let correlation = detect_correlation_breaks(series)
            .into_iter()
            .map(|finding| AnomalyAlert {
                id: AnomalyAlert::new_id("correlation", now_ms),
                timestamp: now_ms,
                metric: "correlation".to_string(),
                severity: Severity::Medium,
                description: finding.description,
                value: finding.value,
                expected_range: EXPECTED_CORRELATION_RANGE,
            });

        let reversal = detect_momentum_reversal(series).map(|finding| AnomalyAlert {
            id: AnomalyAlert::new_id("reversal", now_ms),
            timestamp: now_ms,
            metric: "momentum_reversal".to_string(),
            severity: Severity::High,
            description: finding.description,
            value: finding.value,
            expected_range: EXPECTED_REVERSAL_RANGE,
        });

        correlation.chain(reversal).collect()
    }

    fn refresh_historical_data(&mut self, series: &[MomentumData]) {
        for t in &self.thresholds {
            if let Some(values) = t.metric.series(series) {
                self.historical_data.insert(t.metric, values);
            }
        }
    }

    fn record(&mut self, alerts: &[AnomalyAlert]) {
        self.alerts.extend(alerts.iter().cloned());
        while self.alerts.len() > ALERT_HISTORY_LIMIT {
            self.alerts.pop_front();
        }
    }
}
