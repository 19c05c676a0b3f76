// momentum-core/src/domain/anomaly/alert.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::domain::anomaly::zscore::Deviation;
use crate::domain::metrics::Metric;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Grades a z-score after scaling it by the metric's sensitivity.
    pub fn from_z_score(z_score: f64, sensitivity: Sensitivity) -> Self {
        let adjusted = z_score * sensitivity.multiplier();
        if adjusted > 4.0 {
            Self::High
        } else if adjusted > 2.5 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How eagerly a metric's deviations escalate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sensitivity {
    Low,
    Medium,
    High,
}

impl Sensitivity {
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Low => 1.5,
            Self::Medium => 1.0,
            Self::High => 0.7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnomalyAlert {
    pub id: String,
    pub timestamp: i64,
    pub metric: String,
    pub severity: Severity,
    pub description: String,
    pub value: f64,
    pub expected_range: (f64, f64),
}

impl AnomalyAlert {
    /// `<prefix>_<timestamp>_<random>`.
    pub fn new_id(prefix: &str, timestamp: i64) -> String {
        let suffix = Uuid::new_v4().simple().to_string();
        format!("{}_{}_{}", prefix, timestamp, &suffix[..9])
    }

    pub fn from_deviation(
        metric: Metric,
        deviation: &Deviation,
        sensitivity: Sensitivity,
        timestamp: i64,
    ) -> Self {
        Self {
            id: Self::new_id(metric.as_str(), timestamp),
            timestamp,
            metric: metric.to_string(),
            severity: Severity::from_z_score(deviation.z_score, sensitivity),
            description: describe_deviation(metric, deviation),
            value: deviation.value,
            expected_range: deviation.expected_range,
        }
    }
}

pub fn describe_deviation(metric: Metric, deviation: &Deviation) -> String {
    let (low, high) = deviation.expected_range;
    let direction = if deviation.value > high { "spike" } else { "drop" };
    let magnitude = if deviation.z_score > 3.0 {
        "significant"
    } else {
        "moderate"
    };

    format!(
        "{} {} detected in {}. Current value: {:.2}, Expected range: {:.2} - {:.2}",
        magnitude,
        direction,
        metric.display_name(),
        deviation.value,
        low,
        high
    )
}
