// momentum-core/src/domain/anomaly/mod.rs

pub mod alert;
pub mod detector;
pub mod pattern;
pub mod zscore;

pub use alert::{AnomalyAlert, Sensitivity, Severity};
pub use detector::{ALERT_HISTORY_LIMIT, AnomalyDetector, AnomalyThreshold};
pub use zscore::{Deviation, MetricState, ZScoreCheck};
