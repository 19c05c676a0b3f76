pub mod anomaly;
pub mod error;
pub mod metrics;
pub mod project;
pub mod scoring;
pub mod series;

// Handy re-exports to keep imports short elsewhere
pub use anomaly::{AnomalyAlert, AnomalyDetector, Severity};
pub use error::DomainError;
pub use metrics::{Metric, MomentumData};
pub use project::ProjectConfig;
pub use scoring::{MomentumScore, ScoringWeights, TimeSeriesAnalyzer, Trend};
pub use series::SeriesStore;
