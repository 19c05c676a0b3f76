// momentum-core/src/domain/metrics/mod.rs

pub mod metric;
pub mod snapshot;

pub use metric::Metric;
pub use snapshot::{GitHubMetrics, InteractionMetrics, MomentumData, OnchainMetrics, TwitterMetrics};
