// momentum-core/src/domain/scoring/mod.rs

pub mod analyzer;
pub mod normalize;
pub mod score;
pub mod stats;
pub mod weights;

pub use analyzer::{
    DEFAULT_BREAKDOWN_WINDOW_HOURS, DEFAULT_MOVING_AVERAGE_DAYS, DEFAULT_SERIES_WINDOW_HOURS,
    MAX_SERIES_LEN, TimeSeriesAnalyzer,
};
pub use score::{
    MomentumScore, TimeSeriesAllPoint, TimeSeriesPoint, Trend, TrendChange, TrendDirection,
};
pub use weights::{PartialWeights, ScoringWeights};
