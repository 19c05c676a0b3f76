// momentum-core/src/domain/scoring/score.rs

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Rising,
    Falling,
    #[default]
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rising => "rising",
            Self::Falling => "falling",
            Self::Stable => "stable",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Composite score, every component scaled to an integer in 0..=100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MomentumScore {
    pub overall: u8,
    pub github: u8,
    pub social: u8,
    pub onchain: u8,
    pub community: u8,
    pub trend: Trend,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub timestamp: i64,
    pub value: f64,
    pub metric: String,
}

/// One row of the per-domain breakdown, values in percent (2 dp).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesAllPoint {
    pub timestamp: i64,
    pub github: f64,
    pub social: f64,
    pub onchain: f64,
    pub community: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendChange {
    pub timestamp: i64,
    pub direction: TrendDirection,
    /// Absolute relative change between the two windows.
    pub strength: f64,
}
