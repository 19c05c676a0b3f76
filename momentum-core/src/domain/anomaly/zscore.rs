// momentum-core/src/domain/anomaly/zscore.rs

use crate::domain::scoring::stats::detect_spikes;
use serde::{Deserialize, Serialize};

/// Minimum history before a metric is checked at all.
pub const MIN_HISTORY: usize = 10;
/// Only the trailing points are reported on.
pub const RECENT_WINDOW: usize = 5;

/// Population statistics of one metric's history.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct MetricState {
    pub mean: f64,
    pub variance: f64,
    pub count: u64,
}

impl MetricState {
    pub fn from_values(values: &[f64]) -> Self {
        values
            .iter()
            .fold(MetricState::default(), |s, &v| ZScoreCheck::update_state(v, s))
    }

    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }

    /// Absolute z-score of `value`; 0 when the history has no spread.
    pub fn z_score(&self, value: f64) -> f64 {
        let sd = self.std_dev();
        if sd > 0.0 {
            ((value - self.mean) / sd).abs()
        } else {
            0.0
        }
    }

    /// `mean ± threshold·stddev`.
    pub fn expected_range(&self, threshold: f64) -> (f64, f64) {
        let sd = self.std_dev();
        (self.mean - threshold * sd, self.mean + threshold * sd)
    }
}

/// A point that fell outside its metric's expected range.
#[derive(Debug, Clone, PartialEq)]
pub struct Deviation {
    pub index: usize,
    pub value: f64,
    pub z_score: f64,
    pub expected_range: (f64, f64),
}

pub struct ZScoreCheck;

impl ZScoreCheck {
    /// Folds one value into the state using Welford's online algorithm
    /// (population variance).
    pub fn update_state(current_value: f64, state: MetricState) -> MetricState {
        let mut s = state;
        s.count += 1;
        if s.count == 1 {
            s.mean = current_value;
            s.variance = 0.0;
        } else {
            let old_mean = s.mean;
            s.mean += (current_value - old_mean) / (s.count as f64);
            // Welford: M2_new = M2_old + (x - old_mean) * (x - new_mean)
            let prev_m2 = s.variance * (s.count - 1) as f64;
            let new_m2 = prev_m2 + (current_value - old_mean) * (current_value - s.mean);
            s.variance = (new_m2 / s.count as f64).max(0.0);
        }
        s
    }

    /// Flags trailing points of `values` whose z-score against the whole
    /// series exceeds `threshold`, then adds recent spikes the first pass
    /// did not already report. Fewer than `MIN_HISTORY` values → nothing.
    pub fn evaluate(values: &[f64], threshold: f64) -> Vec<Deviation> {
        if values.len() < MIN_HISTORY {
            return Vec::new();
        }

        let state = MetricState::from_values(values);
        let expected_range = state.expected_range(threshold);
        let recent_start = values.len() - RECENT_WINDOW;

        let deviation = |index: usize| Deviation {
            index,
            value: values[index],
            z_score: state.z_score(values[index]),
            expected_range,
        };

        // 1. Z-score on the recent window
        let mut found: Vec<Deviation> = (recent_start..values.len())
            .filter(|&i| state.z_score(values[i]) > threshold)
            .map(deviation)
            .collect();

        // 2. Cross-check with the spike detector
        for index in detect_spikes(values, threshold) {
            if index >= recent_start && !found.iter().any(|d| d.index == index) {
                found.push(deviation(index));
            }
        }

        found
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_state_matches_two_pass_statistics() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let state = MetricState::from_values(&values);
        assert_eq!(state.count, 8);
        assert!((state.mean - 5.0).abs() < 1e-12);
        assert!((state.variance - 4.0).abs() < 1e-12);
        assert!((state.std_dev() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_update_state_first_value() {
        let s = ZScoreCheck::update_state(0.5, MetricState::default());
        assert_eq!(s.count, 1);
        assert_eq!(s.mean, 0.5);
        assert_eq!(s.variance, 0.0);
    }

    #[test]
    fn test_zero_spread_has_zero_z_score() {
        let state = MetricState::from_values(&[3.0; 12]);
        assert_eq!(state.z_score(1_000.0), 0.0);
    }

    #[test]
    fn test_evaluate_needs_minimum_history() {
        let mut values = vec![1.0; 9];
        values.push(1_000_000.0);
        values.remove(0);
        assert_eq!(values.len(), 9);
        assert!(ZScoreCheck::evaluate(&values, 2.0).is_empty());
    }

    #[test]
    fn test_evaluate_flags_recent_outlier() {
        let mut values = vec![50.0; 19];
        values.push(5_000.0);
        let found = ZScoreCheck::evaluate(&values, 2.0);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].index, 19);
        assert_eq!(found[0].value, 5_000.0);
        assert!(found[0].z_score > 4.0);
        assert!(found[0].expected_range.1 < 5_000.0);
    }

    #[test]
    fn test_evaluate_ignores_old_outlier() {
        let mut values = vec![50.0; 20];
        values[3] = 5_000.0;
        assert!(ZScoreCheck::evaluate(&values, 2.0).is_empty());
    }

    #[test]
    fn test_evaluate_does_not_duplicate_spike_indices() {
        let mut values = vec![10.0; 15];
        values[14] = 900.0;
        let found = ZScoreCheck::evaluate(&values, 2.0);
        let mut indices: Vec<usize> = found.iter().map(|d| d.index).collect();
        indices.dedup();
        assert_eq!(indices, vec![14]);
    }
}
