// momentum-core/src/domain/anomaly/pattern.rs
//
// Anomalies read from relationships between metrics rather than from a
// single metric's distribution.

use crate::domain::metrics::{Metric, MomentumData};
use crate::domain::scoring::stats::{mean, pearson_correlation};

pub const MIN_CORRELATION_HISTORY: usize = 20;
pub const DECOUPLING_THRESHOLD: f64 = 0.1;
pub const EXPECTED_CORRELATION_RANGE: (f64, f64) = (0.3, 0.8);

pub const MIN_REVERSAL_HISTORY: usize = 10;
pub const REVERSAL_WINDOW: usize = 10;
pub const REVERSAL_THRESHOLD: f64 = 0.2;
pub const EXPECTED_REVERSAL_RANGE: (f64, f64) = (-0.1, 0.1);

#[derive(Debug, Clone, PartialEq)]
pub struct PatternFinding {
    pub description: String,
    pub value: f64,
}

/// Metric pairs expected to move together, with the label used in alerts.
const COUPLED_PAIRS: [(Metric, Metric, &str); 2] = [
    (
        Metric::GithubStars,
        Metric::TwitterEngagement,
        "GitHub activity and Twitter engagement",
    ),
    (
        Metric::TwitterEngagement,
        Metric::OnchainVolume,
        "social activity and onchain metrics",
    ),
];

/// Reports pairs whose Pearson correlation collapsed below 0.1 in magnitude.
pub fn detect_correlation_breaks(data: &[MomentumData]) -> Vec<PatternFinding> {
    if data.len() < MIN_CORRELATION_HISTORY {
        return Vec::new();
    }

    COUPLED_PAIRS
        .iter()
        .filter_map(|(left, right, label)| {
            let correlation = pearson_correlation(&left.series(data)?, &right.series(data)?);
            (correlation.abs() < DECOUPLING_THRESHOLD).then(|| PatternFinding {
                description: format!("Unusual decoupling between {} detected", label),
                value: correlation,
            })
        })
        .collect()
}

/// Composite activity proxy used for reversal detection.
pub fn momentum_proxy(d: &MomentumData) -> f64 {
    let github = d.github.stars + d.github.velocity * 10.0;
    let social = d.twitter.engagement + d.twitter.mentions;
    let onchain = d.onchain.volume + d.onchain.transactions;
    github + social + onchain
}

/// Compares the first and second half of the last ten points.
pub fn detect_momentum_reversal(data: &[MomentumData]) -> Option<PatternFinding> {
    if data.len() < MIN_REVERSAL_HISTORY {
        return None;
    }

    let recent: Vec<f64> = data[data.len() - REVERSAL_WINDOW..]
        .iter()
        .map(momentum_proxy)
        .collect();
    let (first, second) = recent.split_at(REVERSAL_WINDOW / 2);

    let avg1 = mean(first);
    let avg2 = mean(second);
    let change = (avg2 - avg1) / avg1.max(1.0);

    if change.abs() <= REVERSAL_THRESHOLD {
        return None;
    }

    let direction = if change > 0.0 { "upward" } else { "downward" };
    Some(PatternFinding {
        description: format!(
            "Sudden {} momentum reversal detected in overall project activity.",
            direction
        ),
        value: change,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series<F: Fn(&mut MomentumData, usize)>(n: usize, f: F) -> Vec<MomentumData> {
        (0..n)
            .map(|i| {
                let mut d = MomentumData::empty(i as i64);
                f(&mut d, i);
                d
            })
            .collect()
    }

    #[test]
    fn test_correlation_needs_twenty_points() {
        let data = series(19, |_, _| {});
        assert!(detect_correlation_breaks(&data).is_empty());
    }

    #[test]
    fn test_coupled_series_do_not_alert() {
        let data = series(25, |d, i| {
            d.github.stars = 100.0 + i as f64 * 10.0;
            d.twitter.engagement = 50.0 + i as f64 * 5.0;
            d.onchain.volume = 1_000.0 + i as f64 * 100.0;
        });
        assert!(detect_correlation_breaks(&data).is_empty());
    }

    #[test]
    fn test_flat_series_reports_both_decouplings() {
        let data = series(20, |_, _| {});
        let findings = detect_correlation_breaks(&data);
        assert_eq!(findings.len(), 2);
        assert!(findings[0].description.contains("GitHub activity and Twitter engagement"));
        assert!(findings[1].description.contains("social activity and onchain metrics"));
        assert!(findings.iter().all(|f| f.value == 0.0));
    }

    #[test]
    fn test_reversal_needs_ten_points() {
        let data = series(9, |d, i| d.github.stars = if i > 4 { 1_000.0 } else { 1.0 });
        assert!(detect_momentum_reversal(&data).is_none());
    }

    #[test]
    fn test_upward_reversal() {
        let data = series(10, |d, i| d.onchain.volume = if i < 5 { 100.0 } else { 200.0 });
        let finding = detect_momentum_reversal(&data);
        assert!(finding.as_ref().is_some_and(|f| f.description.contains("upward")));
        assert!(finding.is_some_and(|f| (f.value - 1.0).abs() < 1e-9));
    }

    #[test]
    fn test_downward_reversal_uses_last_ten_only() {
        let data = series(30, |d, i| {
            d.twitter.engagement = match i {
                0..=19 => 5.0,
                20..=24 => 500.0,
                _ => 100.0,
            }
        });
        let finding = detect_momentum_reversal(&data);
        assert!(finding.is_some_and(|f| f.description.contains("downward") && f.value < -0.2));
    }

    #[test]
    fn test_small_change_is_not_a_reversal() {
        let data = series(10, |d, i| d.github.stars = if i < 5 { 100.0 } else { 110.0 });
        assert!(detect_momentum_reversal(&data).is_none());
    }

    #[test]
    fn test_zero_baseline_is_guarded() {
        let data = series(10, |d, i| d.github.stars = if i < 5 { 0.0 } else { 3.0 });
        // (3 - 0) / max(0, 1) = 3
        assert!(detect_momentum_reversal(&data).is_some_and(|f| (f.value - 3.0).abs() < 1e-9));
    }
}
