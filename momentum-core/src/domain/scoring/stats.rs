// momentum-core/src/domain/scoring/stats.rs

use crate::domain::error::DomainError;
use crate::domain::scoring::score::Trend;

/// Default smoothing factor for `exponential_moving_average`.
pub const DEFAULT_EMA_ALPHA: f64 = 0.3;
/// Default z-score cut-off for `detect_spikes`.
pub const DEFAULT_SPIKE_THRESHOLD: f64 = 2.0;

/// Number of trailing values `calculate_trend` looks at.
const TREND_LOOKBACK: usize = 5;
/// Percent change beyond which a trend is no longer stable.
const TREND_THRESHOLD_PCT: f64 = 5.0;

/// `Σ(value·weight) / Σ(weight)`.
///
/// # Errors
/// `InvalidInput` when the slices differ in length.
/// A zero total weight yields 0 instead of an error.
pub fn weighted_average(values: &[f64], weights: &[f64]) -> Result<f64, DomainError> {
    if values.len() != weights.len() {
        return Err(DomainError::InvalidInput(format!(
            "values and weights must have same length ({} != {})",
            values.len(),
            weights.len()
        )));
    }
    Ok(weighted_mean(values.iter().copied().zip(weights.iter().copied())))
}

/// Infallible form over `(value, weight)` pairs, used wherever the arity is fixed.
pub fn weighted_mean<I>(pairs: I) -> f64
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let (sum, total) = pairs
        .into_iter()
        .fold((0.0, 0.0), |(sum, total), (v, w)| (sum + v * w, total + w));
    if total == 0.0 { 0.0 } else { sum / total }
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance (divides by N).
pub fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}

/// Population standard deviation.
pub fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Classifies the direction of the last few values.
pub fn calculate_trend(values: &[f64]) -> Trend {
    if values.len() < 2 {
        return Trend::Stable;
    }

    let recent = &values[values.len().saturating_sub(TREND_LOOKBACK)..];
    let (earlier, later) = recent.split_at(recent.len() / 2);
    let avg1 = mean(earlier);
    let avg2 = mean(later);

    // No baseline: cannot express a relative change.
    if avg1 == 0.0 {
        return Trend::Stable;
    }

    let change = (avg2 - avg1) / avg1 * 100.0;
    if !change.is_finite() {
        return Trend::Stable;
    }

    if change > TREND_THRESHOLD_PCT {
        Trend::Rising
    } else if change < -TREND_THRESHOLD_PCT {
        Trend::Falling
    } else {
        Trend::Stable
    }
}

/// EMA seeded with the first value: `ema[i] = α·v[i] + (1-α)·ema[i-1]`.
pub fn exponential_moving_average(values: &[f64], alpha: f64) -> Vec<f64> {
    let mut ema = Vec::with_capacity(values.len());
    let Some(&first) = values.first() else {
        return ema;
    };
    ema.push(first);
    for &v in &values[1..] {
        let prev = ema[ema.len() - 1];
        ema.push(alpha * v + (1.0 - alpha) * prev);
    }
    ema
}

/// Indices whose population z-score exceeds `threshold` in absolute value.
pub fn detect_spikes(values: &[f64], threshold: f64) -> Vec<usize> {
    if values.len() < 3 {
        return Vec::new();
    }

    let m = mean(values);
    let sd = std_dev(values);
    if sd == 0.0 {
        return Vec::new();
    }

    values
        .iter()
        .enumerate()
        .filter(|(_, v)| ((*v - m) / sd).abs() > threshold)
        .map(|(i, _)| i)
        .collect()
}

/// `(value - min) / (max - min)` clamped to [0, 1].
pub fn normalize_score(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        return 0.0;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

/// Ratio against a saturation cap, clamped to [0, 1].
pub fn saturate(value: f64, cap: f64) -> f64 {
    normalize_score(value, 0.0, cap)
}

pub fn calculate_percentage_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return if current > 0.0 { 100.0 } else { 0.0 };
    }
    (current - previous) / previous * 100.0
}

/// Pearson correlation; 0 on empty, mismatched, or constant input.
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.is_empty() {
        return 0.0;
    }

    let mean_x = mean(x);
    let mean_y = mean(y);

    let (mut numerator, mut denom_x, mut denom_y) = (0.0, 0.0, 0.0);
    for (xi, yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        numerator += dx * dy;
        denom_x += dx * dx;
        denom_y += dy * dy;
    }

    let denominator = (denom_x * denom_y).sqrt();
    if denominator == 0.0 || !denominator.is_finite() {
        return 0.0;
    }
    (numerator / denominator).clamp(-1.0, 1.0)
}

/// Compact display: 1.2K, 3.4M, 5.6B.
pub fn format_number(num: f64) -> String {
    if num >= 1e9 {
        format!("{:.1}B", num / 1e9)
    } else if num >= 1e6 {
        format!("{:.1}M", num / 1e6)
    } else if num >= 1e3 {
        format!("{:.1}K", num / 1e3)
    } else {
        format!("{}", num)
    }
}
