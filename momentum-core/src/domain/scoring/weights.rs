// momentum-core/src/domain/scoring/weights.rs

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};

/// Relative importance of each domain in the overall score.
/// Always sums to 1 once it leaves `apply`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub github: f64,
    pub social: f64,
    pub onchain: f64,
    pub community: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            github: 0.25,
            social: 0.3,
            onchain: 0.35,
            community: 0.1,
        }
    }
}

/// A weight update. Only the four domain keys are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialWeights {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onchain: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community: Option<f64>,
}

impl PartialWeights {
    pub fn is_empty(&self) -> bool {
        self.github.is_none()
            && self.social.is_none()
            && self.onchain.is_none()
            && self.community.is_none()
    }
}

impl ScoringWeights {
    pub fn as_array(&self) -> [f64; 4] {
        [self.github, self.social, self.onchain, self.community]
    }

    pub fn total(&self) -> f64 {
        self.as_array().iter().sum()
    }

    /// Merges `partial` over `self`, validates, and renormalizes.
    /// Returns a new value; `self` is never touched.
    ///
    /// # Errors
    /// `InvalidWeight` for a negative or non-finite component,
    /// `ZeroTotalWeight` when nothing is left to normalize.
    pub fn apply(&self, partial: &PartialWeights) -> Result<ScoringWeights, DomainError> {
        let merged = ScoringWeights {
            github: partial.github.unwrap_or(self.github),
            social: partial.social.unwrap_or(self.social),
            onchain: partial.onchain.unwrap_or(self.onchain),
            community: partial.community.unwrap_or(self.community),
        };

        for (key, value) in merged.named() {
            if !value.is_finite() || value < 0.0 {
                return Err(DomainError::InvalidWeight {
                    key: key.to_string(),
                    value,
                });
            }
        }

        let total = merged.total();
        if total == 0.0 {
            return Err(DomainError::ZeroTotalWeight);
        }

        Ok(ScoringWeights {
            github: merged.github / total,
            social: merged.social / total,
            onchain: merged.onchain / total,
            community: merged.community / total,
        })
    }

    pub fn named(&self) -> [(&'static str, f64); 4] {
        [
            ("github", self.github),
            ("social", self.social),
            ("onchain", self.onchain),
            ("community", self.community),
        ]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_default_weights_sum_to_one() {
        assert!((ScoringWeights::default().total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_apply_renormalizes_and_keeps_ratios() -> Result<()> {
        let partial = PartialWeights {
            github: Some(3.0),
            social: Some(1.0),
            onchain: Some(4.0),
            community: Some(2.0),
        };
        let w = ScoringWeights::default().apply(&partial)?;

        assert!((w.total() - 1.0).abs() < 1e-9);
        assert!((w.github / w.social - 3.0).abs() < 1e-9);
        assert!((w.onchain / w.community - 2.0).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_apply_partial_merges_with_current() -> Result<()> {
        let partial = PartialWeights {
            community: Some(0.9),
            ..Default::default()
        };
        let w = ScoringWeights::default().apply(&partial)?;
        // 0.25 + 0.3 + 0.35 + 0.9 = 1.8
        assert!((w.community - 0.5).abs() < 1e-9);
        assert!((w.github - 0.25 / 1.8).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_apply_rejects_negative() {
        let partial = PartialWeights {
            social: Some(-0.1),
            ..Default::default()
        };
        let res = ScoringWeights::default().apply(&partial);
        assert!(matches!(res, Err(DomainError::InvalidWeight { ref key, .. }) if key == "social"));
    }

    #[test]
    fn test_apply_rejects_non_finite() {
        let partial = PartialWeights {
            onchain: Some(f64::NAN),
            ..Default::default()
        };
        let res = ScoringWeights::default().apply(&partial);
        assert!(matches!(res, Err(DomainError::InvalidWeight { .. })));
    }

    #[test]
    fn test_apply_rejects_zero_total() {
        let partial = PartialWeights {
            github: Some(0.0),
            social: Some(0.0),
            onchain: Some(0.0),
            community: Some(0.0),
        };
        let res = ScoringWeights::default().apply(&partial);
        assert_eq!(res, Err(DomainError::ZeroTotalWeight));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let res: Result<PartialWeights, _> = serde_yaml::from_str("github: 1.0\nreddit: 2.0\n");
        assert!(res.is_err());
    }
}
