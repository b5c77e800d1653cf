//! Confidence curve parameters for each raw feature.

use reptor_common::{Feature, ReptorError, Result};
use serde::{Deserialize, Serialize};

use crate::normalise::sigmoid;

/// Shape of the count → confidence curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceCurve {
    /// Counts at or below this carry no confidence.
    pub threshold: f64,
    /// Counts at or above this carry full confidence.
    pub saturation: f64,
}

impl ConfidenceCurve {
    pub const REACH: ConfidenceCurve = ConfidenceCurve { threshold: 2.0, saturation: 6.0 };
    /// Clarity needs more corroboration before it is trusted.
    pub const CLARITY: ConfidenceCurve = ConfidenceCurve { threshold: 4.0, saturation: 8.0 };

    pub fn confidence(&self, count: usize) -> f64 {
        sigmoid(count as f64, self.threshold, self.saturation)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || !self.saturation.is_finite() {
            return Err(ReptorError::Config(format!(
                "confidence curve must be finite, got threshold={} saturation={}",
                self.threshold, self.saturation
            )));
        }
        if self.threshold >= self.saturation {
            return Err(ReptorError::Config(format!(
                "confidence curve threshold ({}) must be below saturation ({})",
                self.threshold, self.saturation
            )));
        }
        if let Some(count) = self.first_decrease() {
            return Err(ReptorError::Config(format!(
                "confidence curve threshold={} saturation={} falls from {} to {} at count {count}",
                self.threshold,
                self.saturation,
                self.confidence(count - 1),
                self.confidence(count),
            )));
        }
        Ok(())
    }

    /// First integer count in [threshold, saturation] whose confidence is
    /// below that of the count before it.
    fn first_decrease(&self) -> Option<usize> {
        let first = self.threshold.ceil().max(1.0) as usize;
        let last = self.saturation.ceil().max(1.0) as usize;
        (first..=last).find(|&n| self.confidence(n) < self.confidence(n - 1))
    }
}

/// Per-feature curves used by the service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringProfile {
    #[serde(default = "default_reach")]
    pub reach: ConfidenceCurve,
    #[serde(default = "default_clarity")]
    pub clarity: ConfidenceCurve,
}

fn default_reach()   -> ConfidenceCurve { ConfidenceCurve::REACH }
fn default_clarity() -> ConfidenceCurve { ConfidenceCurve::CLARITY }

impl Default for ScoringProfile {
    fn default() -> Self {
        Self {
            reach:   default_reach(),
            clarity: default_clarity(),
        }
    }
}

impl ScoringProfile {
    pub fn curve(&self, feature: Feature) -> ConfidenceCurve {
        match feature {
            Feature::Reach   => self.reach,
            Feature::Clarity => self.clarity,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.reach.validate()?;
        self.clarity.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_uses_fixed_curves() {
        let p = ScoringProfile::default();
        assert_eq!(p.curve(Feature::Reach), ConfidenceCurve { threshold: 2.0, saturation: 6.0 });
        assert_eq!(p.curve(Feature::Clarity), ConfidenceCurve { threshold: 4.0, saturation: 8.0 });
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_inverted_curve_rejected() {
        let bad = ConfidenceCurve { threshold: 6.0, saturation: 2.0 };
        assert!(matches!(bad.validate(), Err(ReptorError::Config(_))));
        let flat = ConfidenceCurve { threshold: 3.0, saturation: 3.0 };
        assert!(flat.validate().is_err());
        let nan = ConfidenceCurve { threshold: f64::NAN, saturation: 3.0 };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_falling_curve_rejected() {
        // midpoint 11 + 35/2 = 28.5: count 28 clamps to 1, count 29 drops to 0.875
        let curve = ConfidenceCurve { threshold: 11.0, saturation: 35.0 };
        let err = curve.validate().unwrap_err();
        assert!(err.to_string().contains("at count 29"), "unexpected error: {err}");
    }

    #[test]
    fn test_accepted_curves_never_fall() {
        for a10 in 0..=60 {
            for b10 in (a10 + 1)..=120 {
                let curve = ConfidenceCurve {
                    threshold: a10 as f64 / 2.0,
                    saturation: b10 as f64 / 2.0,
                };
                if curve.validate().is_err() {
                    continue;
                }
                let mut prev = 0.0;
                for n in 0..=(curve.saturation.ceil() as usize + 2) {
                    let c = curve.confidence(n);
                    assert!(c >= prev, "{curve:?} falls at count {n}: {prev} -> {c}");
                    prev = c;
                }
            }
        }
    }

    #[test]
    fn test_confidence_follows_count() {
        assert_eq!(ConfidenceCurve::REACH.confidence(1), 0.0);
        assert!((ConfidenceCurve::REACH.confidence(5) - 0.875).abs() < 1e-12);
        assert!((ConfidenceCurve::CLARITY.confidence(5) - 0.125).abs() < 1e-12);
        assert_eq!(ConfidenceCurve::CLARITY.confidence(9), 1.0);
    }
}
