//! Per-feature score/confidence and the derived clout composite.
//!
//! All functions take plain value slices and are independent of storage.
//! Order of values never matters.

use reptor_common::Feature;
use serde::{Deserialize, Serialize};

use crate::weights::{ConfidenceCurve, ScoringProfile};

/// Raw feature scores live on the repute scale [0, 10]; clout divides by
/// this to report on [0, 1].
const VALUE_SCALE: f64 = 10.0;

/// Central estimate plus evidential support for one feature.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureScore {
    pub score: f64,
    pub confidence: f64,
}

impl FeatureScore {
    pub const ZERO: FeatureScore = FeatureScore { score: 0.0, confidence: 0.0 };

    pub fn new(score: f64, confidence: f64) -> Self {
        Self { score, confidence }
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Mean of `values`, with confidence driven by how many there are.
pub fn score_feature(values: &[f64], curve: &ConfidenceCurve) -> FeatureScore {
    if values.is_empty() {
        return FeatureScore::ZERO;
    }
    FeatureScore::new(mean(values), curve.confidence(values.len()))
}

pub fn reach(values: &[f64]) -> FeatureScore {
    score_feature(values, &ConfidenceCurve::REACH)
}

pub fn clarity(values: &[f64]) -> FeatureScore {
    score_feature(values, &ConfidenceCurve::CLARITY)
}

/// Confidence-weighted blend of already computed reach and clarity.
///
/// Score is the weighted mean rescaled to [0, 1]; confidence is the weaker
/// of the two. Zero total confidence gives `(0, 0)`.
pub fn blend_clout(reach: FeatureScore, clarity: FeatureScore) -> FeatureScore {
    let total = reach.confidence + clarity.confidence;
    if total <= 0.0 {
        return FeatureScore::ZERO;
    }

    let reach_weight = reach.confidence / total;
    let clarity_weight = clarity.confidence / total;
    let weighted = reach_weight * reach.score + clarity_weight * clarity.score;

    FeatureScore::new(
        weighted / VALUE_SCALE,
        reach.confidence.min(clarity.confidence),
    )
}

/// Clout from per-feature results and the number of values behind each.
/// Either side empty gives `(0, 0)`.
pub fn blend_clout_values(
    reach: FeatureScore,
    clarity: FeatureScore,
    reach_len: usize,
    clarity_len: usize,
) -> FeatureScore {
    if reach_len == 0 || clarity_len == 0 {
        return FeatureScore::ZERO;
    }
    blend_clout(reach, clarity)
}

/// Composite of clarity and reach. Either side empty gives `(0, 0)`.
pub fn clout(clarity_values: &[f64], reach_values: &[f64]) -> FeatureScore {
    blend_clout_values(
        reach(reach_values),
        clarity(clarity_values),
        reach_values.len(),
        clarity_values.len(),
    )
}

/// The query response: every feature, raw and derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReputationReport {
    pub reach: FeatureScore,
    pub clarity: FeatureScore,
    pub clout: FeatureScore,
}

impl ReputationReport {
    pub fn compute(profile: &ScoringProfile, reach_values: &[f64], clarity_values: &[f64]) -> Self {
        let reach = score_feature(reach_values, &profile.curve(Feature::Reach));
        let clarity = score_feature(clarity_values, &profile.curve(Feature::Clarity));
        let clout = blend_clout_values(reach, clarity, reach_values.len(), clarity_values.len());
        Self { reach, clarity, clout }
    }
}
