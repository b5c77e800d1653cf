/// Core entity types: the feature registry, the inbound repute payload
/// and the stored observation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ReptorError, Result};

/// Lowest value a repute may carry.
pub const MIN_VALUE: f64 = 0.0;
/// Highest value a repute may carry.
pub const MAX_VALUE: f64 = 10.0;

// ---------------------------------------------------------------------------
// Feature registry
// ---------------------------------------------------------------------------

/// A raw reputation axis with stored observations.
/// `clout` is derived from these and never stored, so it has no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Reach,
    Clarity,
}

/// Every feature the store keeps observations for.
pub const RAW_FEATURES: [Feature; 2] = [Feature::Reach, Feature::Clarity];

impl Feature {
    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Reach   => "reach",
            Feature::Clarity => "clarity",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = ReptorError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "reach"   => Ok(Feature::Reach),
            "clarity" => Ok(Feature::Clarity),
            other     => Err(ReptorError::InvalidObservation(format!(
                "unknown feature: {other}"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Inbound payload
// ---------------------------------------------------------------------------

/// The `repute` block of a submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Repute {
    pub rid: String,
    pub feature: Feature,
    pub value: f64,
}

/// A submitted observation as it arrives from a client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReputeRequest {
    pub reputer: String,
    pub reputee: String,
    pub repute: Repute,
}

impl ReputeRequest {
    /// Reject values that are non-finite or outside `[MIN_VALUE, MAX_VALUE]`.
    pub fn validate(&self) -> Result<()> {
        let value = self.repute.value;
        if !value.is_finite() {
            return Err(ReptorError::InvalidObservation(format!(
                "value must be finite, got {value}"
            )));
        }
        if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
            return Err(ReptorError::InvalidObservation(format!(
                "value {value} outside [{MIN_VALUE}, {MAX_VALUE}]"
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Stored observation
// ---------------------------------------------------------------------------

/// One accepted repute event. Immutable once stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Observation {
    pub reputer: String,
    pub reputee: String,
    pub rid: String,
    pub feature: Feature,
    pub value: f64,
    pub received_at: DateTime<Utc>,
}

impl Observation {
    pub fn from_request(req: ReputeRequest, received_at: DateTime<Utc>) -> Self {
        Self {
            reputer: req.reputer,
            reputee: req.reputee,
            rid: req.repute.rid,
            feature: req.repute.feature,
            value: req.repute.value,
            received_at,
        }
    }
}
