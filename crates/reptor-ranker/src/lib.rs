//! reptor-ranker — Reputation scoring engine and service.
//!
//! `normalise`, `weights` and `scorer` are pure functions over observation
//! values. `service` wires them to an `ObservationStore`.

pub mod scorer;
pub mod normalise;
pub mod weights;
pub mod service;

pub use scorer::{clarity, clout, reach, FeatureScore, ReputationReport};
pub use service::ReputationService;
pub use weights::{ConfidenceCurve, ScoringProfile};
