//! Reputation service: routes submissions into the store and builds
//! reports on demand. Nothing is cached; every query recomputes from the
//! values currently stored.

use chrono::Utc;
use reptor_common::{Feature, Observation, ReptorError, ReputeRequest, Result};
use reptor_db::{MemoryStore, ObservationStore, StoreStats};
use tracing::{debug, warn};

use crate::scorer::ReputationReport;
use crate::weights::ScoringProfile;

pub struct ReputationService<S = MemoryStore> {
    store: S,
    profile: ScoringProfile,
}

impl ReputationService<MemoryStore> {
    /// Service over a fresh in-memory store with the default curves.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new(), ScoringProfile::default())
    }
}

impl<S: ObservationStore> ReputationService<S> {
    pub fn new(store: S, profile: ScoringProfile) -> Self {
        Self { store, profile }
    }

    pub fn profile(&self) -> &ScoringProfile {
        &self.profile
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Record one submission. Duplicate rids come back as
    /// `DuplicateObservation` with the store unchanged.
    pub fn update(&self, request: ReputeRequest) -> Result<()> {
        request.validate()?;

        let obs = Observation::from_request(request, Utc::now());
        let (reputee, feature, rid) = (obs.reputee.clone(), obs.feature, obs.rid.clone());

        match self.store.add_observation(obs) {
            Ok(()) => {
                debug!(%reputee, %feature, %rid, "observation accepted");
                Ok(())
            }
            Err(err @ ReptorError::DuplicateObservation { .. }) => {
                warn!(%reputee, %feature, %rid, "duplicate rid rejected");
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Current reach, clarity and clout for `reputee`.
    pub fn calc_scores(&self, reputee: &str) -> Result<ReputationReport> {
        let reach_values = self.store.get_values(reputee, Feature::Reach)?;
        let clarity_values = self.store.get_values(reputee, Feature::Clarity)?;

        let report = ReputationReport::compute(&self.profile, &reach_values, &clarity_values);
        debug!(
            reputee,
            reach = report.reach.score,
            clarity = report.clarity.score,
            clout = report.clout.score,
            "scores computed"
        );
        Ok(report)
    }

    pub fn stats(&self) -> StoreStats {
        self.store.stats()
    }
}
