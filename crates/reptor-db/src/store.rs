//! Observation store.
//!
//! Two-level lookup: reputee name -> feature -> (ordered observations, seen rids).
//! There are no secondary indices; querying by reputer or time range would
//! need a different backend behind the same trait.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use reptor_common::{Feature, Observation, ReptorError, Result, RAW_FEATURES};
use serde::Serialize;
use tracing::debug;

/// Storage capability the reputation service depends on.
///
/// Implementations must make the duplicate check and the append a single
/// atomic step per (reputee, feature): two concurrent submissions with the
/// same rid yield exactly one acceptance.
pub trait ObservationStore: Send + Sync {
    /// Append `obs` to its reputee's feature sequence, creating the reputee
    /// on first sight. Fails with `DuplicateObservation` if the rid was
    /// already accepted for that (reputee, feature); state is left untouched.
    fn add_observation(&self, obs: Observation) -> Result<()>;

    /// Stored values for a reputee/feature in acceptance order.
    ///
    /// `ReputeeNotFound` if the reputee was never observed. A known reputee
    /// with nothing on `feature` yields an empty vector.
    fn get_values(&self, reputee: &str, feature: Feature) -> Result<Vec<f64>>;

    /// Full stored observations for a reputee/feature in acceptance order.
    fn observations(&self, reputee: &str, feature: Feature) -> Result<Vec<Observation>>;

    fn stats(&self) -> StoreStats;
}

impl<S: ObservationStore + ?Sized> ObservationStore for Arc<S> {
    fn add_observation(&self, obs: Observation) -> Result<()> {
        (**self).add_observation(obs)
    }

    fn get_values(&self, reputee: &str, feature: Feature) -> Result<Vec<f64>> {
        (**self).get_values(reputee, feature)
    }

    fn observations(&self, reputee: &str, feature: Feature) -> Result<Vec<Observation>> {
        (**self).observations(reputee, feature)
    }

    fn stats(&self) -> StoreStats {
        (**self).stats()
    }
}

/// Summary counts across the whole store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub reputees: usize,
    pub observations: usize,
}

/// Everything recorded about one reputee.
#[derive(Debug)]
struct ReputeeRecord {
    entries: HashMap<Feature, Vec<Observation>>,
    rids: HashMap<Feature, HashSet<String>>,
}

impl ReputeeRecord {
    fn new() -> Self {
        let mut entries = HashMap::with_capacity(RAW_FEATURES.len());
        let mut rids = HashMap::with_capacity(RAW_FEATURES.len());
        for feature in RAW_FEATURES {
            entries.insert(feature, Vec::new());
            rids.insert(feature, HashSet::new());
        }
        Self { entries, rids }
    }

    fn entries(&self, feature: Feature) -> &[Observation] {
        self.entries.get(&feature).map(Vec::as_slice).unwrap_or(&[])
    }

    fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

/// Process-lifetime in-memory store.
///
/// The outer map lock is only held long enough to find or create a reputee;
/// each reputee carries its own lock around check-and-append.
#[derive(Debug, Default)]
pub struct MemoryStore {
    reputees: RwLock<HashMap<String, Arc<RwLock<ReputeeRecord>>>>,
}

// Every critical section is a lookup or a set-insert followed by a push,
// so a panicking holder cannot leave a record half-written.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, reputee: &str) -> Option<Arc<RwLock<ReputeeRecord>>> {
        read(&self.reputees).get(reputee).cloned()
    }

    fn record_or_create(&self, reputee: &str) -> Arc<RwLock<ReputeeRecord>> {
        if let Some(record) = self.record(reputee) {
            return record;
        }
        write(&self.reputees)
            .entry(reputee.to_string())
            .or_insert_with(|| {
                debug!(reputee, "new reputee");
                Arc::new(RwLock::new(ReputeeRecord::new()))
            })
            .clone()
    }

    fn existing(&self, reputee: &str) -> Result<Arc<RwLock<ReputeeRecord>>> {
        self.record(reputee)
            .ok_or_else(|| ReptorError::ReputeeNotFound(reputee.to_string()))
    }
}

impl ObservationStore for MemoryStore {
    fn add_observation(&self, obs: Observation) -> Result<()> {
        let record = self.record_or_create(&obs.reputee);
        let mut record = write(&record);

        let seen = record.rids.entry(obs.feature).or_default();
        if !seen.insert(obs.rid.clone()) {
            return Err(ReptorError::DuplicateObservation {
                reputee: obs.reputee,
                feature: obs.feature,
                rid: obs.rid,
            });
        }
        record.entries.entry(obs.feature).or_default().push(obs);
        Ok(())
    }

    fn get_values(&self, reputee: &str, feature: Feature) -> Result<Vec<f64>> {
        let record = self.existing(reputee)?;
        let record = read(&record);
        Ok(record.entries(feature).iter().map(|o| o.value).collect())
    }

    fn observations(&self, reputee: &str, feature: Feature) -> Result<Vec<Observation>> {
        let record = self.existing(reputee)?;
        let record = read(&record);
        Ok(record.entries(feature).to_vec())
    }

    fn stats(&self) -> StoreStats {
        let reputees = read(&self.reputees);
        StoreStats {
            reputees: reputees.len(),
            observations: reputees.values().map(|r| read(r).len()).sum(),
        }
    }
}
