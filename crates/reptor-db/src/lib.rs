//! Reptor Storage Layer
//!
//! This crate provides the observation store: a per-reputee, per-feature,
//! append-only record of accepted reputes with rid deduplication.
//!
//! # Features
//!
//! - O(1) lookup by reputee name
//! - Duplicate rids rejected per (reputee, feature) without mutating state
//! - Per-reputee locking so check-and-append is atomic
//!
//! # Example
//!
//! ```rust,no_run
//! use reptor_db::{MemoryStore, ObservationStore};
//! use reptor_common::Feature;
//!
//! let store = MemoryStore::new();
//! // ... store.add_observation(obs)?;
//! let values = store.get_values("you", Feature::Reach);
//! ```

pub mod store;

pub use store::{MemoryStore, ObservationStore, StoreStats};
