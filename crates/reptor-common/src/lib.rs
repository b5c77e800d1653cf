//! reptor-common — Shared types and errors used across all Reptor crates.

pub mod error;
pub mod entities;

// Re-export commonly used types
pub use entities::{Feature, Observation, Repute, ReputeRequest, RAW_FEATURES};
pub use error::{ApiError, ReptorError, Result};
