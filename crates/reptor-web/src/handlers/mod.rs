//! HTTP handlers for all web routes.

pub mod reputation;
pub mod system;
