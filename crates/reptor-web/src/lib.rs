//! reptor-web — HTTP front end for the Reptor reputation service.
//!   - POST /reptor  submit a repute
//!   - GET  /reptor  reputation report for a reputee
//!   - GET  /health  liveness and store counts

pub mod config;
pub mod router;
pub mod handlers;
pub mod state;
