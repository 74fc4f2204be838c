//! Token authority core: password hashing, JWT issuance and validation,
//! and identity resolution against an externally supplied user repository.

pub mod auth;
pub mod configuration;
pub mod error;
pub mod telemetry;
