//! Password Hashing and Verification
//!
//! bcrypt hashing with a tunable work factor. The salt and cost are
//! embedded in the hash string, so the format can evolve without a
//! schema change.

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::error::AppError;

/// Hash a password using bcrypt with the default cost
///
/// # Errors
/// Returns error if bcrypt hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash_password_with_cost(password, DEFAULT_COST)
}

/// Hash a password using bcrypt with an explicit cost
///
/// The cost is the tuning knob against offline brute force; raise it as
/// hardware gets faster.
///
/// # Errors
/// Returns error if bcrypt hashing fails (e.g. cost out of range)
pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String, AppError> {
    hash(password, cost).map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))
}

/// Verify a password against its stored hash
///
/// A malformed or foreign hash verifies as `false` rather than
/// erroring, so this never leaks whether the stored hash was readable.
pub fn verify_password(password: &str, hash: &str) -> bool {
    verify(password, hash).unwrap_or(false)
}
