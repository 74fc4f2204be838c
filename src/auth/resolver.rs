//! Identity Resolver
//!
//! Turns a presented bearer token into a persisted user record: one
//! access-scoped validation, then one repository read. Every failure on
//! this path collapses into `AuthError::Unauthenticated` so the caller
//! cannot distinguish a bad token from an unknown user.

use crate::auth::claims::TokenScope;
use crate::auth::jwt::validate_token;
use crate::auth::user::{User, UserRepository};
use crate::configuration::JwtSettings;
use crate::error::{AppError, AuthError};

/// Resolve the user behind an access token
///
/// # Errors
/// Returns `AuthError::Unauthenticated` if validation fails, the
/// repository lookup fails, or the subject is unknown
pub async fn resolve_current_user(
    token: &str,
    repository: &dyn UserRepository,
    config: &JwtSettings,
) -> Result<User, AppError> {
    let subject = validate_token(token, TokenScope::Access, config)
        .map_err(|_| AppError::Auth(AuthError::Unauthenticated))?;

    let user = repository.find_by_email(&subject).await.map_err(|e| {
        tracing::warn!(sub = %subject, "user lookup failed during identity resolution: {}", e);
        AppError::Auth(AuthError::Unauthenticated)
    })?;

    user.ok_or_else(|| {
        tracing::warn!(sub = %subject, "token subject not found in user repository");
        AppError::Auth(AuthError::Unauthenticated)
    })
}
