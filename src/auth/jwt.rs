//! JWT Token Generation and Validation
//!
//! Issues signed, time-bounded, scope-tagged tokens and validates
//! presented ones. Every validation failure surfaces as the same
//! `AuthError::InvalidToken` so a caller cannot tell a bad signature
//! from a wrong scope; the underlying reason is only logged.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::auth::claims::{Claims, TokenScope};
use crate::configuration::JwtSettings;
use crate::error::{AppError, AuthError};

/// Sign a token for `subject` expiring `expiry_seconds` from now
///
/// Issuance is purely cryptographic: no check that the subject exists.
/// Pass `scope: None` for email-verification tokens.
///
/// # Errors
/// Returns error if the subject is empty or signing fails
pub fn generate_token(
    subject: &str,
    scope: Option<TokenScope>,
    expiry_seconds: i64,
    config: &JwtSettings,
) -> Result<String, AppError> {
    if subject.is_empty() {
        return Err(AppError::Internal("token subject must not be empty".to_string()));
    }

    let claims = Claims::new(subject.to_string(), scope, expiry_seconds);

    encode(
        &Header::new(config.algorithm),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Token generation failed: {}", e)))
}

/// Generate an access token for a user (default ttl 15 minutes)
pub fn generate_access_token(subject: &str, config: &JwtSettings) -> Result<String, AppError> {
    generate_token(
        subject,
        Some(TokenScope::Access),
        config.access_token_expiry,
        config,
    )
}

/// Generate a refresh token for a user (default ttl 7 days)
pub fn generate_refresh_token(subject: &str, config: &JwtSettings) -> Result<String, AppError> {
    generate_token(
        subject,
        Some(TokenScope::Refresh),
        config.refresh_token_expiry,
        config,
    )
}

/// Generate an unscoped email-verification token (default ttl 7 days)
pub fn generate_email_token(subject: &str, config: &JwtSettings) -> Result<String, AppError> {
    generate_token(subject, None, config.email_token_expiry, config)
}

/// Decode a token and enforce signature and time window.
///
/// jsonwebtoken's own expiry check is disabled; the `[iat, exp)` window
/// rule lives in `Claims::in_window` so expiry and the rest of the
/// claim checks share one code path and zero leeway.
fn decode_claims(token: &str, config: &JwtSettings) -> Result<Claims, AppError> {
    let mut validation = Validation::new(config.algorithm);
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::warn!("JWT validation error: {}", e);
        AppError::Auth(AuthError::InvalidToken)
    })?;

    let now = chrono::Utc::now().timestamp();
    if !claims.in_window(now) {
        tracing::warn!(sub = %claims.sub, "token outside its validity window");
        return Err(AuthError::InvalidToken.into());
    }

    Ok(claims)
}

/// Validate a token and extract its subject
///
/// Checks signature, time window, and that the token's scope equals
/// `expected_scope`.
///
/// # Errors
/// Returns `AuthError::InvalidToken` if the token is malformed,
/// tampered with, expired, or scoped for a different operation
pub fn validate_token(
    token: &str,
    expected_scope: TokenScope,
    config: &JwtSettings,
) -> Result<String, AppError> {
    let claims = decode_claims(token, config)?;

    if claims.scope != Some(expected_scope) {
        tracing::warn!(sub = %claims.sub, "token scope does not match the requested operation");
        return Err(AuthError::InvalidToken.into());
    }

    Ok(claims.sub)
}

/// Validate an email-verification token and extract its subject
///
/// No scope check (these tokens carry none); signature and time window
/// are still enforced.
pub fn validate_email_token(token: &str, config: &JwtSettings) -> Result<String, AppError> {
    decode_claims(token, config).map(|claims| claims.sub)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::Algorithm;

    fn get_test_config() -> JwtSettings {
        JwtSettings {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            algorithm: Algorithm::HS256,
            access_token_expiry: 900,
            refresh_token_expiry: 604_800,
            email_token_expiry: 604_800,
        }
    }

    #[test]
    fn test_access_token_round_trip() {
        let config = get_test_config();

        let token = generate_access_token("a@example.com", &config)
            .expect("Failed to generate token");
        let subject = validate_token(&token, TokenScope::Access, &config)
            .expect("Failed to validate token");

        assert_eq!(subject, "a@example.com");
    }

    #[test]
    fn test_refresh_token_round_trip() {
        let config = get_test_config();

        let token = generate_refresh_token("a@example.com", &config)
            .expect("Failed to generate token");
        let subject = validate_token(&token, TokenScope::Refresh, &config)
            .expect("Failed to validate token");

        assert_eq!(subject, "a@example.com");
    }

    #[test]
    fn test_scope_mismatch_is_rejected() {
        let config = get_test_config();

        let token = generate_refresh_token("a@example.com", &config)
            .expect("Failed to generate token");
        let result = validate_token(&token, TokenScope::Access, &config);

        assert!(matches!(
            result,
            Err(AppError::Auth(AuthError::InvalidToken))
        ));
    }

    #[test]
    fn test_email_token_is_unscoped() {
        let config = get_test_config();

        let token =
            generate_email_token("a@example.com", &config).expect("Failed to generate token");

        let subject =
            validate_email_token(&token, &config).expect("Failed to validate email token");
        assert_eq!(subject, "a@example.com");

        // The same token cannot authenticate a request.
        assert!(validate_token(&token, TokenScope::Access, &config).is_err());
    }

    #[test]
    fn test_zero_ttl_token_is_expired() {
        let config = get_test_config();

        let token = generate_token("a@example.com", Some(TokenScope::Access), 0, &config)
            .expect("Failed to generate token");
        let result = validate_token(&token, TokenScope::Access, &config);

        assert!(matches!(
            result,
            Err(AppError::Auth(AuthError::InvalidToken))
        ));
    }

    #[test]
    fn test_past_expiry_token_is_expired() {
        let config = get_test_config();

        let token = generate_token("a@example.com", Some(TokenScope::Access), -60, &config)
            .expect("Failed to generate token");

        assert!(validate_token(&token, TokenScope::Access, &config).is_err());
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        let config = get_test_config();

        let result = validate_token("invalid.token.here", TokenScope::Access, &config);

        assert!(matches!(
            result,
            Err(AppError::Auth(AuthError::InvalidToken))
        ));
    }

    #[test]
    fn test_tampered_signature_is_rejected() {
        let config = get_test_config();

        let token = generate_access_token("a@example.com", &config)
            .expect("Failed to generate token");

        // Flip the last character of the signature segment.
        let mut tampered = token.clone();
        let last = tampered.pop().expect("token is non-empty");
        tampered.push(if last == 'A' { 'B' } else { 'A' });
        assert_ne!(token, tampered);

        assert!(validate_token(&tampered, TokenScope::Access, &config).is_err());
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let config = get_test_config();

        let token = generate_access_token("a@example.com", &config)
            .expect("Failed to generate token");

        let mut other = get_test_config();
        other.secret = "another-secret-key-at-least-32-chars-long".to_string();

        assert!(validate_token(&token, TokenScope::Access, &other).is_err());
    }

    #[test]
    fn test_algorithm_mismatch_is_rejected() {
        let config = get_test_config();

        let token = generate_access_token("a@example.com", &config)
            .expect("Failed to generate token");

        // Same secret, different allow-listed algorithm.
        let mut hs512 = get_test_config();
        hs512.algorithm = Algorithm::HS512;

        assert!(validate_token(&token, TokenScope::Access, &hs512).is_err());
    }

    #[test]
    fn test_empty_subject_is_rejected_at_issuance() {
        let config = get_test_config();

        let result = generate_access_token("", &config);

        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
