//! JWT Claims structure
//!
//! Fixed, typed payload for every token this service signs. The claim
//! set is exactly `sub`, `iat`, `exp`, and an optional `scope`;
//! email-verification tokens carry no scope at all.

use serde::{Deserialize, Serialize};

/// Intended use of a token, checked on every validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenScope {
    /// Short-lived token authorizing per-request identity checks
    #[serde(rename = "access_token")]
    Access,
    /// Long-lived token used solely to mint a new access token
    #[serde(rename = "refresh_token")]
    Refresh,
}

/// JWT claims shared by access, refresh, and email-verification tokens
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (the user's email)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Token scope; absent for email-verification tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<TokenScope>,
}

impl Claims {
    /// Create new claims expiring `expiry_seconds` from now
    pub fn new(subject: String, scope: Option<TokenScope>, expiry_seconds: i64) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            sub: subject,
            iat: now,
            exp: now + expiry_seconds,
            scope,
        }
    }

    /// A token is valid only within `[iat, exp)`, with no leeway.
    pub fn in_window(&self, now: i64) -> bool {
        self.iat <= now && now < self.exp
    }
}
