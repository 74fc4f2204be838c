//! User record and repository seam
//!
//! The user record is owned by the external persistence layer; this
//! core only reads it, keyed by email, through the `UserRepository`
//! trait. One lookup per identity resolution, no caching.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Moderator,
    #[default]
    User,
}

/// A persisted user, as returned by the repository
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    #[serde(default)]
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// User lookup capability supplied by the external persistence layer
///
/// Implementations must be read-only and safe to call concurrently.
/// Timeout and cancellation policy belongs to the implementor; the core
/// never retries a failed lookup.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
}
