use jsonwebtoken::Algorithm;
use serde::{Deserialize, Deserializer};

use crate::error::AppError;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub jwt: JwtSettings,
}

/// JWT authentication settings
///
/// Loaded once at process start and shared by reference; nothing here
/// is mutated at runtime. Rotating the secret invalidates every
/// outstanding token.
#[derive(serde::Deserialize, Clone)]
pub struct JwtSettings {
    pub secret: String,
    /// Signing algorithm, restricted to HS256/HS512. Any other value
    /// fails at configuration load, before a single token is issued.
    #[serde(deserialize_with = "deserialize_algorithm")]
    pub algorithm: Algorithm,
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry: i64, // seconds (900 = 15 minutes)
    #[serde(default = "default_refresh_token_expiry")]
    pub refresh_token_expiry: i64, // seconds (604800 = 7 days)
    #[serde(default = "default_email_token_expiry")]
    pub email_token_expiry: i64, // seconds (604800 = 7 days)
}

fn default_access_token_expiry() -> i64 {
    900
}

fn default_refresh_token_expiry() -> i64 {
    604_800
}

fn default_email_token_expiry() -> i64 {
    604_800
}

fn deserialize_algorithm<'de, D>(deserializer: D) -> Result<Algorithm, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    match name.as_str() {
        "HS256" => Ok(Algorithm::HS256),
        "HS512" => Ok(Algorithm::HS512),
        other => Err(serde::de::Error::custom(format!(
            "unsupported signing algorithm '{}' (allowed: HS256, HS512)",
            other
        ))),
    }
}

/// Load settings from `configuration.*` plus environment overrides
/// (e.g. `JWT__SECRET`, `JWT__ALGORITHM`).
pub fn get_configuration() -> Result<Settings, AppError> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(config::Environment::default().separator("__"))
        .build()?;
    Ok(settings.try_deserialize::<Settings>()?)
}
