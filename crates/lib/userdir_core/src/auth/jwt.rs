//! JWT token generation and secret management.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use rand::distr::Alphanumeric;
use rand::{Rng, rng};
use tracing::{info, warn};

use super::AuthError;
use crate::directory::Directory;
use crate::models::auth::TokenClaims;
use crate::models::user::User;

/// Access token lifetime: 1 hour.
pub const TOKEN_EXPIRY_SECS: i64 = 60 * 60;

/// Longest accepted token lifetime: 30 days.
pub const MAX_TOKEN_TTL_SECS: i64 = 30 * 24 * 60 * 60;

/// A freshly signed token together with the user it was issued for.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub user: User,
}

/// Signs access tokens with a process-wide secret.
#[derive(Clone)]
pub struct TokenIssuer {
    key: EncodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            key: EncodingKey::from_secret(secret),
            ttl: Duration::seconds(TOKEN_EXPIRY_SECS),
        }
    }

    /// Override the token lifetime. Must lie in `1..=MAX_TOKEN_TTL_SECS`.
    pub fn with_ttl_secs(mut self, secs: i64) -> Result<Self, AuthError> {
        if !(1..=MAX_TOKEN_TTL_SECS).contains(&secs) {
            return Err(AuthError::InvalidTtl(secs));
        }
        self.ttl = Duration::try_seconds(secs).ok_or(AuthError::InvalidTtl(secs))?;
        Ok(self)
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl.num_seconds()
    }

    /// Log in by email: look the user up and sign a token for them.
    pub fn issue(&self, directory: &Directory, email: &str) -> Result<IssuedToken, AuthError> {
        let user = directory
            .find_by_email(email)
            .ok_or_else(|| AuthError::UserNotFound(email.to_string()))?;
        let token = self.issue_for(user, Utc::now())?;
        info!(user_id = %user.id, "issued access token");
        Ok(IssuedToken {
            token,
            user: user.clone(),
        })
    }

    /// Sign a token for `user` as if issued at `issued_at`.
    pub fn issue_for(&self, user: &User, issued_at: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = TokenClaims {
            user: user.clone(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        };
        encode(&Header::default(), &claims, &self.key)
            .map_err(|e| AuthError::TokenError(format!("jwt encode: {e}")))
    }
}

/// Resolve the JWT secret: env var `JWT_SECRET` → persisted file → freshly
/// generated (and persisted) random secret.
pub fn resolve_jwt_secret() -> String {
    resolve_jwt_secret_from(std::env::var("JWT_SECRET").ok(), &default_secret_path())
}

/// Same as [`resolve_jwt_secret`] with the env value and file path supplied.
pub fn resolve_jwt_secret_from(env_secret: Option<String>, path: &Path) -> String {
    if let Some(secret) = env_secret
        && !secret.is_empty()
    {
        return secret;
    }
    if let Ok(existing) = std::fs::read_to_string(path) {
        let trimmed = existing.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    let secret: String = rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect();
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            warn!(path = %parent.display(), "could not create JWT secret directory: {e}");
        }
    }
    match std::fs::write(path, &secret) {
        Ok(()) => info!(path = %path.display(), "generated new JWT secret"),
        Err(e) => warn!(path = %path.display(), "could not persist JWT secret: {e}"),
    }
    secret
}

/// Path to the persisted JWT secret file.
pub fn default_secret_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("userdir")
        .join("jwt-secret")
}
