//! Token issuance and request authentication.
//!
//! Tokens are self-contained HS256 JWTs. There is no session table, so a
//! token cannot be revoked before it expires.

pub mod identity;
pub mod jwt;

use thiserror::Error;

/// Authentication errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("User with email {0} not found")]
    UserNotFound(String),

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Invalid token lifetime: {0}s")]
    InvalidTtl(i64),

    #[error("Token error: {0}")]
    TokenError(String),
}
