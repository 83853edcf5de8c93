//! Authentication domain models.

use serde::{Deserialize, Serialize};

use super::user::User;

/// JWT claims embedded in access tokens.
///
/// The payload is a snapshot of the whole user record at issuance time, so an
/// identity resolved from it can lag behind the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(flatten)]
    pub user: User,
    /// Issued at (unix timestamp).
    pub iat: i64,
    /// Expiry (unix timestamp).
    pub exp: i64,
}

/// The resolved caller of a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Identity {
    /// No valid token was presented.
    #[default]
    Anonymous,
    /// A verified token's claims.
    User(TokenClaims),
}

impl Identity {
    /// Claims of the authenticated caller, if any.
    pub fn claims(&self) -> Option<&TokenClaims> {
        match self {
            Identity::Anonymous => None,
            Identity::User(claims) => Some(claims),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Identity::Anonymous)
    }
}
