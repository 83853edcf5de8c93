//! Request authentication: bearer header → [`Identity`].

use std::fmt;
use std::str::FromStr;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::{debug, warn};

use super::AuthError;
use crate::models::auth::{Identity, TokenClaims};

/// What to do with a token that fails verification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RejectedTokenPolicy {
    /// Log the failure and treat the caller as anonymous. A bad token and a
    /// missing token look the same to resolvers; gated operations then fail
    /// with `NotAuthenticated`.
    #[default]
    DowngradeToAnonymous,
    /// Fail the whole request with `InvalidToken`.
    Reject,
}

impl FromStr for RejectedTokenPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "downgrade" => Ok(Self::DowngradeToAnonymous),
            "reject" => Ok(Self::Reject),
            other => Err(format!(
                "unknown rejected token policy '{other}' (expected 'downgrade' or 'reject')"
            )),
        }
    }
}

impl fmt::Display for RejectedTokenPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DowngradeToAnonymous => f.write_str("downgrade"),
            Self::Reject => f.write_str("reject"),
        }
    }
}

/// Verifies access tokens signed by a [`TokenIssuer`](super::jwt::TokenIssuer)
/// sharing the same secret.
#[derive(Clone)]
pub struct Authenticator {
    key: DecodingKey,
    validation: Validation,
    policy: RejectedTokenPolicy,
}

impl Authenticator {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;
        Self {
            key: DecodingKey::from_secret(secret),
            validation,
            policy: RejectedTokenPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: RejectedTokenPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> RejectedTokenPolicy {
        self.policy
    }

    /// Check signature and expiry, returning the claims on success.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        decode::<TokenClaims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    /// Resolve the raw `Authorization` header value into an identity.
    ///
    /// An optional `Bearer ` prefix is stripped; an absent or empty token is
    /// anonymous. Verification failures follow the configured
    /// [`RejectedTokenPolicy`].
    pub fn authenticate(&self, raw_header: Option<&str>) -> Result<Identity, AuthError> {
        let token = raw_header
            .map(|h| h.strip_prefix("Bearer ").unwrap_or(h))
            .unwrap_or_default();
        if token.is_empty() {
            return Ok(Identity::Anonymous);
        }

        match self.verify(token) {
            Ok(claims) => {
                debug!(user_id = %claims.user.id, "resolved identity from token");
                Ok(Identity::User(claims))
            }
            Err(e) => self.on_invalid_token(e),
        }
    }

    /// Apply the configured [`RejectedTokenPolicy`] to a credential that
    /// could not be verified, including headers that are not readable text.
    pub fn on_invalid_token(&self, error: AuthError) -> Result<Identity, AuthError> {
        match self.policy {
            RejectedTokenPolicy::DowngradeToAnonymous => {
                warn!(error = %error, "invalid token, continuing as anonymous");
                Ok(Identity::Anonymous)
            }
            RejectedTokenPolicy::Reject => {
                warn!(error = %error, "invalid token, rejecting request");
                Err(error)
            }
        }
    }
}
