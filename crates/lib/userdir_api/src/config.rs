//! API server configuration.

use userdir_core::auth::identity::RejectedTokenPolicy;
use userdir_core::auth::jwt::TOKEN_EXPIRY_SECS;

/// Default listen interface.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default listen port, matching the port the browser client expects.
pub const DEFAULT_PORT: u16 = 4000;

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:4000").
    pub bind_addr: String,
    /// JWT signing secret.
    pub jwt_secret: String,
    /// Lifetime of issued access tokens.
    pub token_ttl_secs: i64,
    /// How requests carrying an unverifiable token are treated.
    pub rejected_token_policy: RejectedTokenPolicy,
}

impl ApiConfig {
    /// Config with default lifetime and policy.
    pub fn new(bind_addr: impl Into<String>, jwt_secret: impl Into<String>) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            jwt_secret: jwt_secret.into(),
            token_ttl_secs: TOKEN_EXPIRY_SECS,
            rejected_token_policy: RejectedTokenPolicy::default(),
        }
    }
}
