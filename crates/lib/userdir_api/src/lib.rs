//! # userdir_api
//!
//! GraphQL HTTP API library for Userdir.

pub mod config;
pub mod error;
pub mod graphql;
pub mod handlers;
pub mod middleware;
pub mod models;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use userdir_core::auth::AuthError;
use userdir_core::auth::identity::Authenticator;
use userdir_core::auth::jwt::TokenIssuer;
use userdir_core::directory::{Directory, SharedDirectory};

use crate::config::ApiConfig;
use crate::graphql::DirectorySchema;
use crate::handlers::{graphql as graphql_handlers, hello};

/// Route paths.
pub mod routes {
    pub const GRAPHQL_ROOT: &str = "/";
    pub const GRAPHQL: &str = "/graphql";
    pub const GET_API_HELLO: &str = "/api/hello";
}

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The user directory.
    pub directory: SharedDirectory,
    /// Resolves bearer headers into identities.
    pub authenticator: Authenticator,
    /// Executable GraphQL schema, holding the same directory.
    pub schema: DirectorySchema,
}

impl AppState {
    /// Wire the directory, token issuer and authenticator from `config`.
    ///
    /// Fails when the configured token lifetime is out of range.
    pub fn new(config: &ApiConfig, directory: Directory) -> Result<Self, AuthError> {
        let directory = directory.into_shared();
        let secret = config.jwt_secret.as_bytes();
        let issuer = TokenIssuer::new(secret).with_ttl_secs(config.token_ttl_secs)?;
        let authenticator = Authenticator::new(secret).with_policy(config.rejected_token_policy);
        info!(
            token_ttl_secs = issuer.ttl_secs(),
            rejected_token_policy = %authenticator.policy(),
            "configured authentication"
        );
        let schema = graphql::build_schema(directory.clone(), issuer);
        Ok(Self {
            directory,
            authenticator,
            schema,
        })
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let public = Router::new().route(routes::GET_API_HELLO, get(hello::hello_world));

    // GraphQL routes see the caller's identity; gating happens per resolver.
    let graphql = Router::new()
        .route(
            routes::GRAPHQL_ROOT,
            get(graphql_handlers::graphiql).post(graphql_handlers::graphql_handler),
        )
        .route(routes::GRAPHQL, post(graphql_handlers::graphql_handler))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::resolve_identity,
        ));

    Router::new()
        .merge(public)
        .merge(graphql)
        .layer(cors)
        .with_state(state)
}
