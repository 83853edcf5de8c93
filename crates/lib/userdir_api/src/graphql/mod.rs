//! GraphQL schema over the user directory.
//!
//! Schema-level data holds the [`SharedDirectory`] and the [`TokenIssuer`];
//! the caller's [`Identity`](userdir_core::models::auth::Identity) is attached
//! per request by the HTTP handler.

pub mod errors;
pub mod mutation;
pub mod query;
pub mod types;

use async_graphql::{EmptySubscription, Schema};
use userdir_core::auth::jwt::TokenIssuer;
use userdir_core::directory::SharedDirectory;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

/// The executable schema.
pub type DirectorySchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with its shared data.
pub fn build_schema(directory: SharedDirectory, issuer: TokenIssuer) -> DirectorySchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(directory)
        .data(issuer)
        .finish()
}
