//! Domain models.
//!
//! These are internal domain models, distinct from the GraphQL object types
//! exposed by `userdir_api`.

pub mod auth;
pub mod user;
