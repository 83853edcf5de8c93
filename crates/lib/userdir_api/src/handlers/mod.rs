//! Request handlers.

pub mod graphql;
pub mod hello;
