//! Mapping of domain errors onto GraphQL errors with an `extensions.code`.

use async_graphql::{Error, ErrorExtensions};
use userdir_core::auth::AuthError;
use userdir_core::directory::DirectoryError;

pub const DUPLICATE_NAME: &str = "DUPLICATE_NAME";
pub const USER_NOT_FOUND: &str = "USER_NOT_FOUND";
pub const UNAUTHENTICATED: &str = "UNAUTHENTICATED";
pub const INTERNAL: &str = "INTERNAL";

/// Conversion into a GraphQL error carrying a machine-readable code.
pub trait IntoGraphQlError {
    fn code(&self) -> &'static str;

    fn into_graphql_error(self) -> Error;
}

fn coded(message: String, code: &'static str) -> Error {
    Error::new(message).extend_with(|_, ext| ext.set("code", code))
}

impl IntoGraphQlError for DirectoryError {
    fn code(&self) -> &'static str {
        match self {
            DirectoryError::DuplicateName(_) => DUPLICATE_NAME,
        }
    }

    fn into_graphql_error(self) -> Error {
        coded(self.to_string(), self.code())
    }
}

impl IntoGraphQlError for AuthError {
    fn code(&self) -> &'static str {
        match self {
            AuthError::UserNotFound(_) => USER_NOT_FOUND,
            AuthError::NotAuthenticated | AuthError::InvalidToken(_) => UNAUTHENTICATED,
            AuthError::TokenError(_) | AuthError::InvalidTtl(_) => INTERNAL,
        }
    }

    fn into_graphql_error(self) -> Error {
        coded(self.to_string(), self.code())
    }
}
