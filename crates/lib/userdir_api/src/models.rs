//! JSON bodies for the plain HTTP endpoints.

use serde::{Deserialize, Serialize};

/// Error body returned by non-GraphQL failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// `GET /api/hello` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelloWorldResponse {
    pub greeting: String,
    pub user_count: usize,
}
