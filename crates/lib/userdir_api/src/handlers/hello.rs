//! Hello world endpoint — health check.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::models::HelloWorldResponse;

/// `GET /api/hello` — reports the core version and directory size.
pub async fn hello_world(State(state): State<AppState>) -> Json<HelloWorldResponse> {
    let user_count = state.directory.read().await.len();
    Json(HelloWorldResponse {
        greeting: format!("Hello from userdir_core v{}", userdir_core::version()),
        user_count,
    })
}
