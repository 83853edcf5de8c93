//! Authentication middleware — Bearer token extraction and identity resolution.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum::http::HeaderValue;
use axum::http::header::AUTHORIZATION;
use userdir_core::auth::AuthError;

use crate::AppState;
use crate::error::AppError;

/// Axum middleware: resolves `Authorization: Bearer <token>` into an
/// [`Identity`](userdir_core::models::auth::Identity) and injects it into
/// request extensions.
///
/// The request is never rejected for a missing token. An invalid token is
/// either downgraded to anonymous or rejected with 401, depending on the
/// configured policy.
pub async fn resolve_identity(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .map(HeaderValue::to_str)
        .transpose();

    // A header that is present but not visible ASCII is an invalid credential.
    let resolved = match header {
        Ok(header) => state.authenticator.authenticate(header),
        Err(e) => state.authenticator.on_invalid_token(AuthError::InvalidToken(format!(
            "unreadable authorization header: {e}"
        ))),
    };
    let identity =
        resolved.map_err(|_| AppError::Unauthorized("Invalid or expired token".into()))?;
    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}
