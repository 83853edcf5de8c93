//! GraphQL endpoint and explorer page.

use async_graphql::http::GraphiQLSource;
use axum::{Extension, Json};
use axum::extract::State;
use axum::response::Html;
use userdir_core::models::auth::Identity;

use crate::AppState;
use crate::routes;

/// `POST /` — execute a GraphQL request as the resolved caller.
pub async fn graphql_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    Json(state.schema.execute(request.data(identity)).await)
}

/// `GET /` — GraphiQL explorer.
pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(routes::GRAPHQL_ROOT).finish())
}
