//! Integration tests — build the router over a seeded directory and drive the
//! GraphQL endpoint with JSON requests.

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderValue, Request, StatusCode, header};
use chrono::{Duration, Utc};
use serde_json::{Value, json};
use tower::ServiceExt;
use userdir_api::{AppState, config::ApiConfig};
use userdir_core::auth::AuthError;
use userdir_core::auth::identity::{Authenticator, RejectedTokenPolicy};
use userdir_core::auth::jwt::TokenIssuer;
use userdir_core::directory::Directory;

const SECRET: &str = "test-secret";

const GET_USERS: &str = "query { getUsers { id name age isMarried email role } }";
const GET_USER_BY_ID: &str =
    "query GetUserById($id: ID!) { getUserById(id: $id) { id name age isMarried email role } }";
const CREATE_USER: &str = "mutation CreateUser($name: String!, $age: Int!, $isMarried: Boolean!) {
    createUser(name: $name, age: $age, isMarried: $isMarried) { id name age isMarried email role }
}";
const LOGIN: &str = "mutation Login($email: String!) { login(email: $email) { token user { id name } } }";

fn test_config(policy: RejectedTokenPolicy) -> ApiConfig {
    let mut config = ApiConfig::new("127.0.0.1:0", SECRET);
    config.rejected_token_policy = policy;
    config
}

fn app_with_policy(policy: RejectedTokenPolicy) -> Router {
    let state = AppState::new(&test_config(policy), Directory::seeded()).expect("app state");
    userdir_api::router(state)
}

fn app() -> Router {
    app_with_policy(RejectedTokenPolicy::DowngradeToAnonymous)
}

async fn post_graphql(
    app: &Router,
    query: &str,
    variables: Value,
    authorization: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    let body = json!({ "query": query, "variables": variables });
    let req = builder.body(Body::from(body.to_string())).unwrap();

    let resp = app.clone().oneshot(req).await.expect("request");
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&bytes).expect("parse JSON");
    (status, json)
}

fn error_code(body: &Value) -> &str {
    body["errors"][0]["extensions"]["code"]
        .as_str()
        .unwrap_or_else(|| panic!("no error code in {body}"))
}

async fn login_token(app: &Router, email: &str) -> String {
    let (_, body) = post_graphql(app, LOGIN, json!({ "email": email }), None).await;
    body["data"]["login"]["token"]
        .as_str()
        .expect("token")
        .to_string()
}

#[tokio::test]
async fn get_users_returns_seed_in_order() {
    let app = app();
    let (status, body) = post_graphql(&app, GET_USERS, json!({}), None).await;

    assert_eq!(status, StatusCode::OK);
    let users = body["data"]["getUsers"].as_array().expect("users array");
    let names: Vec<_> = users.iter().map(|u| u["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Alice", "Bob", "Charlie"]);
    assert_eq!(users[1]["isMarried"], true);
    assert_eq!(users[0]["email"], "alice@example.com");
}

#[tokio::test]
async fn created_user_appears_in_listing() {
    let app = app();
    let (_, body) = post_graphql(
        &app,
        CREATE_USER,
        json!({ "name": "Dana", "age": 28, "isMarried": false }),
        None,
    )
    .await;
    let created = &body["data"]["createUser"];
    assert_eq!(created["id"], "4");
    assert_eq!(created["email"], "dana@example.com");
    assert_eq!(created["role"], "user");

    let (_, body) = post_graphql(&app, GET_USERS, json!({}), None).await;
    let users = body["data"]["getUsers"].as_array().unwrap();
    assert_eq!(users.len(), 4);
    assert_eq!(&users[3], created);
}

#[tokio::test]
async fn duplicate_name_is_rejected_and_store_unchanged() {
    let app = app();
    let (_, before) = post_graphql(&app, GET_USERS, json!({}), None).await;

    let (status, body) = post_graphql(
        &app,
        CREATE_USER,
        json!({ "name": "Alice", "age": 1, "isMarried": true }),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(error_code(&body), "DUPLICATE_NAME");
    assert_eq!(
        body["errors"][0]["message"],
        "User with name Alice already exists"
    );

    let (_, after) = post_graphql(&app, GET_USERS, json!({}), None).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn get_user_by_id_requires_authentication() {
    let app = app();
    for id in ["1", "3", "42"] {
        let (_, body) = post_graphql(&app, GET_USER_BY_ID, json!({ "id": id }), None).await;
        assert_eq!(error_code(&body), "UNAUTHENTICATED");
        assert!(body["data"]["getUserById"].is_null());
    }
}

#[tokio::test]
async fn login_token_unlocks_get_user_by_id() {
    let app = app();
    let token = login_token(&app, "alice@example.com").await;
    let bearer = format!("Bearer {token}");

    let (_, body) = post_graphql(&app, GET_USER_BY_ID, json!({ "id": "1" }), Some(&bearer)).await;
    assert!(body.get("errors").is_none(), "unexpected errors: {body}");
    let user = &body["data"]["getUserById"];
    assert_eq!(user["name"], "Alice");
    assert_eq!(user["age"], 30);
    assert_eq!(user["isMarried"], false);
    assert_eq!(user["email"], "alice@example.com");
    assert_eq!(user["role"], "admin");

    let (_, body) = post_graphql(&app, GET_USER_BY_ID, json!({ "id": "99" }), Some(&bearer)).await;
    assert!(body.get("errors").is_none());
    assert!(body["data"]["getUserById"].is_null());
}

#[tokio::test]
async fn login_claims_carry_user_snapshot() {
    let app = app();
    let token = login_token(&app, "alice@example.com").await;

    let claims = Authenticator::new(SECRET.as_bytes())
        .verify(&token)
        .expect("valid token");
    assert_eq!(claims.user.id, "1");
    assert_eq!(claims.user.name, "Alice");
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[tokio::test]
async fn login_with_unknown_email_fails() {
    let app = app();
    let (_, body) = post_graphql(&app, LOGIN, json!({ "email": "zed@example.com" }), None).await;
    assert_eq!(error_code(&body), "USER_NOT_FOUND");
    assert_eq!(
        body["errors"][0]["message"],
        "User with email zed@example.com not found"
    );
}

#[tokio::test]
async fn login_works_for_created_user() {
    let app = app();
    post_graphql(
        &app,
        CREATE_USER,
        json!({ "name": "Frank", "age": 50, "isMarried": true }),
        None,
    )
    .await;
    let (_, body) = post_graphql(&app, LOGIN, json!({ "email": "frank@example.com" }), None).await;
    assert_eq!(body["data"]["login"]["user"]["id"], "4");
}

#[tokio::test]
async fn expired_token_is_treated_as_anonymous() {
    let app = app();
    let directory = Directory::seeded();
    let alice = directory.find_by_id("1").unwrap();
    let token = TokenIssuer::new(SECRET.as_bytes())
        .issue_for(alice, Utc::now() - Duration::hours(2))
        .unwrap();

    let (status, body) = post_graphql(
        &app,
        GET_USER_BY_ID,
        json!({ "id": "1" }),
        Some(&format!("Bearer {token}")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(error_code(&body), "UNAUTHENTICATED");
}

#[tokio::test]
async fn garbage_token_downgrades_but_public_queries_still_work() {
    let app = app();
    let (status, body) = post_graphql(&app, GET_USERS, json!({}), Some("Bearer garbage")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["getUsers"].as_array().unwrap().len(), 3);

    let (_, body) =
        post_graphql(&app, GET_USER_BY_ID, json!({ "id": "1" }), Some("Bearer garbage")).await;
    assert_eq!(error_code(&body), "UNAUTHENTICATED");
}

#[tokio::test]
async fn reject_policy_returns_unauthorized() {
    let app = app_with_policy(RejectedTokenPolicy::Reject);
    let (status, body) = post_graphql(&app, GET_USERS, json!({}), Some("Bearer garbage")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "unauthorized");

    let (status, _) = post_graphql(&app, GET_USERS, json!({}), None).await;
    assert_eq!(status, StatusCode::OK);
}

/// Send `{ getUsers { id } }` with an `Authorization` header that is not
/// visible ASCII.
async fn get_users_with_unreadable_header(app: &Router) -> StatusCode {
    let req = Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json")
        .header(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"Bearer \xff\xfe").unwrap(),
        )
        .body(Body::from(json!({ "query": "{ getUsers { id } }" }).to_string()))
        .unwrap();
    app.clone().oneshot(req).await.expect("request").status()
}

#[tokio::test]
async fn reject_policy_refuses_unreadable_header() {
    let app = app_with_policy(RejectedTokenPolicy::Reject);
    assert_eq!(
        get_users_with_unreadable_header(&app).await,
        StatusCode::UNAUTHORIZED
    );
}

#[tokio::test]
async fn unreadable_header_downgrades_to_anonymous() {
    let app = app();
    assert_eq!(get_users_with_unreadable_header(&app).await, StatusCode::OK);
}

#[test]
fn out_of_range_token_ttl_is_rejected() {
    for ttl in [0, -5, i64::MAX] {
        let mut config = test_config(RejectedTokenPolicy::DowngradeToAnonymous);
        config.token_ttl_secs = ttl;
        assert!(matches!(
            AppState::new(&config, Directory::seeded()),
            Err(AuthError::InvalidTtl(_))
        ));
    }
}

#[tokio::test]
async fn graphql_alias_route_executes_queries() {
    let app = app();
    let req = Request::builder()
        .method("POST")
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "query": "{ getUsers { id } }" }).to_string()))
        .unwrap();
    let resp = app.oneshot(req).await.expect("request");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn hello_endpoint_reports_user_count() {
    let app = app();
    let req = Request::builder()
        .uri("/api/hello")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.expect("request");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json: Value = serde_json::from_slice(&body).expect("parse JSON");
    let greeting = json["greeting"].as_str().expect("greeting is string");
    assert!(greeting.starts_with("Hello from userdir_core v"));
    assert_eq!(json["userCount"], 3);
}

#[tokio::test]
async fn graphiql_page_is_served() {
    let app = app();
    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.expect("request");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(String::from_utf8_lossy(&body).to_lowercase().contains("graphiql"));
}
