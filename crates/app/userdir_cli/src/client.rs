//! Blocking GraphQL client for the userdir server.

use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::{Error, Result};

const GET_USERS: &str = "query GetUsers { getUsers { id name age isMarried } }";

const GET_USER_BY_ID: &str = "query GetUserById($id: ID!) {
  getUserById(id: $id) { id name age isMarried email }
}";

const CREATE_USER: &str = "mutation CreateUser($name: String!, $age: Int!, $isMarried: Boolean!) {
  createUser(name: $name, age: $age, isMarried: $isMarried) { id name age isMarried email }
}";

const LOGIN: &str = "mutation Login($email: String!) {
  login(email: $email) { token user { id name age isMarried email } }
}";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: String,
    pub name: String,
    pub age: i32,
    pub is_married: bool,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub token: String,
    pub user: UserView,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlErrorBody>,
}

#[derive(Deserialize)]
struct GraphQlErrorBody {
    message: String,
    #[serde(default)]
    extensions: Option<Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GetUsersData {
    get_users: Vec<UserView>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GetUserByIdData {
    get_user_by_id: Option<UserView>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateUserData {
    create_user: UserView,
}

#[derive(Deserialize)]
struct LoginData {
    login: LoginPayload,
}

pub struct GraphQlClient {
    http: Client,
    url: String,
    token: Option<String>,
}

impl GraphQlClient {
    pub fn new(url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: Client::new(),
            url: url.into(),
            token,
        }
    }

    pub fn get_users(&self) -> Result<Vec<UserView>> {
        let data: GetUsersData = self.execute(GET_USERS, json!({}))?;
        Ok(data.get_users)
    }

    pub fn get_user_by_id(&self, id: &str) -> Result<Option<UserView>> {
        let data: GetUserByIdData = self.execute(GET_USER_BY_ID, json!({ "id": id }))?;
        Ok(data.get_user_by_id)
    }

    pub fn create_user(&self, name: &str, age: i32, is_married: bool) -> Result<UserView> {
        let data: CreateUserData = self.execute(
            CREATE_USER,
            json!({ "name": name, "age": age, "isMarried": is_married }),
        )?;
        Ok(data.create_user)
    }

    pub fn login(&self, email: &str) -> Result<LoginPayload> {
        let data: LoginData = self.execute(LOGIN, json!({ "email": email }))?;
        Ok(data.login)
    }

    fn execute<T: DeserializeOwned>(&self, query: &str, variables: Value) -> Result<T> {
        // An empty header is sent when logged out; the server reads it as anonymous.
        let authorization = self
            .token
            .as_deref()
            .map(|t| format!("Bearer {t}"))
            .unwrap_or_default();

        log::debug!("POST {}", self.url);
        let resp = self
            .http
            .post(&self.url)
            .header(AUTHORIZATION, authorization)
            .json(&GraphQlRequest { query, variables })
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                body: resp.text().unwrap_or_default(),
            });
        }

        let body: GraphQlResponse<T> = resp.json()?;
        decode_response(body)
    }
}

fn decode_response<T>(body: GraphQlResponse<T>) -> Result<T> {
    if let Some(err) = body.errors.into_iter().next() {
        let code = err
            .extensions
            .as_ref()
            .and_then(|ext| ext.get("code"))
            .and_then(Value::as_str)
            .map(str::to_string);
        return Err(Error::GraphQl {
            message: err.message,
            code,
        });
    }
    body.data
        .ok_or_else(|| Error::Custom("response carried neither data nor errors".into()))
}
