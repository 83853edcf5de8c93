//! GraphQL object types.

use async_graphql::{ID, SimpleObject};
use userdir_core::auth::jwt::IssuedToken;
use userdir_core::models::user::User;

/// A directory user as seen by GraphQL callers.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "User")]
pub struct UserObject {
    pub id: ID,
    pub name: String,
    pub age: i32,
    pub is_married: bool,
    pub email: String,
    pub role: String,
}

impl From<&User> for UserObject {
    fn from(user: &User) -> Self {
        Self {
            id: ID(user.id.clone()),
            name: user.name.clone(),
            age: user.age,
            is_married: user.is_married,
            email: user.email.clone(),
            role: user.role.clone(),
        }
    }
}

/// Result of `login`.
#[derive(Debug, Clone, SimpleObject)]
pub struct AuthPayload {
    pub token: String,
    pub user: UserObject,
}

impl From<IssuedToken> for AuthPayload {
    fn from(issued: IssuedToken) -> Self {
        Self {
            user: UserObject::from(&issued.user),
            token: issued.token,
        }
    }
}
