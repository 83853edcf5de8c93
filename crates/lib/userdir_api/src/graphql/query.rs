//! Query root.

use async_graphql::{Context, ID, Object, Result};
use tracing::debug;
use userdir_core::auth::AuthError;
use userdir_core::directory::SharedDirectory;
use userdir_core::models::auth::Identity;

use super::errors::IntoGraphQlError;
use super::types::UserObject;

#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every user, in creation order.
    async fn get_users(&self, ctx: &Context<'_>) -> Result<Vec<UserObject>> {
        let directory = ctx.data::<SharedDirectory>()?.read().await;
        Ok(directory.list_all().iter().map(UserObject::from).collect())
    }

    /// A single user by id. Requires a valid access token.
    async fn get_user_by_id(&self, ctx: &Context<'_>, id: ID) -> Result<Option<UserObject>> {
        let Some(claims) = ctx.data_opt::<Identity>().and_then(Identity::claims) else {
            return Err(AuthError::NotAuthenticated.into_graphql_error());
        };
        debug!(caller = %claims.user.id, id = %id.as_str(), "getUserById");
        let directory = ctx.data::<SharedDirectory>()?.read().await;
        Ok(directory.find_by_id(&id).map(UserObject::from))
    }
}
