//! Mutation root.

use async_graphql::{Context, Object, Result};
use userdir_core::auth::jwt::TokenIssuer;
use userdir_core::directory::SharedDirectory;

use super::errors::IntoGraphQlError;
use super::types::{AuthPayload, UserObject};

#[derive(Debug, Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add a user. Names must be unique.
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        name: String,
        age: i32,
        is_married: bool,
    ) -> Result<UserObject> {
        let mut directory = ctx.data::<SharedDirectory>()?.write().await;
        directory
            .create(&name, age, is_married)
            .map(|user| UserObject::from(&user))
            .map_err(IntoGraphQlError::into_graphql_error)
    }

    /// Exchange an email for a signed access token.
    async fn login(&self, ctx: &Context<'_>, email: String) -> Result<AuthPayload> {
        let issuer = ctx.data::<TokenIssuer>()?;
        let directory = ctx.data::<SharedDirectory>()?.read().await;
        issuer
            .issue(&directory, &email)
            .map(AuthPayload::from)
            .map_err(IntoGraphQlError::into_graphql_error)
    }
}
