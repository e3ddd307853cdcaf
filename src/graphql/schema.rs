use std::sync::Arc;

use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Schema};
use uuid::Uuid;

use crate::error::SubhubError;
use crate::storage::Store;

use super::types::*;

pub type SubhubSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn build_schema(store: Arc<Store>) -> SubhubSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(store)
        .finish()
}

fn get_store<'a>(ctx: &Context<'a>) -> &'a Arc<Store> {
    ctx.data::<Arc<Store>>().unwrap()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get a membership tier by its enumerated id
    async fn member_type(
        &self,
        ctx: &Context<'_>,
        id: MemberTypeId,
    ) -> async_graphql::Result<Option<MemberType>> {
        let store = get_store(ctx);
        Ok(store.member_type(id.into()).map(|t| t.into()))
    }

    /// List all membership tiers
    async fn member_types(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<MemberType>> {
        let store = get_store(ctx);
        Ok(store.member_types().into_iter().map(|t| t.into()).collect())
    }

    /// Get a single user by id; null when no user matches
    async fn user(&self, ctx: &Context<'_>, id: Uuid) -> async_graphql::Result<Option<User>> {
        let store = get_store(ctx);
        Ok(store.user(id).map(|u| u.into()))
    }

    /// List all users
    async fn users(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<User>> {
        let store = get_store(ctx);
        Ok(store.users().into_iter().map(|u| u.into()).collect())
    }

    /// Get a single profile by id; null when no profile matches
    async fn profile(
        &self,
        ctx: &Context<'_>,
        id: Uuid,
    ) -> async_graphql::Result<Option<Profile>> {
        let store = get_store(ctx);
        Ok(store.profile(id).map(|p| p.into()))
    }

    /// List all profiles
    async fn profiles(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Profile>> {
        let store = get_store(ctx);
        Ok(store.profiles().into_iter().map(|p| p.into()).collect())
    }

    /// Get a single post by id; null when no post matches
    async fn post(&self, ctx: &Context<'_>, id: Uuid) -> async_graphql::Result<Option<Post>> {
        let store = get_store(ctx);
        Ok(store.post(id).map(|p| p.into()))
    }

    /// List all posts
    async fn posts(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Post>> {
        let store = get_store(ctx);
        Ok(store.posts().into_iter().map(|p| p.into()).collect())
    }
}

#[Object]
impl User {
    async fn id(&self) -> Uuid {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn balance(&self) -> f64 {
        self.0.balance
    }

    /// The user's profile; null when none exists
    async fn profile(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Profile>> {
        let store = get_store(ctx);
        Ok(store.profile_for_user(self.0.id).map(|p| p.into()))
    }

    /// Posts authored by this user; empty list when there are none
    async fn posts(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Post>> {
        let store = get_store(ctx);
        Ok(store
            .posts_by_author(self.0.id)
            .into_iter()
            .map(|p| p.into())
            .collect())
    }

    /// Users on subscription edges with this user as target
    async fn user_subscribed_to(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<User>> {
        let store = get_store(ctx);
        Ok(store
            .subscribers_of(self.0.id)
            .into_iter()
            .map(|u| u.into())
            .collect())
    }

    /// Users on subscription edges with this user as subscriber
    async fn subscribed_to_user(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<User>> {
        let store = get_store(ctx);
        Ok(store
            .subscriptions_of(self.0.id)
            .into_iter()
            .map(|u| u.into())
            .collect())
    }
}

#[Object]
impl Profile {
    async fn id(&self) -> Uuid {
        self.0.id
    }

    async fn is_male(&self) -> bool {
        self.0.is_male
    }

    async fn year_of_birth(&self) -> i32 {
        self.0.year_of_birth
    }

    /// The referenced membership tier. Non-null: a dangling reference is an
    /// execution error that propagates to the nearest nullable ancestor.
    async fn member_type(&self, ctx: &Context<'_>) -> async_graphql::Result<MemberType> {
        let store = get_store(ctx);
        match store.member_type(self.0.member_type_id) {
            Some(t) => Ok(t.into()),
            None => Err(SubhubError::NotFound(format!(
                "Member type: {}",
                self.0.member_type_id
            ))
            .into()),
        }
    }
}
