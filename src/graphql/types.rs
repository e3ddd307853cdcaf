use crate::model::{self, MemberType as ModelMemberType, Post as ModelPost};
use async_graphql::{Enum, SimpleObject};
use uuid::Uuid;

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum MemberTypeId {
    Basic,
    Business,
}

impl From<model::MemberTypeId> for MemberTypeId {
    fn from(id: model::MemberTypeId) -> Self {
        match id {
            model::MemberTypeId::Basic => MemberTypeId::Basic,
            model::MemberTypeId::Business => MemberTypeId::Business,
        }
    }
}

impl From<MemberTypeId> for model::MemberTypeId {
    fn from(id: MemberTypeId) -> Self {
        match id {
            MemberTypeId::Basic => model::MemberTypeId::Basic,
            MemberTypeId::Business => model::MemberTypeId::Business,
        }
    }
}

#[derive(SimpleObject)]
pub struct MemberType {
    pub id: MemberTypeId,
    pub discount: f64,
    pub monthly_post_limit: i32,
}

impl From<ModelMemberType> for MemberType {
    fn from(t: ModelMemberType) -> Self {
        Self {
            id: t.id.into(),
            discount: t.discount,
            monthly_post_limit: t.monthly_post_limit,
        }
    }
}

#[derive(SimpleObject)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
}

impl From<ModelPost> for Post {
    fn from(p: ModelPost) -> Self {
        Self {
            id: p.id,
            title: p.title,
            content: p.content,
        }
    }
}

/// Wraps the model user; relation fields are resolved against the shared
/// store in the schema module.
pub struct User(pub(crate) model::User);

impl From<model::User> for User {
    fn from(u: model::User) -> Self {
        Self(u)
    }
}

/// Wraps the model profile; `memberType` is resolved in the schema module.
pub struct Profile(pub(crate) model::Profile);

impl From<model::Profile> for Profile {
    fn from(p: model::Profile) -> Self {
        Self(p)
    }
}
