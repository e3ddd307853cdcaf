use crate::{
    error::{Result, SubhubError},
    model::{MemberType, MemberTypeId, Post, Profile, SubscriptionEdge, User},
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// The two membership tiers every store carries.
pub fn default_member_types() -> Vec<MemberType> {
    vec![
        MemberType {
            id: MemberTypeId::Basic,
            discount: 2.5,
            monthly_post_limit: 20,
        },
        MemberType {
            id: MemberTypeId::Business,
            discount: 7.5,
            monthly_post_limit: 100,
        },
    ]
}

/// Deserialized seed file. Every section is optional; `member_types` falls
/// back to [`default_member_types`] when empty.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeedData {
    pub member_types: Vec<MemberType>,
    pub users: Vec<User>,
    pub profiles: Vec<Profile>,
    pub posts: Vec<Post>,
    pub subscriptions: Vec<SubscriptionEdge>,
}

impl SeedData {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SubhubError::Seed(format!("Cannot read seed file {}: {}", path.display(), e))
        })?;
        let seed: SeedData = serde_json::from_str(&content)?;
        seed.validate()?;
        Ok(seed)
    }

    pub fn member_types_or_default(&self) -> Vec<MemberType> {
        if self.member_types.is_empty() {
            default_member_types()
        } else {
            self.member_types.clone()
        }
    }

    /// Check referential integrity: member type ids are unique, profiles
    /// reference existing users and member types (at most one profile per
    /// user), posts reference existing authors, and subscription edges
    /// reference existing users on both ends.
    pub fn validate(&self) -> Result<()> {
        let user_ids: HashSet<_> = self.users.iter().map(|u| u.id).collect();

        let mut tier_ids = HashSet::new();
        for tier in self.member_types_or_default() {
            if !tier_ids.insert(tier.id) {
                return Err(SubhubError::Seed(format!(
                    "Duplicate member type {}",
                    tier.id
                )));
            }
        }

        let mut profiled_users = HashSet::new();
        for profile in &self.profiles {
            if !user_ids.contains(&profile.user_id) {
                return Err(SubhubError::Seed(format!(
                    "Profile {} references unknown user {}",
                    profile.id, profile.user_id
                )));
            }
            if !tier_ids.contains(&profile.member_type_id) {
                return Err(SubhubError::Seed(format!(
                    "Profile {} references unknown member type {}",
                    profile.id, profile.member_type_id
                )));
            }
            if !profiled_users.insert(profile.user_id) {
                return Err(SubhubError::Seed(format!(
                    "User {} has more than one profile",
                    profile.user_id
                )));
            }
        }

        for post in &self.posts {
            if !user_ids.contains(&post.author_id) {
                return Err(SubhubError::Seed(format!(
                    "Post {} references unknown author {}",
                    post.id, post.author_id
                )));
            }
        }

        for edge in &self.subscriptions {
            if !user_ids.contains(&edge.subscriber_id) {
                return Err(SubhubError::Seed(format!(
                    "Subscription references unknown subscriber {}",
                    edge.subscriber_id
                )));
            }
            if !user_ids.contains(&edge.target_id) {
                return Err(SubhubError::Seed(format!(
                    "Subscription references unknown target {}",
                    edge.target_id
                )));
            }
        }

        Ok(())
    }
}
