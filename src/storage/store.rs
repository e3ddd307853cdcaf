use super::seed::{SeedData, default_member_types};
use crate::{
    error::Result,
    model::{MemberType, MemberTypeId, Post, Profile, SubscriptionEdge, User},
};
use std::path::Path;
use tracing::debug;
use uuid::Uuid;

/// Read-only data set backing the query layer.
///
/// Built once at startup and never mutated afterwards, so it can be shared
/// across concurrent requests without locking. Every lookup is a single pass
/// over one collection; resolvers call these independently per node, with no
/// cross-request or cross-sibling caching.
pub struct Store {
    member_types: Vec<MemberType>,
    users: Vec<User>,
    profiles: Vec<Profile>,
    posts: Vec<Post>,
    subscriptions: Vec<SubscriptionEdge>,
}

impl Default for Store {
    fn default() -> Self {
        Self::from_seed(SeedData::default())
    }
}

impl Store {
    pub fn from_seed(seed: SeedData) -> Self {
        let member_types = seed.member_types_or_default();
        debug!(
            users = seed.users.len(),
            profiles = seed.profiles.len(),
            posts = seed.posts.len(),
            subscriptions = seed.subscriptions.len(),
            "Store loaded"
        );
        Self {
            member_types,
            users: seed.users,
            profiles: seed.profiles,
            posts: seed.posts,
            subscriptions: seed.subscriptions,
        }
    }

    /// Load from a JSON seed file, or fall back to the tiers-only default
    /// store when no path is given.
    pub fn load(seed_path: Option<&Path>) -> Result<Self> {
        match seed_path {
            Some(path) => Ok(Self::from_seed(SeedData::load(path)?)),
            None => Ok(Self::default()),
        }
    }

    pub fn member_type(&self, id: MemberTypeId) -> Option<MemberType> {
        self.member_types.iter().find(|t| t.id == id).cloned()
    }

    pub fn member_types(&self) -> Vec<MemberType> {
        self.member_types.clone()
    }

    pub fn user(&self, id: Uuid) -> Option<User> {
        self.users.iter().find(|u| u.id == id).cloned()
    }

    pub fn users(&self) -> Vec<User> {
        self.users.clone()
    }

    pub fn profile(&self, id: Uuid) -> Option<Profile> {
        self.profiles.iter().find(|p| p.id == id).cloned()
    }

    pub fn profiles(&self) -> Vec<Profile> {
        self.profiles.clone()
    }

    pub fn post(&self, id: Uuid) -> Option<Post> {
        self.posts.iter().find(|p| p.id == id).cloned()
    }

    pub fn posts(&self) -> Vec<Post> {
        self.posts.clone()
    }

    /// The zero-or-one profile owned by a user.
    pub fn profile_for_user(&self, user_id: Uuid) -> Option<Profile> {
        self.profiles.iter().find(|p| p.user_id == user_id).cloned()
    }

    /// Posts authored by a user; empty list when there are none.
    pub fn posts_by_author(&self, user_id: Uuid) -> Vec<Post> {
        self.posts
            .iter()
            .filter(|p| p.author_id == user_id)
            .cloned()
            .collect()
    }

    /// Users appearing as subscriber on edges whose target is `user_id`.
    pub fn subscribers_of(&self, user_id: Uuid) -> Vec<User> {
        self.subscriptions
            .iter()
            .filter(|e| e.target_id == user_id)
            .filter_map(|e| self.user(e.subscriber_id))
            .collect()
    }

    /// Users appearing as target on edges whose subscriber is `user_id`.
    pub fn subscriptions_of(&self, user_id: Uuid) -> Vec<User> {
        self.subscriptions
            .iter()
            .filter(|e| e.subscriber_id == user_id)
            .filter_map(|e| self.user(e.target_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_seed() -> SeedData {
        let alice = User {
            id: Uuid::new_v4(),
            name: "Alice".to_string(),
            balance: 10.0,
        };
        let bob = User {
            id: Uuid::new_v4(),
            name: "Bob".to_string(),
            balance: 0.0,
        };
        SeedData {
            profiles: vec![Profile {
                id: Uuid::new_v4(),
                user_id: alice.id,
                is_male: false,
                year_of_birth: 1990,
                member_type_id: MemberTypeId::Business,
            }],
            posts: vec![Post {
                id: Uuid::new_v4(),
                author_id: alice.id,
                title: "Hello".to_string(),
                content: "First post".to_string(),
            }],
            subscriptions: vec![SubscriptionEdge {
                subscriber_id: bob.id,
                target_id: alice.id,
            }],
            users: vec![alice, bob],
            ..Default::default()
        }
    }

    #[test]
    fn test_default_store_has_only_member_tiers() {
        let store = Store::default();
        assert_eq!(store.member_types().len(), 2);
        assert!(store.users().is_empty());
        assert!(store.posts().is_empty());
    }

    #[test]
    fn test_point_lookups() {
        let seed = sample_seed();
        let alice_id = seed.users[0].id;
        let store = Store::from_seed(seed);

        assert_eq!(store.user(alice_id).unwrap().name, "Alice");
        assert!(store.user(Uuid::new_v4()).is_none());
        assert_eq!(
            store.member_type(MemberTypeId::Basic).unwrap().id,
            MemberTypeId::Basic
        );
    }

    #[test]
    fn test_profile_and_posts_for_user() {
        let seed = sample_seed();
        let alice_id = seed.users[0].id;
        let bob_id = seed.users[1].id;
        let store = Store::from_seed(seed);

        assert_eq!(
            store.profile_for_user(alice_id).unwrap().member_type_id,
            MemberTypeId::Business
        );
        assert!(store.profile_for_user(bob_id).is_none());
        assert_eq!(store.posts_by_author(alice_id).len(), 1);
        assert!(store.posts_by_author(bob_id).is_empty());
    }

    #[test]
    fn test_subscription_lookups_are_inverse() {
        let seed = sample_seed();
        let alice_id = seed.users[0].id;
        let bob_id = seed.users[1].id;
        let store = Store::from_seed(seed);

        // Bob subscribes to Alice.
        let alices_subscribers = store.subscribers_of(alice_id);
        assert_eq!(alices_subscribers.len(), 1);
        assert_eq!(alices_subscribers[0].id, bob_id);

        let bobs_targets = store.subscriptions_of(bob_id);
        assert_eq!(bobs_targets.len(), 1);
        assert_eq!(bobs_targets[0].id, alice_id);

        assert!(store.subscribers_of(bob_id).is_empty());
        assert!(store.subscriptions_of(alice_id).is_empty());
    }
}
