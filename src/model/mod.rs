//! Data models for subhub.
//!
//! This module defines the core data structures:
//!
//! - [`MemberType`]: Membership tier reference data (discount, post quota)
//! - [`MemberTypeId`]: Enumerated tier identifiers (basic, business)
//! - [`User`]: Account with a display name and balance
//! - [`Profile`]: Per-user profile referencing a member type
//! - [`Post`]: Authored content
//! - [`SubscriptionEdge`]: User-to-user subscription pair

mod entities;
mod types;

pub use entities::{MemberType, Post, Profile, SubscriptionEdge, User};
pub use types::MemberTypeId;
