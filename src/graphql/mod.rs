//! GraphQL schema and resolvers for subhub.
//!
//! Exposes read-only lookups over users, profiles, posts, and membership
//! tiers. There are no mutations; the underlying store is immutable.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! subhub serve --port 4000
//!
//! # Execute a query from CLI
//! subhub query '{ memberTypes { id discount } }'
//! ```
//!
//! ## Schema
//!
//! - **Singular lookups** (null on miss): `memberType`, `user`, `profile`, `post`
//! - **Collection lookups** (always a list): `memberTypes`, `users`, `profiles`, `posts`
//! - **Relations**: `User.profile`, `User.posts`, `User.userSubscribedTo`,
//!   `User.subscribedToUser`, `Profile.memberType`

mod schema;
mod server;
mod types;

pub use schema::{QueryRoot, SubhubSchema, build_schema};
pub use server::{router, run_server};
pub use types::*;
