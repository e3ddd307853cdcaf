//! # Subhub - A GraphQL read layer over a relational data set
//!
//! Subhub exposes read-only GraphQL access to users, profiles, posts, and
//! membership tiers, including a user-to-user subscription relation. The
//! data set is loaded once at startup from a JSON seed file and served
//! unchanged for the life of the process.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server against a seed file
//! subhub serve --data seed.json --port 4000
//!
//! # Run a query without starting the server
//! subhub query '{ memberTypes { id discount } }'
//!
//! # Inspect the schema
//! subhub schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers, and HTTP transport
//! - [`model`]: Data models (User, Profile, Post, MemberType)
//! - [`storage`]: In-memory store and seed loading

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `subhub.yml` configuration files.
pub mod config;

/// Error types and result aliases.
///
/// Defines `SubhubError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers, and HTTP transport.
///
/// Provides the async-graphql schema and the axum endpoint serving it.
pub mod graphql;

/// Data models for subhub.
///
/// Includes `User`, `Profile`, `Post`, `MemberType`, and `SubscriptionEdge`.
pub mod model;

/// In-memory persistence layer.
///
/// Handles seed file loading, validation, and entity lookups.
pub mod storage;

pub mod logging;
