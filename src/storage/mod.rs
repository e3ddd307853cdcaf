//! Persistence layer for subhub.
//!
//! All entities live in an in-memory [`Store`] built once at startup, either
//! from a JSON seed file or from built-in defaults (the two membership tiers
//! and nothing else). The store is read-only after construction and is shared
//! across concurrent requests behind an `Arc`.
//!
//! ## Seed File Format
//!
//! ```json
//! {
//!   "users": [{ "id": "...", "name": "Alice", "balance": 12.5 }],
//!   "profiles": [{ "id": "...", "userId": "...", "isMale": false,
//!                  "yearOfBirth": 1990, "memberTypeId": "BASIC" }],
//!   "posts": [{ "id": "...", "authorId": "...", "title": "...", "content": "..." }],
//!   "subscriptions": [{ "subscriberId": "...", "targetId": "..." }]
//! }
//! ```
//!
//! ## Components
//!
//! - [`Store`]: point and relation lookups over the data set
//! - [`SeedData`]: seed file parsing and referential-integrity validation

mod seed;
mod store;

pub use seed::{SeedData, default_member_types};
pub use store::Store;
