// crates/backend-lib/src/middleware/mod.rs

//! Middleware for the `userdesk` API.

pub mod auth;

pub use auth::{require_authenticated_user, AuthenticatedUser};
