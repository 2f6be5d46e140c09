// ============================
// userdesk-backend-lib/src/auth/mod.rs
// ============================
//! Authentication module.

pub mod cookies;
pub mod password;
pub mod token;
mod service;
mod service_impl;

pub use cookies::{access_token_cookie, ACCESS_TOKEN_COOKIE, DEFAULT_COOKIE_MAX_AGE};
pub use password::{Password, PasswordError};
pub use service::{AuthError, AuthService};
pub use service_impl::{claims_for, DefaultAuth, ACCESS_TOKEN_TTL};
pub use token::{TokenError, UserClaims};
