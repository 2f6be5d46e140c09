// ============================
// userdesk-backend-lib/src/lib.rs
// ============================
//! Core functionality for the `userdesk` HTTP API: user registration,
//! cookie-based login and user management over an in-memory store.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod json;
pub mod metrics;
pub mod middleware;
pub mod requests;
pub mod router;
pub mod storage;
pub mod user;
pub mod validation;

use std::sync::Arc;

use crate::auth::{AuthService, DefaultAuth};
use crate::config::Settings;
use crate::storage::{InMemoryUserStore, UserRepository};
use crate::user::UserService;

pub use router::create_router;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// User management
    pub users: UserService,
    /// Credential checks
    pub auth: Arc<dyn AuthService>,
    /// Loaded settings
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Create a new application state backed by a fresh in-memory store
    pub fn new(settings: Settings) -> Self {
        Self::with_repository(settings, Arc::new(InMemoryUserStore::new()))
    }

    /// Create a new application state over an existing repository
    pub fn with_repository(settings: Settings, repo: Arc<dyn UserRepository>) -> Self {
        let users = UserService::new(repo);
        let auth = Arc::new(DefaultAuth::new(users.clone()));

        Self {
            users,
            auth,
            settings: Arc::new(settings),
        }
    }
}
