use super::{NewUser, User, UserError};
use crate::requests::{RegisterRequest, UpdateRequest};
use crate::storage::UserRepository;
use std::sync::Arc;
use tracing::debug;

/// Orchestrates validated requests against the user store
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub fn get_all(&self) -> Vec<User> {
        self.repo.get_all()
    }

    pub fn get_by_id(&self, id: i64) -> Result<User, UserError> {
        self.repo.get_by_id(id)
    }

    pub fn get_by_username(&self, username: &str) -> Option<User> {
        self.repo.get_by_username(username)
    }

    pub fn create(&self, user: NewUser) -> Result<User, UserError> {
        self.repo.create(user)
    }

    /// Hash the credential of a validated registration and store the user
    pub fn register(&self, request: RegisterRequest) -> Result<User, UserError> {
        let user = request.into_new_user()?;
        self.create(user)
    }

    /// Apply a validated update to user `id`.
    ///
    /// The update is always scoped to `id`; the stored version must match the
    /// request's version or the call fails with [`UserError::EditConflict`].
    pub fn update(&self, id: i64, request: &UpdateRequest) -> Result<User, UserError> {
        self.get_by_id(id).inspect_err(|e| {
            debug!(user_id = id, error = %e, "error fetching user for update");
        })?;

        let update = request.to_update(id).inspect_err(|e| {
            debug!(user_id = id, error = %e, "error creating user model for update");
        })?;

        self.repo.update(update)
    }

    pub fn delete(&self, id: i64) -> Result<(), UserError> {
        self.repo.delete(id)
    }
}
