//! User records and the errors raised while managing them.

pub mod service;

pub use service::UserService;

use crate::auth::password::{Password, PasswordError};
use thiserror::Error;
use userdesk_common::UserView;

/// Errors produced by the user store and user service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    #[error("user not found")]
    NotFound,

    #[error("the username {0} is being used")]
    DuplicateUsername(String),

    #[error("the email {0} is being used")]
    DuplicateEmail(String),

    #[error("edit conflict")]
    EditConflict,

    #[error("user update data hasn't been validated")]
    NotValidated,

    #[error(transparent)]
    Password(#[from] PasswordError),
}

/// A stored user. Clients only ever see its [`UserView`].
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub version: i32,
    pub password: Password,
}

impl User {
    /// Public view of this record, without the credential
    pub fn view(&self) -> UserView {
        UserView {
            id: self.id,
            firstname: self.first_name.clone(),
            lastname: self.last_name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            version: self.version,
        }
    }
}

/// A user that has not been stored yet; the store assigns `id` and `version`
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: Password,
}

impl NewUser {
    pub(crate) fn into_user(self, id: i64) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            username: self.username,
            email: self.email,
            version: 0,
            password: self.password,
        }
    }
}

/// Replacement values for a user's mutable fields, guarded by `version`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdate {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    /// Version the caller last read
    pub version: i32,
}
