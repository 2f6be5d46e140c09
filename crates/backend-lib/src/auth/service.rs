use crate::requests::LoginRequest;
use crate::user::User;

use super::password::PasswordError;
use thiserror::Error;

/// Failures while checking login credentials
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown username or wrong password
    #[error("wrong credentials")]
    WrongCredentials,

    #[error(transparent)]
    Password(#[from] PasswordError),
}

pub trait AuthService: Send + Sync {
    /// Resolve the user named in `login` and check its password
    fn validate_credentials(&self, login: &LoginRequest) -> Result<User, AuthError>;
}
