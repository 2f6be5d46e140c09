use super::password::{Password, PasswordError};
use super::token::{RegisteredClaims, UserClaims};
use super::{AuthError, AuthService};
use crate::requests::LoginRequest;
use crate::user::{User, UserService};
use chrono::{Duration, Utc};
use std::sync::LazyLock;

/// Lifetime of an access token issued at login
pub const ACCESS_TOKEN_TTL: Duration = Duration::hours(24);

/// Verified against when the username is unknown, so both failure paths pay
/// the same hashing cost.
static DUMMY_PASSWORD: LazyLock<Result<Password, PasswordError>> =
    LazyLock::new(|| Password::set("userdesk-dummy-credential"));

pub struct DefaultAuth {
    users: UserService,
}

impl DefaultAuth {
    pub fn new(users: UserService) -> Self {
        Self { users }
    }
}

impl AuthService for DefaultAuth {
    fn validate_credentials(&self, login: &LoginRequest) -> Result<User, AuthError> {
        let Some(user) = self.users.get_by_username(&login.username) else {
            burn_dummy_hash(&login.password);
            return Err(AuthError::WrongCredentials);
        };

        if !user.password.matches(&login.password)? {
            return Err(AuthError::WrongCredentials);
        }

        Ok(user)
    }
}

fn burn_dummy_hash(plaintext: &str) -> bool {
    match DUMMY_PASSWORD.as_ref() {
        Ok(dummy) => dummy.matches(plaintext).is_ok(),
        Err(_) => false,
    }
}

/// Session claims for `user`, expiring `ttl` from now
pub fn claims_for(user: &User, ttl: Duration) -> UserClaims {
    let now = Utc::now();
    UserClaims {
        id: user.id.to_string(),
        username: user.username.clone(),
        email: user.email.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        registered: RegisteredClaims {
            exp: (now + ttl).timestamp(),
            iat: Some(now.timestamp()),
            ..RegisteredClaims::default()
        },
    }
}
