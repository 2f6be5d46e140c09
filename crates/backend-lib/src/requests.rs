//! Incoming request types and their validation.
//!
//! Each request keeps the raw values it was built from plus the errors
//! collected by `validate`. Only a validated request can be turned into a
//! domain value.

use crate::auth::password::Password;
use crate::user::{NewUser, UserError, UserUpdate};
use crate::validation::{char_len, is_valid_email, Validator, MIN_PASSWORD_LENGTH};
use userdesk_common::{FieldErrors, LoginPayload, RegisterPayload, UpdatePayload};
use zeroize::Zeroize;

/// Name, username and email shared by registration and update
#[derive(Debug, Clone, Default)]
pub struct UserFields {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
}

impl UserFields {
    fn sanitize(&mut self) {
        self.first_name = self.first_name.trim().to_string();
        self.last_name = self.last_name.trim().to_string();
        self.username = self.username.trim().to_string();
        self.email = self.email.trim().to_lowercase();
    }

    fn validate(&mut self, v: &mut Validator) {
        self.sanitize();

        v.check(!self.first_name.is_empty(), "first_name", "firstname is required");
        v.check(!self.last_name.is_empty(), "last_name", "lastname is required");
        v.check(!self.username.is_empty(), "username", "username is required");
        if self.email.is_empty() {
            v.add_error("email", "email is required");
        } else {
            v.check(is_valid_email(&self.email), "email", "email is not valid");
        }
    }
}

/// `POST /v1/users`
#[derive(Default)]
pub struct RegisterRequest {
    pub fields: UserFields,
    pub password: String,
    pub password_confirm: String,
    errors: FieldErrors,
    validated: bool,
}

impl From<RegisterPayload> for RegisterRequest {
    fn from(p: RegisterPayload) -> Self {
        Self {
            fields: UserFields {
                first_name: p.first_name,
                last_name: p.last_name,
                username: p.username,
                email: p.email,
            },
            password: p.password,
            password_confirm: p.password_confirm,
            ..Self::default()
        }
    }
}

impl RegisterRequest {
    /// Sanitize and check every field; returns whether the request is valid
    pub fn validate(&mut self) -> bool {
        let mut v = Validator::new();
        self.fields.validate(&mut v);

        if self.password.is_empty() {
            v.add_error("password", "password is required");
        } else if char_len(&self.password) < MIN_PASSWORD_LENGTH {
            v.add_error("password", "password must have at least 8 characters");
        }

        if self.password_confirm.is_empty() {
            v.add_error("password_confirm", "password confirmation is required");
        } else if self.password != self.password_confirm {
            v.add_error("password_confirm", "passwords mismatch");
        }

        self.validated = v.is_valid();
        self.errors = v.into_errors();
        self.validated
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Hash the password and build the user to store. Plaintext buffers are wiped.
    pub fn into_new_user(mut self) -> Result<NewUser, UserError> {
        if !self.validated {
            return Err(UserError::NotValidated);
        }
        let password = Password::set_secure(&mut self.password)?;
        self.password_confirm.zeroize();
        Ok(NewUser {
            first_name: self.fields.first_name,
            last_name: self.fields.last_name,
            username: self.fields.username,
            email: self.fields.email,
            password,
        })
    }
}

/// `PUT /v1/users/{id}`
#[derive(Debug, Clone, Default)]
pub struct UpdateRequest {
    pub fields: UserFields,
    pub version: i32,
    errors: FieldErrors,
    validated: bool,
}

impl From<UpdatePayload> for UpdateRequest {
    fn from(p: UpdatePayload) -> Self {
        Self {
            fields: UserFields {
                first_name: p.first_name,
                last_name: p.last_name,
                username: p.username,
                email: p.email,
            },
            version: p.version,
            ..Self::default()
        }
    }
}

impl UpdateRequest {
    pub fn validate(&mut self) -> bool {
        let mut v = Validator::new();
        self.fields.validate(&mut v);
        self.validated = v.is_valid();
        self.errors = v.into_errors();
        self.validated
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Build the store update for user `id`. Any id the client sent is ignored.
    pub fn to_update(&self, id: i64) -> Result<UserUpdate, UserError> {
        if !self.validated {
            return Err(UserError::NotValidated);
        }
        Ok(UserUpdate {
            id,
            first_name: self.fields.first_name.clone(),
            last_name: self.fields.last_name.clone(),
            username: self.fields.username.clone(),
            email: self.fields.email.clone(),
            version: self.version,
        })
    }
}

/// `POST /v1/login`
#[derive(Default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    errors: FieldErrors,
}

impl From<LoginPayload> for LoginRequest {
    fn from(p: LoginPayload) -> Self {
        Self {
            username: p.username,
            password: p.password,
            errors: FieldErrors::new(),
        }
    }
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::from(LoginPayload {
            username: username.into(),
            password: password.into(),
        })
    }

    pub fn validate(&mut self) -> bool {
        self.username = self.username.trim().to_string();

        let mut v = Validator::new();
        v.check(!self.username.is_empty(), "username", "The username is required");
        v.check(!self.password.is_empty(), "password", "The password is required");
        self.errors = v.into_errors();
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Wipe the plaintext once it has been checked
    pub fn forget_password(&mut self) {
        self.password.zeroize();
    }
}
