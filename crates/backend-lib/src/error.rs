// crates/backend-lib/src/error.rs

//! Central error type + Axum integration.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;
use userdesk_common::FieldErrors;

use crate::auth::{AuthError, PasswordError, TokenError};
use crate::json::{json_response, SERVER_ERROR_MSG};
use crate::user::UserError;

pub const NOT_FOUND_MSG: &str = "the requested resource could not be found";
pub const EDIT_CONFLICT_MSG: &str =
    "unable to update the record due to an edit conflict, please try again";

/// Errors surfaced at the HTTP boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Per-field problems, rendered under `"errors"`
    #[error("validation failed")]
    Validation(FieldErrors),

    #[error("{0}")]
    BadRequest(String),

    #[error("the requested resource could not be found")]
    NotFound,

    #[error("{0}")]
    MethodNotAllowed(String),

    #[error("unable to update the record due to an edit conflict, please try again")]
    EditConflict,

    #[error("{0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::EditConflict => StatusCode::CONFLICT,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable code used when logging
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VAL_001",
            AppError::BadRequest(_) => "REQ_001",
            AppError::NotFound => "NF_001",
            AppError::MethodNotAllowed(_) => "REQ_002",
            AppError::EditConflict => "USER_001",
            AppError::Unauthorized(_) => "AUTH_001",
            AppError::Internal(_) => "INT_001",
        }
    }

    /// A single field error, as used for duplicate username/email
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.to_string(), message.into());
        AppError::Validation(errors)
    }

    pub fn method_not_allowed(method: &str) -> Self {
        AppError::MethodNotAllowed(format!(
            "the {method} method is not supported for this resource"
        ))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();

        match self {
            AppError::Validation(errors) => json_response(status, &json!({ "errors": errors })),
            AppError::Internal(detail) => {
                error!(code, error = %detail, "internal server error");
                json_response(status, &json!({ "error": SERVER_ERROR_MSG }))
            },
            other => json_response(status, &json!({ "error": other.to_string() })),
        }
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound => AppError::NotFound,
            UserError::EditConflict => AppError::EditConflict,
            UserError::DuplicateUsername(_) => AppError::field("username", err.to_string()),
            UserError::DuplicateEmail(_) => AppError::field("email", err.to_string()),
            UserError::NotValidated => AppError::Internal(err.to_string()),
            UserError::Password(e) => e.into(),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::WrongCredentials => AppError::BadRequest(err.to_string()),
            AuthError::Password(e) => e.into(),
        }
    }
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Signing(_) => AppError::Internal(err.to_string()),
            other => AppError::Unauthorized(other.to_string()),
        }
    }
}

impl From<PasswordError> for AppError {
    fn from(err: PasswordError) -> Self {
        AppError::Internal(err.to_string())
    }
}
