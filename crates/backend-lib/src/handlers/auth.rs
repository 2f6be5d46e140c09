// ============================
// crates/backend-lib/src/handlers/auth.rs
// ============================
//! Login and session identity handlers.
use axum::{extract::State, http::StatusCode, Extension};
use axum_extra::extract::cookie::CookieJar;
use metrics::counter;
use secrecy::ExposeSecret;
use serde_json::{json, Value};
use tracing::{info, instrument, warn};
use userdesk_common::LoginPayload;

use super::blocking;
use crate::auth::{
    access_token_cookie, claims_for, token::issue_access_token, ACCESS_TOKEN_TTL,
    DEFAULT_COOKIE_MAX_AGE,
};
use crate::error::AppError;
use crate::json::{JsonBody, JsonResponse};
use crate::metrics::{LOGIN_FAILURE, LOGIN_SUCCESS};
use crate::middleware::AuthenticatedUser;
use crate::requests::LoginRequest;
use crate::AppState;

/// `POST /v1/login`
///
/// Checks the credentials and, on success, sets the `access_token` cookie and
/// returns the user.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    JsonBody(payload): JsonBody<LoginPayload>,
) -> Result<(CookieJar, JsonResponse<Value>), AppError> {
    let mut request = LoginRequest::from(payload);
    if !request.validate() {
        return Err(AppError::Validation(request.errors().clone()));
    }

    let auth = state.auth.clone();
    let username = request.username.clone();
    let user = blocking(move || {
        let result = auth.validate_credentials(&request);
        request.forget_password();
        result
    })
        .await?
        .inspect_err(|e| {
            counter!(LOGIN_FAILURE).increment(1);
            warn!(%username, error = %e, "login failed");
        })?;

    let claims = claims_for(&user, ACCESS_TOKEN_TTL);
    let token = issue_access_token(&claims, state.settings.access_token_secret.expose_secret())?;

    counter!(LOGIN_SUCCESS).increment(1);
    info!(user_id = user.id, "user logged in");

    let jar = jar.add(access_token_cookie(token, DEFAULT_COOKIE_MAX_AGE));
    Ok((jar, JsonResponse(StatusCode::OK, json!({ "user": user.view() }))))
}

/// `GET /v1/me`, the caller's identity as carried by the access token
pub async fn current_user(Extension(user): Extension<AuthenticatedUser>) -> JsonResponse<Value> {
    JsonResponse(StatusCode::OK, json!({ "user": user }))
}
