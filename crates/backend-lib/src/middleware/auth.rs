//! Cookie-based authentication gate.
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use metrics::counter;
use secrecy::ExposeSecret;
use serde::Serialize;
use tracing::debug;

use crate::auth::{token::verify_access_token, ACCESS_TOKEN_COOKIE};
use crate::error::AppError;
use crate::metrics::GATE_REJECTED;
use crate::AppState;

/// Identity rebuilt from a verified access token.
///
/// It is not re-checked against the store, so it reflects the user as they
/// were when the token was issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(rename = "firstname")]
    pub first_name: String,
    #[serde(rename = "lastname")]
    pub last_name: String,
}

/// Reject requests without a valid `access_token` cookie.
///
/// On success the caller's [`AuthenticatedUser`] is available to the wrapped
/// handler as a request extension.
pub async fn require_authenticated_user(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = authenticate(&state, &jar).inspect_err(|e| {
        counter!(GATE_REJECTED).increment(1);
        debug!(error = %e, "rejected unauthenticated request");
    })?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

fn authenticate(state: &AppState, jar: &CookieJar) -> Result<AuthenticatedUser, AppError> {
    let token = jar
        .get(ACCESS_TOKEN_COOKIE)
        .map(|c| c.value())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Unauthorized("missing access token".to_string()))?;

    let claims = verify_access_token(token, state.settings.access_token_secret.expose_secret())?;

    let id = claims
        .id
        .parse::<i64>()
        .map_err(|e| AppError::BadRequest(format!("invalid user id in token: {e}")))?;

    Ok(AuthenticatedUser {
        id,
        username: claims.username,
        email: claims.email,
        first_name: claims.first_name,
        last_name: claims.last_name,
    })
}
