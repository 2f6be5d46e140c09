// ============================
// crates/backend-lib/src/handlers/users.rs
// ============================
//! User CRUD handlers.
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use metrics::counter;
use serde_json::{json, Value};
use tracing::{info, instrument, warn};
use userdesk_common::{RegisterPayload, UpdatePayload};

use super::blocking;
use crate::error::AppError;
use crate::json::{JsonBody, JsonResponse};
use crate::metrics::{USERS_CREATED, USERS_DELETED, USERS_EDIT_CONFLICT, USERS_UPDATED};
use crate::requests::{RegisterRequest, UpdateRequest};
use crate::user::{User, UserError};
use crate::AppState;

type JsonResult = Result<JsonResponse<Value>, AppError>;

/// Path ids must be positive integers; anything else is simply not found
fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id >= 1)
        .ok_or(AppError::NotFound)
}

/// `GET /v1/users`
pub async fn list_users(State(state): State<AppState>) -> JsonResponse<Value> {
    let users: Vec<_> = state.users.get_all().iter().map(User::view).collect();
    JsonResponse(StatusCode::OK, json!({ "users": users }))
}

/// `GET /v1/users/{id}`
pub async fn show_user(State(state): State<AppState>, Path(id): Path<String>) -> JsonResult {
    let id = parse_id(&id)?;
    let user = state.users.get_by_id(id)?;
    Ok(JsonResponse(StatusCode::OK, json!({ "user": user.view() })))
}

/// `POST /v1/users`
#[instrument(skip_all)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RegisterPayload>,
) -> JsonResult {
    let mut request = RegisterRequest::from(payload);
    if !request.validate() {
        return Err(AppError::Validation(request.errors().clone()));
    }

    let users = state.users.clone();
    let user = blocking(move || users.register(request))
        .await?
        .inspect_err(|e| warn!(error = %e, "registration rejected"))?;

    counter!(USERS_CREATED).increment(1);
    info!(user_id = user.id, "user created");

    Ok(JsonResponse(
        StatusCode::CREATED,
        json!({ "message": "User created successfully", "user": user.view() }),
    ))
}

/// `PUT /v1/users/{id}`
#[instrument(skip_all)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdatePayload>,
) -> JsonResult {
    let id = parse_id(&id)?;

    let mut request = UpdateRequest::from(payload);
    if !request.validate() {
        return Err(AppError::Validation(request.errors().clone()));
    }

    let user = state.users.update(id, &request).inspect_err(|e| {
        if *e == UserError::EditConflict {
            counter!(USERS_EDIT_CONFLICT).increment(1);
        }
        warn!(error = %e, "update rejected");
    })?;

    counter!(USERS_UPDATED).increment(1);
    Ok(JsonResponse(StatusCode::OK, json!({ "user": user.view() })))
}

/// `DELETE /v1/users/{id}`
pub async fn delete_user(State(state): State<AppState>, Path(id): Path<String>) -> JsonResult {
    let id = parse_id(&id)?;
    state.users.delete(id)?;

    counter!(USERS_DELETED).increment(1);
    info!(user_id = id, "user deleted");
    Ok(JsonResponse(
        StatusCode::OK,
        json!({ "message": "User deleted successfully" }),
    ))
}
