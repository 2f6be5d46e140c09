// ================
// common/src/lib.rs
// ================
//! Common types and structures
//! exchanged between the `userdesk` API and its clients.
//! This module defines the JSON request payloads and the public views the server returns.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field name -> human readable message, as returned under `"errors"`
pub type FieldErrors = BTreeMap<String, String>;

/// Body of `POST /v1/login`
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct LoginPayload {
    pub username: String,
    pub password: String,
}

/// Body of `POST /v1/users`
/// # Fields
/// * `password` - Plaintext secret, at least 8 characters
/// * `password_confirm` - Must repeat `password` exactly
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct RegisterPayload {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

/// Body of `PUT /v1/users/{id}`
/// # Fields
/// * `version` - Version the client last read; a stale value is rejected with 409
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct UpdatePayload {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub version: i32,
}

/// Public user record as rendered by the API (never carries credential material)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserView {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub version: i32,
}

/// Environment and build details reported by the health check
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SystemInfo {
    pub environment: String,
    pub version: String,
}

/// Body of `GET /v1/healthcheck`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    pub system_info: SystemInfo,
}
