//! HTTP handlers for the `/v1` API.

pub mod auth;
pub mod health;
pub mod users;

use axum::http::Method;

use crate::error::AppError;

/// JSON 404 for unknown routes
pub async fn not_found() -> AppError {
    AppError::NotFound
}

/// JSON 405 for known routes called with an unsupported method
pub async fn method_not_allowed(method: Method) -> AppError {
    AppError::method_not_allowed(method.as_str())
}

/// Run CPU-heavy work (password hashing) off the async workers
pub(crate) async fn blocking<F, T>(work: F) -> Result<T, AppError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AppError::Internal(format!("blocking task failed: {e}")))
}
