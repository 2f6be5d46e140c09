// ============================
// userdesk-backend-lib/src/router.rs
// ============================
//! HTTP routing for the `/v1` API.
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{self, auth, health, users};
use crate::middleware::require_authenticated_user;
use crate::AppState;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/v1/me", get(auth::current_user))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_authenticated_user,
        ));

    Router::new()
        .route("/v1/healthcheck", get(health::healthcheck))
        .route("/v1/login", post(auth::login))
        .route("/v1/users", get(users::list_users).post(users::create_user))
        .route(
            "/v1/users/{id}",
            get(users::show_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .merge(protected)
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
