use axum::{extract::State, http::StatusCode};
use userdesk_common::{HealthStatus, SystemInfo};

use crate::json::JsonResponse;
use crate::AppState;

/// `GET /v1/healthcheck`
pub async fn healthcheck(State(state): State<AppState>) -> JsonResponse<HealthStatus> {
    JsonResponse(
        StatusCode::OK,
        HealthStatus {
            status: "available".to_string(),
            system_info: SystemInfo {
                environment: state.settings.env.clone(),
                version: state.settings.version.clone(),
            },
        },
    )
}
