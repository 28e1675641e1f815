use axum::extract::State;
use serde::{Deserialize, Serialize};
use smartfood_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ReadinessResponse {
    pub data: DatabaseHealthStatus,
}

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness check",
    responses(
        (status = 200, body = ReadinessResponse),
        (status = 503, body = ReadinessResponse, description = "Database unreachable")
    )
)]
pub async fn readiness(
    State(state): State<AppState>,
) -> Result<Response<ReadinessResponse>, ApiError> {
    let status = state.service.readiness().await.map_err(ApiError::from)?;

    if status.is_up() {
        Ok(Response::OK(ReadinessResponse { data: status }))
    } else {
        Ok(Response::ServiceUnavailable(ReadinessResponse { data: status }))
    }
}
