use axum::extract::State;
use serde::{Deserialize, Serialize};
use smartfood_core::domain::health::ports::HealthCheckService;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthStatus {
    pub status: String,
    /// Database round trip in milliseconds.
    pub duration_ms: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthResponse {
    pub data: HealthStatus,
}

#[utoipa::path(
    get,
    path = "",
    tag = "health",
    summary = "Liveness check",
    description = "Pings the database and reports how long the round trip took.",
    responses(
        (status = 200, body = HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> Result<Response<HealthResponse>, ApiError> {
    let duration_ms = state.service.health().await.map_err(ApiError::from)?;

    Ok(Response::OK(HealthResponse {
        data: HealthStatus {
            status: "UP".to_string(),
            duration_ms,
        },
    }))
}
