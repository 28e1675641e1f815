use axum::extract::State;
use serde::{Deserialize, Serialize};
use smartfood_core::domain::chat::{entities::UsageStats, ports::ChatService};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UsageStatsData {
    #[serde(flatten)]
    pub stats: UsageStats,
    pub cache_hit_rate: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetUsageStatsResponse {
    pub data: UsageStatsData,
}

#[utoipa::path(
    get,
    path = "/stats",
    tag = "chat",
    summary = "LLM usage counters",
    responses(
        (status = 200, body = GetUsageStatsResponse)
    )
)]
pub async fn get_usage_stats(
    State(state): State<AppState>,
) -> Result<Response<GetUsageStatsResponse>, ApiError> {
    let stats = state.service.get_usage_stats().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetUsageStatsResponse {
        data: UsageStatsData {
            cache_hit_rate: stats.cache_hit_rate(),
            stats,
        },
    }))
}
