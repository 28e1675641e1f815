use axum::extract::State;
use smartfood_core::domain::chat::ports::ChatService;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/stats",
    tag = "chat",
    summary = "Reset LLM usage counters",
    responses(
        (status = 204, description = "Counters reset")
    )
)]
pub async fn reset_usage_stats(State(state): State<AppState>) -> Result<Response<()>, ApiError> {
    state
        .service
        .reset_usage_stats()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
