use axum::extract::State;
use serde::{Deserialize, Serialize};
use smartfood_core::domain::shopping_list::{entities::Supermarket, ports::ShoppingListService};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetSupermarketsResponse {
    pub data: Vec<Supermarket>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "supermarket",
    summary = "List supermarkets",
    description = "Supermarkets are created on first mention, from chat replies or list edits.",
    responses(
        (status = 200, body = GetSupermarketsResponse)
    )
)]
pub async fn get_supermarkets(
    State(state): State<AppState>,
) -> Result<Response<GetSupermarketsResponse>, ApiError> {
    let supermarkets = state
        .service
        .get_supermarkets()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetSupermarketsResponse { data: supermarkets }))
}
