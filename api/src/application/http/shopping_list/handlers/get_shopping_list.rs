use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use smartfood_core::domain::shopping_list::{
    entities::ShoppingListDetail, ports::ShoppingListService, value_objects::GetShoppingListInput,
};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    user_context::CurrentUser,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ShoppingListDetailResponse {
    pub data: ShoppingListDetail,
}

#[utoipa::path(
    get,
    path = "/{shopping_list_id}",
    tag = "shopping-list",
    summary = "Get shopping list",
    description = "Returns the list with its supermarket, items, estimated total and whether it goes over budget.",
    params(
        ("shopping_list_id" = Uuid, Path, description = "Shopping list id"),
        ("x-user-id" = String, Header, description = "Caller user id"),
    ),
    responses(
        (status = 200, body = ShoppingListDetailResponse),
        (status = 404, description = "Shopping list not found")
    )
)]
pub async fn get_shopping_list(
    Path(shopping_list_id): Path<Uuid>,
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Response<ShoppingListDetailResponse>, ApiError> {
    let detail = state
        .service
        .get_shopping_list(user, GetShoppingListInput { shopping_list_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ShoppingListDetailResponse { data: detail }))
}
