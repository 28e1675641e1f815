use axum::extract::State;
use serde::{Deserialize, Serialize};
use smartfood_core::domain::shopping_list::{entities::ShoppingList, ports::ShoppingListService};
use utoipa::ToSchema;

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    user_context::CurrentUser,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetShoppingListsResponse {
    pub data: Vec<ShoppingList>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "shopping-list",
    summary = "List shopping lists",
    params(
        ("x-user-id" = String, Header, description = "Caller user id"),
    ),
    responses(
        (status = 200, body = GetShoppingListsResponse)
    )
)]
pub async fn get_shopping_lists(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Response<GetShoppingListsResponse>, ApiError> {
    let lists = state
        .service
        .get_shopping_lists(user)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetShoppingListsResponse { data: lists }))
}
