use axum::extract::{Path, State};
use smartfood_core::domain::shopping_list::{
    ports::ShoppingListService, value_objects::DeleteShoppingListInput,
};
use uuid::Uuid;

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    user_context::CurrentUser,
};

#[utoipa::path(
    delete,
    path = "/{shopping_list_id}",
    tag = "shopping-list",
    summary = "Delete shopping list",
    params(
        ("shopping_list_id" = Uuid, Path, description = "Shopping list id"),
        ("x-user-id" = String, Header, description = "Caller user id"),
    ),
    responses(
        (status = 204, description = "Shopping list deleted"),
        (status = 404, description = "Shopping list not found")
    )
)]
pub async fn delete_shopping_list(
    Path(shopping_list_id): Path<Uuid>,
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_shopping_list(user, DeleteShoppingListInput { shopping_list_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
