use axum::extract::{Path, State};
use smartfood_core::domain::shopping_list::{
    ports::ShoppingListService, value_objects::RemoveProductFromListInput,
};
use uuid::Uuid;

use crate::application::{
    http::{
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
        shopping_list::handlers::get_shopping_list::ShoppingListDetailResponse,
    },
    user_context::CurrentUser,
};

#[utoipa::path(
    delete,
    path = "/{shopping_list_id}/products/{product_id}",
    tag = "shopping-list",
    summary = "Remove product from list",
    params(
        ("shopping_list_id" = Uuid, Path, description = "Shopping list id"),
        ("product_id" = Uuid, Path, description = "Product id"),
        ("x-user-id" = String, Header, description = "Caller user id"),
    ),
    responses(
        (status = 200, body = ShoppingListDetailResponse),
        (status = 404, description = "Shopping list not found or product not on it")
    )
)]
pub async fn remove_product_from_list(
    Path((shopping_list_id, product_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Response<ShoppingListDetailResponse>, ApiError> {
    let detail = state
        .service
        .remove_product_from_list(
            user,
            RemoveProductFromListInput {
                shopping_list_id,
                product_id,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ShoppingListDetailResponse { data: detail }))
}
