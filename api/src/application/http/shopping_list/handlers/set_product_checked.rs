use axum::extract::{Path, State};
use smartfood_core::domain::shopping_list::{
    ports::ShoppingListService, value_objects::SetProductCheckedInput,
};
use uuid::Uuid;

use crate::application::{
    http::{
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
        shopping_list::{
            handlers::get_shopping_list::ShoppingListDetailResponse,
            validators::SetProductCheckedValidator,
        },
    },
    user_context::CurrentUser,
};

#[utoipa::path(
    put,
    path = "/{shopping_list_id}/products/{product_id}",
    tag = "shopping-list",
    summary = "Tick a product on the list",
    params(
        ("shopping_list_id" = Uuid, Path, description = "Shopping list id"),
        ("product_id" = Uuid, Path, description = "Product id"),
        ("x-user-id" = String, Header, description = "Caller user id"),
    ),
    responses(
        (status = 200, body = ShoppingListDetailResponse),
        (status = 404, description = "Shopping list not found or product not on it")
    ),
    request_body = SetProductCheckedValidator
)]
pub async fn set_product_checked(
    Path((shopping_list_id, product_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidateJson(payload): ValidateJson<SetProductCheckedValidator>,
) -> Result<Response<ShoppingListDetailResponse>, ApiError> {
    let detail = state
        .service
        .set_product_checked(
            user,
            SetProductCheckedInput {
                shopping_list_id,
                product_id,
                checked: payload.checked,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ShoppingListDetailResponse { data: detail }))
}
