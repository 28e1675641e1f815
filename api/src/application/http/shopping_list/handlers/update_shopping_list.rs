use axum::extract::{Path, State};
use smartfood_core::domain::shopping_list::{
    ports::ShoppingListService, value_objects::UpdateShoppingListInput,
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
            validators::UpdateShoppingListValidator,
        },
    },
    user_context::CurrentUser,
};

#[utoipa::path(
    put,
    path = "/{shopping_list_id}",
    tag = "shopping-list",
    summary = "Update shopping list",
    params(
        ("shopping_list_id" = Uuid, Path, description = "Shopping list id"),
        ("x-user-id" = String, Header, description = "Caller user id"),
    ),
    responses(
        (status = 200, body = ShoppingListDetailResponse),
        (status = 404, description = "Shopping list not found")
    ),
    request_body = UpdateShoppingListValidator
)]
pub async fn update_shopping_list(
    Path(shopping_list_id): Path<Uuid>,
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidateJson(payload): ValidateJson<UpdateShoppingListValidator>,
) -> Result<Response<ShoppingListDetailResponse>, ApiError> {
    let detail = state
        .service
        .update_shopping_list(
            user,
            UpdateShoppingListInput {
                shopping_list_id,
                name: payload.name,
                supermarket: payload.supermarket,
                budget: payload.budget,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ShoppingListDetailResponse { data: detail }))
}
