use axum::extract::State;
use smartfood_core::domain::shopping_list::{
    ports::ShoppingListService, value_objects::CreateShoppingListInput,
};

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
            validators::CreateShoppingListValidator,
        },
    },
    user_context::CurrentUser,
};

#[utoipa::path(
    post,
    path = "",
    tag = "shopping-list",
    summary = "Create shopping list",
    description = "Creates an empty list. A supermarket name that is not known yet is added to the catalog.",
    params(
        ("x-user-id" = String, Header, description = "Caller user id"),
    ),
    responses(
        (status = 201, body = ShoppingListDetailResponse)
    ),
    request_body = CreateShoppingListValidator
)]
pub async fn create_shopping_list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidateJson(payload): ValidateJson<CreateShoppingListValidator>,
) -> Result<Response<ShoppingListDetailResponse>, ApiError> {
    let detail = state
        .service
        .create_shopping_list(
            user,
            CreateShoppingListInput {
                name: payload.name,
                supermarket: payload.supermarket,
                budget: payload.budget,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(ShoppingListDetailResponse { data: detail }))
}
