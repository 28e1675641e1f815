use axum::extract::{Path, State};
use smartfood_core::domain::shopping_list::{
    ports::ShoppingListService, value_objects::AddProductToListInput,
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
            validators::AddProductToListValidator,
        },
    },
    user_context::CurrentUser,
};

#[utoipa::path(
    post,
    path = "/{shopping_list_id}/products",
    tag = "shopping-list",
    summary = "Add product to list",
    description = "Adds a product by id or by name. Adding a product already on the list replaces its quantity and price.",
    params(
        ("shopping_list_id" = Uuid, Path, description = "Shopping list id"),
        ("x-user-id" = String, Header, description = "Caller user id"),
    ),
    responses(
        (status = 200, body = ShoppingListDetailResponse),
        (status = 400, description = "Neither product_id nor name given"),
        (status = 404, description = "Shopping list or product not found")
    ),
    request_body = AddProductToListValidator
)]
pub async fn add_product_to_list(
    Path(shopping_list_id): Path<Uuid>,
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidateJson(payload): ValidateJson<AddProductToListValidator>,
) -> Result<Response<ShoppingListDetailResponse>, ApiError> {
    if payload.product_id.is_none() && payload.name.is_none() {
        return Err(ApiError::BadRequest(
            "Either product_id or name is required".to_string(),
        ));
    }

    let detail = state
        .service
        .add_product_to_list(
            user,
            AddProductToListInput {
                shopping_list_id,
                product_id: payload.product_id,
                name: payload.name,
                category: payload.category,
                quantity: payload.quantity,
                price: payload.price,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ShoppingListDetailResponse { data: detail }))
}
