use axum::extract::{Path, State};
use smartfood_core::domain::product::{ports::ProductService, value_objects::UpdateProductInput};
use uuid::Uuid;

use crate::application::http::{
    product::{handlers::get_product::ProductResponse, validators::UpdateProductValidator},
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    put,
    path = "/{product_id}",
    tag = "product",
    summary = "Update product",
    params(
        ("product_id" = Uuid, Path, description = "Product id"),
    ),
    responses(
        (status = 200, body = ProductResponse),
        (status = 404, description = "Product not found")
    ),
    request_body = UpdateProductValidator
)]
pub async fn update_product(
    Path(product_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateProductValidator>,
) -> Result<Response<ProductResponse>, ApiError> {
    let product = state
        .service
        .update_product(UpdateProductInput {
            product_id,
            name: payload.name,
            category: payload.category,
            price: payload.price,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ProductResponse { data: product }))
}
