use axum::extract::State;
use smartfood_core::domain::product::{ports::ProductService, value_objects::CreateProductInput};

use crate::application::http::{
    product::{handlers::get_product::ProductResponse, validators::CreateProductValidator},
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "product",
    summary = "Create product",
    description = "Adds a product to the catalog. Names are unique regardless of case.",
    responses(
        (status = 201, body = ProductResponse),
        (status = 400, description = "A product with this name already exists")
    ),
    request_body = CreateProductValidator
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateProductValidator>,
) -> Result<Response<ProductResponse>, ApiError> {
    let product = state
        .service
        .create_product(CreateProductInput {
            name: payload.name,
            category: payload.category,
            price: payload.price,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(ProductResponse { data: product }))
}
