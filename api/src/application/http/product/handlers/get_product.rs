use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use smartfood_core::domain::product::{
    entities::Product, ports::ProductService, value_objects::GetProductInput,
};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ProductResponse {
    pub data: Product,
}

#[utoipa::path(
    get,
    path = "/{product_id}",
    tag = "product",
    summary = "Get product",
    params(
        ("product_id" = Uuid, Path, description = "Product id"),
    ),
    responses(
        (status = 200, body = ProductResponse),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    Path(product_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<ProductResponse>, ApiError> {
    let product = state
        .service
        .get_product(GetProductInput { product_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ProductResponse { data: product }))
}
