use axum::extract::{Path, State};
use smartfood_core::domain::product::{ports::ProductService, value_objects::DeleteProductInput};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/{product_id}",
    tag = "product",
    summary = "Delete product",
    description = "Removes the product from the catalog and from every list holding it.",
    params(
        ("product_id" = Uuid, Path, description = "Product id"),
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    Path(product_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_product(DeleteProductInput { product_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
