use axum::extract::State;
use serde::{Deserialize, Serialize};
use smartfood_core::domain::product::{
    entities::Product, ports::ProductService, value_objects::GetProductsFilter,
};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::{
    query_extractor::QueryParamsExtractor,
    query_params::{FilterOperator, QueryParams},
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

const FILTER_FIELDS: &[&str] = &["category", "name"];
const SORT_FIELDS: &[&str] = &["name", "category", "price", "created_at", "updated_at"];

/// Documents the bracketed query keys read by [`QueryParamsExtractor`].
#[derive(Debug, Deserialize, IntoParams)]
#[allow(dead_code)]
pub struct GetProductsQuery {
    /// Exact category, e.g. `Lácteos`.
    #[serde(rename = "filter[category]")]
    pub category: Option<String>,

    /// Case-insensitive substring of the name.
    #[serde(rename = "filter[name][ilike]")]
    pub name: Option<String>,

    /// Comma separated fields, `-` prefix for descending. E.g. `-price,name`.
    pub sort: Option<String>,
    pub offset: Option<u64>,
    /// Defaults to 20, at most 100.
    pub limit: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetProductsResponse {
    pub data: Vec<Product>,
}

pub fn products_filter(params: QueryParams) -> Result<GetProductsFilter, ApiError> {
    if let Some(field) = params
        .filter
        .fields()
        .find(|field| !FILTER_FIELDS.contains(field))
    {
        return Err(ApiError::BadRequest(format!("Cannot filter on {field}")));
    }

    if let Some(spec) = params
        .sort
        .sorts
        .iter()
        .find(|spec| !SORT_FIELDS.contains(&spec.field.as_str()))
    {
        return Err(ApiError::BadRequest(format!("Cannot sort on {}", spec.field)));
    }

    let category = params
        .filter
        .value("category", &[FilterOperator::Eq])
        .map(str::to_string);
    let name_contains = params
        .filter
        .value(
            "name",
            &[FilterOperator::Ilike, FilterOperator::Like, FilterOperator::Eq],
        )
        .map(|value| value.trim_matches('%').to_string());

    Ok(GetProductsFilter {
        category,
        name_contains,
        sort: (!params.sort.is_empty()).then(|| params.sort.to_query_string()),
        offset: Some(params.pagination.offset),
        limit: Some(params.pagination.limit),
    })
}

#[utoipa::path(
    get,
    path = "",
    tag = "product",
    summary = "List catalog products",
    params(GetProductsQuery),
    responses(
        (status = 200, body = GetProductsResponse),
        (status = 400, description = "Unknown filter or sort field, or invalid pagination")
    )
)]
pub async fn get_products(
    State(state): State<AppState>,
    QueryParamsExtractor(params): QueryParamsExtractor,
) -> Result<Response<GetProductsResponse>, ApiError> {
    let filter = products_filter(params)?;

    let products = state
        .service
        .get_products(filter)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProductsResponse { data: products }))
}
