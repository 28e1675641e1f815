use std::collections::HashMap;

use axum::{extract::FromRequestParts, http::request::Parts};

use super::query_params::QueryParams;
use crate::application::http::server::api_entities::api_error::ApiError;

/// Parses `filter[...]`, `sort`, `offset` and `limit` from the query string.
#[derive(Debug, Clone)]
pub struct QueryParamsExtractor(pub QueryParams);

impl<S> FromRequestParts<S> for QueryParamsExtractor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let query_map: HashMap<String, String> = serde_urlencoded::from_str(query_string)
            .map_err(|e| ApiError::BadRequest(format!("Invalid query string: {e}")))?;

        Ok(QueryParamsExtractor(QueryParams::from_query_map(&query_map)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(uri: &str) -> Result<QueryParams, ApiError> {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        QueryParamsExtractor::from_request_parts(&mut parts, &())
            .await
            .map(|QueryParamsExtractor(params)| params)
    }

    #[tokio::test]
    async fn test_extracts_encoded_brackets() {
        let params = extract("/products?filter%5Bname%5D%5Bilike%5D=pan&limit=5")
            .await
            .unwrap();
        assert_eq!(params.filter.conditions[0].field, "name");
        assert_eq!(params.pagination.limit, 5);
    }

    #[tokio::test]
    async fn test_empty_query_uses_defaults() {
        let params = extract("/products").await.unwrap();
        assert!(params.filter.is_empty());
        assert!(params.sort.is_empty());
    }
}
