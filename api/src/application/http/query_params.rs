use std::collections::HashMap;
use std::str::FromStr;

use crate::application::http::server::api_entities::api_error::ApiError;

pub const DEFAULT_LIMIT: u64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Eq,
    Like,
    Ilike,
}

impl FromStr for FilterOperator {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(FilterOperator::Eq),
            "like" => Ok(FilterOperator::Like),
            "ilike" => Ok(FilterOperator::Ilike),
            other => Err(ApiError::BadRequest(format!(
                "Unsupported filter operator: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCondition {
    pub field: String,
    pub operator: FilterOperator,
    pub value: String,
}

#[derive(Debug, Clone, Default)]
pub struct FilterParams {
    pub conditions: Vec<FilterCondition>,
}

impl FilterParams {
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.conditions.iter().map(|condition| condition.field.as_str())
    }

    /// Value of the condition on `field` using one of `operators`.
    pub fn value(&self, field: &str, operators: &[FilterOperator]) -> Option<&str> {
        self.conditions
            .iter()
            .find(|condition| condition.field == field && operators.contains(&condition.operator))
            .map(|condition| condition.value.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Default)]
pub struct SortParams {
    pub sorts: Vec<SortSpec>,
}

impl SortParams {
    pub fn is_empty(&self) -> bool {
        self.sorts.is_empty()
    }

    /// Parses `field1,-field2`; a leading `-` sorts descending.
    pub fn from_string(s: &str) -> Self {
        let sorts = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| match part.strip_prefix('-') {
                Some(field) => SortSpec {
                    field: field.to_string(),
                    direction: SortDirection::Desc,
                },
                None => SortSpec {
                    field: part.to_string(),
                    direction: SortDirection::Asc,
                },
            })
            .collect();

        Self { sorts }
    }

    pub fn to_query_string(&self) -> String {
        self.sorts
            .iter()
            .map(|spec| match spec.direction {
                SortDirection::Asc => spec.field.clone(),
                SortDirection::Desc => format!("-{}", spec.field),
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Offset and limit as given. Range checks happen in the service so the
/// error reads the same whatever the entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationParams {
    pub offset: u64,
    pub limit: u64,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pub filter: FilterParams,
    pub sort: SortParams,
    pub pagination: PaginationParams,
}

fn parse_number(key: &str, value: &str) -> Result<u64, ApiError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| ApiError::BadRequest(format!("{key} must be a non-negative integer")))
}

impl QueryParams {
    /// Reads `filter[field]=value`, `filter[field][op]=value`, `sort`,
    /// `offset` and `limit`. Other keys are ignored.
    pub fn from_query_map(query_map: &HashMap<String, String>) -> Result<Self, ApiError> {
        let mut params = QueryParams::default();

        for (key, value) in query_map {
            if let Some(filter_key) = key.strip_prefix("filter[") {
                let Some(end_bracket) = filter_key.find(']') else {
                    return Err(ApiError::BadRequest(format!("Malformed filter: {key}")));
                };
                let field = filter_key[..end_bracket].to_string();
                let remaining = &filter_key[end_bracket + 1..];

                let operator = if remaining.is_empty() {
                    FilterOperator::Eq
                } else if let Some(operator) = remaining
                    .strip_prefix('[')
                    .and_then(|rest| rest.strip_suffix(']'))
                {
                    operator.parse()?
                } else {
                    return Err(ApiError::BadRequest(format!("Malformed filter: {key}")));
                };

                params.filter.conditions.push(FilterCondition {
                    field,
                    operator,
                    value: value.clone(),
                });
            } else if key == "sort" {
                params.sort = SortParams::from_string(value);
            } else if key == "offset" {
                params.pagination.offset = parse_number(key, value)?;
            } else if key == "limit" {
                params.pagination.limit = parse_number(key, value)?;
            }
        }

        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_filter_parse_simple() {
        let params = QueryParams::from_query_map(&map(&[("filter[category]", "Lácteos")])).unwrap();
        assert_eq!(
            params.filter.conditions,
            vec![FilterCondition {
                field: "category".to_string(),
                operator: FilterOperator::Eq,
                value: "Lácteos".to_string(),
            }]
        );
    }

    #[test]
    fn test_filter_parse_with_operator() {
        let params = QueryParams::from_query_map(&map(&[("filter[name][ilike]", "leche")])).unwrap();
        assert_eq!(
            params
                .filter
                .value("name", &[FilterOperator::Ilike, FilterOperator::Like]),
            Some("leche")
        );
        assert_eq!(params.filter.value("name", &[FilterOperator::Eq]), None);
    }

    #[test]
    fn test_unknown_operator_is_rejected() {
        let result = QueryParams::from_query_map(&map(&[("filter[price][gte]", "2")]));
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn test_sort_parse() {
        let params = QueryParams::from_query_map(&map(&[("sort", "-price, name")])).unwrap();
        assert_eq!(params.sort.sorts.len(), 2);
        assert_eq!(params.sort.sorts[0].field, "price");
        assert_eq!(params.sort.sorts[0].direction, SortDirection::Desc);
        assert_eq!(params.sort.sorts[1].direction, SortDirection::Asc);
        assert_eq!(params.sort.to_query_string(), "-price,name");
    }

    #[test]
    fn test_pagination_parse() {
        let params =
            QueryParams::from_query_map(&map(&[("offset", "10"), ("limit", "50")])).unwrap();
        assert_eq!(params.pagination, PaginationParams { offset: 10, limit: 50 });

        let defaults = QueryParams::from_query_map(&HashMap::new()).unwrap();
        assert_eq!(defaults.pagination.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn test_negative_pagination_is_rejected() {
        assert!(QueryParams::from_query_map(&map(&[("offset", "-1")])).is_err());
        assert!(QueryParams::from_query_map(&map(&[("limit", "many")])).is_err());
    }
}
