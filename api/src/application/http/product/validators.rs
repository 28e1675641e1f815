use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductValidator {
    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: String,

    /// Guessed from the name when omitted.
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "category cannot be empty"))]
    pub category: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "price cannot be negative"))]
    pub price: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductValidator {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "name cannot be empty"))]
    pub name: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "category cannot be empty"))]
    pub category: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "price cannot be negative"))]
    pub price: Option<f64>,
}
