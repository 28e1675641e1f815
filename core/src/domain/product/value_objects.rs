use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct GetProductsFilter {
    pub category: Option<String>,
    pub name_contains: Option<String>,
    pub sort: Option<String>, // e.g. "-price,name"
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct GetProductInput {
    pub product_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct CreateProductInput {
    pub name: String,
    pub category: Option<String>,
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProductInput {
    pub product_id: Uuid,
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct DeleteProductInput {
    pub product_id: Uuid,
}
