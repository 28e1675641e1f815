use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::health::{__path_health, health};
use super::handlers::readiness::{__path_readiness, readiness};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(health, readiness))]
pub struct HealthApiDoc;

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{root_path}/health"), get(health))
        .route(&format!("{root_path}/health/ready"), get(readiness))
}
