use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::get_supermarkets::{__path_get_supermarkets, get_supermarkets};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_supermarkets))]
pub struct SupermarketApiDoc;

pub fn supermarket_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/supermarkets", state.args.server.root_path),
        get(get_supermarkets),
    )
}
