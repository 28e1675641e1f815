use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::get_usage_stats::{__path_get_usage_stats, get_usage_stats};
use super::handlers::reset_usage_stats::{__path_reset_usage_stats, reset_usage_stats};
use super::handlers::send_message::{__path_send_message, send_message};
use crate::application::{http::server::app_state::AppState, user_context::user_context};

#[derive(OpenApi)]
#[openapi(paths(send_message, get_usage_stats, reset_usage_stats))]
pub struct ChatApiDoc;

pub fn chat_routes(state: AppState) -> Router<AppState> {
    let conversation = Router::new()
        .route(
            &format!("{}/chat", state.args.server.root_path),
            post(send_message),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), user_context));

    Router::new()
        .route(
            &format!("{}/chat/stats", state.args.server.root_path),
            get(get_usage_stats).delete(reset_usage_stats),
        )
        .merge(conversation)
}
