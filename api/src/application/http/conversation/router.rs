use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

use super::handlers::delete_conversation::{__path_delete_conversation, delete_conversation};
use super::handlers::get_conversation::{__path_get_conversation, get_conversation};
use super::handlers::get_conversations::{__path_get_conversations, get_conversations};
use crate::application::{http::server::app_state::AppState, user_context::user_context};

#[derive(OpenApi)]
#[openapi(paths(get_conversations, get_conversation, delete_conversation))]
pub struct ConversationApiDoc;

pub fn conversation_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/conversations", state.args.server.root_path),
            get(get_conversations),
        )
        .route(
            &format!(
                "{}/conversations/{{conversation_id}}",
                state.args.server.root_path
            ),
            get(get_conversation).delete(delete_conversation),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), user_context))
}
