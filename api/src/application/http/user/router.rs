use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::get_me::{__path_get_me, get_me};
use super::handlers::register_user::{__path_register_user, register_user};
use super::handlers::update_me::{__path_update_me, update_me};
use crate::application::{http::server::app_state::AppState, user_context::user_context};

#[derive(OpenApi)]
#[openapi(paths(register_user, get_me, update_me))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    let me = Router::new()
        .route(
            &format!("{}/users/me", state.args.server.root_path),
            get(get_me).put(update_me),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), user_context));

    Router::new()
        .route(
            &format!("{}/users", state.args.server.root_path),
            post(register_user),
        )
        .merge(me)
}
