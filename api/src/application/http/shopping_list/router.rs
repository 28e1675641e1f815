use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use utoipa::OpenApi;

use super::handlers::add_product_to_list::{__path_add_product_to_list, add_product_to_list};
use super::handlers::create_shopping_list::{__path_create_shopping_list, create_shopping_list};
use super::handlers::delete_shopping_list::{__path_delete_shopping_list, delete_shopping_list};
use super::handlers::get_shopping_list::{__path_get_shopping_list, get_shopping_list};
use super::handlers::get_shopping_lists::{__path_get_shopping_lists, get_shopping_lists};
use super::handlers::remove_product_from_list::{
    __path_remove_product_from_list, remove_product_from_list,
};
use super::handlers::save_extracted_list::{__path_save_extracted_list, save_extracted_list};
use super::handlers::set_product_checked::{__path_set_product_checked, set_product_checked};
use super::handlers::update_shopping_list::{__path_update_shopping_list, update_shopping_list};
use crate::application::{http::server::app_state::AppState, user_context::user_context};

#[derive(OpenApi)]
#[openapi(paths(
    get_shopping_lists,
    get_shopping_list,
    create_shopping_list,
    update_shopping_list,
    delete_shopping_list,
    add_product_to_list,
    remove_product_from_list,
    set_product_checked,
    save_extracted_list
))]
pub struct ShoppingListApiDoc;

pub fn shopping_list_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/shopping-lists"),
            get(get_shopping_lists).post(create_shopping_list),
        )
        .route(
            &format!("{root_path}/shopping-lists/from-chat"),
            post(save_extracted_list),
        )
        .route(
            &format!("{root_path}/shopping-lists/{{shopping_list_id}}"),
            get(get_shopping_list)
                .put(update_shopping_list)
                .delete(delete_shopping_list),
        )
        .route(
            &format!("{root_path}/shopping-lists/{{shopping_list_id}}/products"),
            post(add_product_to_list),
        )
        .route(
            &format!("{root_path}/shopping-lists/{{shopping_list_id}}/products/{{product_id}}"),
            put(set_product_checked).delete(remove_product_from_list),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), user_context))
}
