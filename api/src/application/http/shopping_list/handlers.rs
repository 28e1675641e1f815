pub mod add_product_to_list;
pub mod create_shopping_list;
pub mod delete_shopping_list;
pub mod get_shopping_list;
pub mod get_shopping_lists;
pub mod remove_product_from_list;
pub mod save_extracted_list;
pub mod set_product_checked;
pub mod update_shopping_list;
