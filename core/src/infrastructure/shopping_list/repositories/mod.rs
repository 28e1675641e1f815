pub mod shopping_list_repository;
pub mod supermarket_repository;
