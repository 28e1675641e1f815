pub mod chat;
pub mod conversation;
pub mod health;
pub mod product;
pub mod query_extractor;
pub mod query_params;
pub mod server;
pub mod shopping_list;
pub mod supermarket;
pub mod user;
