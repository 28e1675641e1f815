pub mod cache;
pub mod conversation;
pub mod db;
pub mod health;
pub mod llm;
pub mod product;
pub mod shopping_list;
pub mod user;
