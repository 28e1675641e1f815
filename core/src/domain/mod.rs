pub mod chat;
pub mod common;
pub mod conversation;
pub mod health;
pub mod product;
pub mod shopping_list;
pub mod user;
