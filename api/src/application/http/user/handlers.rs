pub mod get_me;
pub mod register_user;
pub mod update_me;
