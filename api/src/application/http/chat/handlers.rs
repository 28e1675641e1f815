pub mod get_usage_stats;
pub mod reset_usage_stats;
pub mod send_message;
