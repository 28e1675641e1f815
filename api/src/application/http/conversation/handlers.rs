pub mod delete_conversation;
pub mod get_conversation;
pub mod get_conversations;
