pub mod mappers;
pub mod repositories;

pub use repositories::conversation_repository::PostgresConversationRepository;
