use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct GetConversationInput {
    pub conversation_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct DeleteConversationInput {
    pub conversation_id: Uuid,
}
