use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct SendMessageInput {
    /// Continue this conversation; a new one is started when absent.
    pub conversation_id: Option<Uuid>,
    pub message: String,
}
