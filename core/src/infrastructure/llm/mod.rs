pub mod gemini_client;
pub mod openai_client;

use crate::domain::{
    chat::{entities::LlmCompletion, ports::LLMClient},
    common::{LLMConfig, LLMProvider, entities::app_errors::CoreError},
};

pub use gemini_client::GeminiLLMClient;
pub use openai_client::OpenAiChatClient;

/// Client selected by the `llm.provider` setting.
#[derive(Debug, Clone)]
pub enum LlmBackend {
    OpenAi(OpenAiChatClient),
    Gemini(GeminiLLMClient),
}

impl From<&LLMConfig> for LlmBackend {
    fn from(config: &LLMConfig) -> Self {
        match config.provider {
            LLMProvider::OpenAi => LlmBackend::OpenAi(OpenAiChatClient::new(
                config.base_url.clone(),
                config.api_key.clone(),
                config.model.clone(),
                config.max_tokens,
                config.temperature,
            )),
            LLMProvider::Gemini => LlmBackend::Gemini(GeminiLLMClient::new(
                config.api_key.clone(),
                config.model.clone(),
                config.max_tokens,
                config.temperature,
            )),
        }
    }
}

impl LLMClient for LlmBackend {
    async fn complete(
        &self,
        system_prompt: String,
        message: String,
    ) -> Result<LlmCompletion, CoreError> {
        match self {
            LlmBackend::OpenAi(client) => client.complete(system_prompt, message).await,
            LlmBackend::Gemini(client) => client.complete(system_prompt, message).await,
        }
    }
}
