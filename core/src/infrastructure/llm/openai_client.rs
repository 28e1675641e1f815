use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    chat::{entities::LlmCompletion, ports::LLMClient},
    common::entities::app_errors::CoreError,
};

/// Client for any endpoint speaking the OpenAI chat completions protocol.
#[derive(Debug, Clone)]
pub struct OpenAiChatClient {
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<RequestMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct RequestMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    #[serde(default)]
    total_tokens: u32,
}

impl ChatCompletionResponse {
    fn into_completion(self) -> Result<LlmCompletion, CoreError> {
        let tokens_used = self.usage.map(|usage| usage.total_tokens).unwrap_or(0);

        let content = self
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))?;

        Ok(LlmCompletion {
            content,
            tokens_used,
        })
    }
}

impl OpenAiChatClient {
    pub fn new(
        base_url: String,
        api_key: String,
        model: String,
        max_tokens: u32,
        temperature: f32,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
            max_tokens,
            temperature,
            client: Client::new(),
        }
    }
}

impl LLMClient for OpenAiChatClient {
    async fn complete(
        &self,
        system_prompt: String,
        message: String,
    ) -> Result<LlmCompletion, CoreError> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                RequestMessage {
                    role: "system",
                    content: system_prompt,
                },
                RequestMessage {
                    role: "user",
                    content: message,
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Chat completion request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Chat completion error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let body: ChatCompletionResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse chat completion response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        body.into_completion()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_with_usage() {
        let body: ChatCompletionResponse = serde_json::from_str(
            r#"{
                "id": "chatcmpl-1",
                "choices": [{"index": 0, "message": {"role": "assistant", "content": "Hola"}}],
                "usage": {"prompt_tokens": 10, "completion_tokens": 3, "total_tokens": 13}
            }"#,
        )
        .unwrap();

        let completion = body.into_completion().unwrap();
        assert_eq!(completion.content, "Hola");
        assert_eq!(completion.tokens_used, 13);
    }

    #[test]
    fn test_missing_usage_counts_zero_tokens() {
        let body: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": "Hola"}}]}"#).unwrap();
        assert_eq!(body.into_completion().unwrap().tokens_used, 0);
    }

    #[test]
    fn test_null_content_is_an_error() {
        let body: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": null}}]}"#).unwrap();
        assert!(body.into_completion().is_err());
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = OpenAiChatClient::new(
            "https://api.openai.com/v1/".to_string(),
            "key".to_string(),
            "gpt-4o-mini".to_string(),
            500,
            0.7,
        );
        assert_eq!(client.base_url, "https://api.openai.com/v1");
    }
}
