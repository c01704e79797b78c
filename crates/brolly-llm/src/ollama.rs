//! Ollama (local model) LLM backend.

use async_trait::async_trait;

use brolly_core::error::{BrollyError, BrollyResult};
use brolly_core::traits::{GenerationOptions, Llm, LlmConfig, LlmResponse};
use brolly_core::types::{Message, MessageRole};

use ollama_rs::{
    generation::chat::{request::ChatMessageRequest, ChatMessage, MessageRole as OllamaRole},
    Ollama,
};

/// Ollama LLM backend serving a locally hosted model.
#[derive(Debug)]
pub struct OllamaLlm {
    client: Ollama,
    config: LlmConfig,
}

impl OllamaLlm {
    /// Create a new Ollama backend.
    pub fn new(config: LlmConfig) -> BrollyResult<Self> {
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| "http://localhost:11434".to_string());

        // Parse host and port from base_url
        let url = url::Url::parse(&base_url)
            .map_err(|e| BrollyError::Configuration(format!("Invalid Ollama URL: {}", e)))?;

        let host = url.host_str().unwrap_or("localhost").to_string();
        let port = url.port().unwrap_or(11434);

        let client = Ollama::new(format!("http://{}", host), port);

        let mut config = config;
        if config.model.is_empty() {
            config.model = "qwen3:0.6b".to_string();
        }

        Ok(Self { client, config })
    }

    fn message_to_ollama(msg: &Message) -> ChatMessage {
        ChatMessage {
            role: match msg.role {
                MessageRole::System => OllamaRole::System,
                MessageRole::User => OllamaRole::User,
                MessageRole::Assistant => OllamaRole::Assistant,
            },
            content: msg.content.clone(),
            tool_calls: Vec::new(),
            images: None,
        }
    }
}

#[async_trait]
impl Llm for OllamaLlm {
    async fn generate(
        &self,
        messages: &[Message],
        _options: Option<GenerationOptions>,
    ) -> BrollyResult<LlmResponse> {
        let ollama_messages: Vec<ChatMessage> =
            messages.iter().map(Self::message_to_ollama).collect();

        let request = ChatMessageRequest::new(self.config.model.clone(), ollama_messages);

        let response = self
            .client
            .send_chat_messages(request)
            .await
            .map_err(|e| BrollyError::llm(format!("Ollama API error: {}", e)))?;

        let content = Some(response.message.content.trim().to_string());

        Ok(LlmResponse { content })
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_applied() {
        let llm = OllamaLlm::new(LlmConfig::default()).unwrap();
        assert_eq!(llm.model_name(), "qwen3:0.6b");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let config = LlmConfig {
            base_url: Some("not a url".to_string()),
            ..Default::default()
        };
        let err = OllamaLlm::new(config).unwrap_err();
        assert!(matches!(err, BrollyError::Configuration(_)));
    }
}
