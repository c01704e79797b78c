//! OpenRouter (hosted chat-completions) LLM backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use brolly_core::error::{BrollyError, BrollyResult};
use brolly_core::traits::{GenerationOptions, Llm, LlmConfig, LlmResponse};
use brolly_core::types::{Message, MessageRole};

const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
const DEFAULT_MODEL: &str = "tngtech/deepseek-r1t2-chimera:free";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// OpenRouter LLM backend.
pub struct OpenRouterLlm {
    client: Client,
    config: LlmConfig,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl OpenRouterLlm {
    /// Create a new OpenRouter backend.
    pub fn new(config: LlmConfig) -> BrollyResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("OPENROUTER_API_KEY").ok())
            .ok_or_else(|| {
                BrollyError::Configuration("OpenRouter API key not found. Set OPENROUTER_API_KEY environment variable or provide api_key in config.".to_string())
            })?;

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            "Authorization",
            format!("Bearer {}", api_key)
                .parse()
                .map_err(|_| BrollyError::Configuration("Invalid API key format".to_string()))?,
        );
        headers.insert(
            "content-type",
            "application/json"
                .parse()
                .map_err(|_| BrollyError::Configuration("Invalid content type".to_string()))?,
        );
        // OpenRouter attribution headers, used for their dashboard ranking.
        headers.insert(
            "HTTP-Referer",
            "http://localhost"
                .parse()
                .map_err(|_| BrollyError::Configuration("Invalid referer header".to_string()))?,
        );
        headers.insert(
            "X-Title",
            "brolly"
                .parse()
                .map_err(|_| BrollyError::Configuration("Invalid title header".to_string()))?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                BrollyError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| OPENROUTER_API_URL.to_string());

        let mut config = config;
        if config.model.is_empty() {
            config.model = DEFAULT_MODEL.to_string();
        }

        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    fn message_to_wire(msg: &Message) -> ChatMessage {
        ChatMessage {
            role: match msg.role {
                MessageRole::System => "system".to_string(),
                MessageRole::User => "user".to_string(),
                MessageRole::Assistant => "assistant".to_string(),
            },
            content: msg.content.clone(),
        }
    }
}

#[async_trait]
impl Llm for OpenRouterLlm {
    async fn generate(
        &self,
        messages: &[Message],
        options: Option<GenerationOptions>,
    ) -> BrollyResult<LlmResponse> {
        let options = options.unwrap_or_default();

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: messages.iter().map(Self::message_to_wire).collect(),
            temperature: options.temperature.unwrap_or(self.config.temperature),
            max_tokens: options.max_tokens.unwrap_or(self.config.max_tokens),
        };

        let response = self
            .client
            .post(&self.base_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| BrollyError::llm(format!("OpenRouter request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BrollyError::llm(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            let error: Result<ApiError, _> = serde_json::from_str(&body);
            let message = error
                .map(|e| e.error.message)
                .unwrap_or_else(|_| body.clone());
            return Err(BrollyError::llm(format!(
                "OpenRouter API error ({}): {}",
                status, message
            )));
        }

        let response: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| BrollyError::llm(format!("Failed to parse response: {}", e)))?;

        let content = response
            .choices
            .first()
            .and_then(|c| c.message.content.as_ref())
            .map(|c| c.trim().to_string());

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
    fn test_missing_api_key_is_configuration_error() {
        // No api_key in config; make sure the env var can't leak in.
        let config = LlmConfig {
            api_key: None,
            ..Default::default()
        };
        if std::env::var("OPENROUTER_API_KEY").is_ok() {
            return;
        }
        let err = OpenRouterLlm::new(config).unwrap_err();
        assert!(matches!(err, BrollyError::Configuration(_)));
    }

    #[test]
    fn test_default_model_applied() {
        let config = LlmConfig {
            api_key: Some("sk-test".to_string()),
            ..Default::default()
        };
        let llm = OpenRouterLlm::new(config).unwrap();
        assert_eq!(llm.model_name(), DEFAULT_MODEL);
    }

    #[test]
    fn test_wire_roles() {
        let msg = Message::system("be helpful");
        assert_eq!(OpenRouterLlm::message_to_wire(&msg).role, "system");
        let msg = Message::user("hi");
        assert_eq!(OpenRouterLlm::message_to_wire(&msg).role, "user");
    }
}
