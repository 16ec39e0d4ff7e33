//! Generator implementation over an OpenAI-compatible completions API.

use assistant_core::{async_trait, ChatMessage, Generator, GeneratorError};
use reqwest::Client;
use tracing::{debug, info};

use crate::api_types::{ApiError, ChatCompletionRequest, ChatCompletionResponse};
use crate::config::OpenAiConfig;

/// A generator backed by an OpenAI-compatible chat-completions endpoint.
pub struct OpenAiGenerator {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiGenerator {
    /// Create a new generator with the given configuration.
    pub fn new(config: OpenAiConfig) -> Result<Self, GeneratorError> {
        let client = Client::builder().build().map_err(|e| {
            GeneratorError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        info!("OpenAiGenerator initialized with model: {}", config.model);

        Ok(Self { client, config })
    }

    /// Create a generator from environment variables.
    ///
    /// See [`OpenAiConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, GeneratorError> {
        Self::new(OpenAiConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    async fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<ChatCompletionResponse, GeneratorError> {
        let url = format!("{}/v1/chat/completions", self.config.api_url);

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        debug!("Sending completion request to {}", url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| GeneratorError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Prefer the structured error message when the body parses
            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_text) {
                return Err(GeneratorError::ProcessingFailed(format!(
                    "API error ({}): {}",
                    status.as_u16(),
                    api_error.error.message
                )));
            }

            return Err(GeneratorError::ProcessingFailed(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        response
            .json()
            .await
            .map_err(|e| GeneratorError::ProcessingFailed(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl Generator for OpenAiGenerator {
    async fn generate(&self, messages: Vec<ChatMessage>) -> Result<String, GeneratorError> {
        let completion = self.chat_completion(messages).await?;

        completion
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .ok_or_else(|| {
                GeneratorError::ProcessingFailed("response contained no content".to_string())
            })
    }

    fn name(&self) -> &str {
        "OpenAiGenerator"
    }
}
