use reqwest::Client;
use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::ai::deepseek::deepseek_message::DeepSeekMessage;
use crate::structs::ai::deepseek::deepseek_request::DeepSeekRequest;
use crate::structs::ai::deepseek::deepseek_response::DeepSeekResponse;
use crate::structs::config::ai_config::AiConfig;
use crate::traits::ai_provider::AiProvider;

#[derive(Clone)]
pub struct DeepSeekProvider {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl DeepSeekProvider {
    /// The client carries the configured timeout, so every request is bounded by it.
    pub fn new(api_key: String, config: &AiConfig) -> Result<Self, AiProviderError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AiProviderError::NetworkError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    fn get_deepseek_messages(&self, system_prompt: String, user_prompts: Vec<String>) -> Vec<DeepSeekMessage> {
        let mut messages = Vec::new();

        if !system_prompt.is_empty() {
            messages.push(DeepSeekMessage::system(&system_prompt));
        }

        for prompt in user_prompts {
            messages.push(DeepSeekMessage::user(&prompt));
        }

        messages
    }

    fn get_request(&self, system_prompt: String, user_prompts: Vec<String>) -> DeepSeekRequest {
        DeepSeekRequest {
            model: self.model.clone(),
            messages: self.get_deepseek_messages(system_prompt, user_prompts),
            max_tokens: Some(self.max_tokens),
            temperature: Some(self.temperature),
            stream: false,
        }
    }

    async fn make_request(&self, url: String, request_body: DeepSeekRequest) -> Result<reqwest::Response, AiProviderError> {
        log::debug!("📦 Request model: {}", request_body.model);

        self.client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(AiProviderError::from)
    }
}

#[async_trait]
impl AiProvider for DeepSeekProvider {

    async fn chat(&self, system_prompt: String, user_prompts: Vec<String>) -> Result<String, AiProviderError> {
        let url = format!("{}/chat/completions", self.base_url);
        let request_body = self.get_request(system_prompt, user_prompts);

        let response = self.make_request(url, request_body).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            log::warn!("❌ DeepSeek API Error Response ({}): {}", status, error_text);

            return Err(match status.as_u16() {
                401 => AiProviderError::AuthenticationError(error_text),
                429 => AiProviderError::ApiError(format!("Rate limit exceeded: {}", error_text)),
                _ => AiProviderError::ApiError(format!("HTTP {}: {}", status, error_text)),
            });
        }

        let body: DeepSeekResponse = response.json().await
            .map_err(|e| AiProviderError::SerializationError(e.to_string()))?;

        if let Some(usage) = &body.usage {
            log::debug!(
                "🔢 DeepSeek usage: {} prompt + {} completion tokens",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        body.first_content()
            .map(|content| content.to_string())
            .ok_or_else(|| AiProviderError::SerializationError("No content in response".to_string()))
    }

    fn name(&self) -> &'static str {
        "deepseek"
    }
}
