use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AiProvider: Send + Sync {

    /// Sends one chat completion and returns the text of the first choice.
    async fn chat(&self, system_prompt: String, user_prompts: Vec<String>) -> Result<String, AiProviderError>;

    fn name(&self) -> &'static str;
}
