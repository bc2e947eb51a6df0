use serde::{Deserialize, Serialize};
use crate::structs::ai::deepseek::deepseek_usage::DeepSeekUsage;
use crate::structs::ai::deepseek::deepseek_choice::DeepSeekChoice;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeepSeekResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<DeepSeekChoice>,
    #[serde(default)]
    pub usage: Option<DeepSeekUsage>,
}

impl DeepSeekResponse {
    /// Text of the first choice, if the provider returned any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}
