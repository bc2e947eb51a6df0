use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeepSeekChoice {
    #[serde(default)]
    pub index: i32,
    pub message: DeepSeekChoiceMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Reply message; `content` can be null when the model stops early.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeepSeekChoiceMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}
