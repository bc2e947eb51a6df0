use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AiProviderError {
    #[error("DeepSeek API Error: {0}")]
    ApiError(String),

    #[error("Network Error: {0}")]
    NetworkError(String),

    #[error("Timeout Error: {0}")]
    TimeoutError(String),

    #[error("Serialization Error: {0}")]
    SerializationError(String),

    #[error("Authentication Error: {0}")]
    AuthenticationError(String),
}

impl AiProviderError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AiProviderError::AuthenticationError(_) => Some(401),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AiProviderError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            AiProviderError::TimeoutError(error.to_string())
        } else if error.is_decode() {
            AiProviderError::SerializationError(error.to_string())
        } else {
            AiProviderError::NetworkError(error.to_string())
        }
    }
}
