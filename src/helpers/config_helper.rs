use crate::config::constants::{
    DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_HOST, DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
    DEFAULT_PORT, DEFAULT_PROVIDER, DEFAULT_REMOTE_TIMEOUT_SECS, DEFAULT_TEMPERATURE, MAX_CODE_LENGTH,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_enabled() -> bool {
        true
    }

    pub fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }

    pub fn default_port() -> u16 {
        DEFAULT_PORT
    }

    pub fn default_max_code_length() -> usize {
        MAX_CODE_LENGTH
    }

    pub fn default_provider() -> String {
        DEFAULT_PROVIDER.to_string()
    }

    pub fn default_model() -> String {
        DEFAULT_MODEL.to_string()
    }

    pub fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_string()
    }

    pub fn default_api_key_env() -> String {
        DEFAULT_API_KEY_ENV.to_string()
    }

    pub fn default_max_tokens() -> u32 {
        DEFAULT_MAX_TOKENS
    }

    pub fn default_temperature() -> f32 {
        DEFAULT_TEMPERATURE
    }

    pub fn default_timeout_secs() -> u64 {
        DEFAULT_REMOTE_TIMEOUT_SECS
    }
}
