use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{JavalyzerError, JavalyzerResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# Javalyzer Configuration

[server]
# Address the analysis endpoint binds to
host = "127.0.0.1"
port = 3000

# Longest accepted source text, in characters
max_code_length = 10000

# Optional directory with the browser front-end, served at "/"
# static_dir = "./public"

# AI Configuration
[ai]
provider = "deepseek"
model = "deepseek-coder"
base_url = "https://api.deepseek.com/v1"

# Name of the environment variable holding the API key
api_key_env = "DEEPSEEK_API_KEY"

max_tokens = 4000
temperature = 0.1

# A single attempt is made per analysis; on timeout the heuristic analyzer answers instead
timeout_secs = 30
"#;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Loads the config from `path`, or from the default location where a missing file yields defaults.
    pub fn load(path: Option<&Path>) -> JavalyzerResult<Config> {
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_config_path);

        if !config_path.exists() {
            if path.is_some() {
                return Err(JavalyzerError::config_file_error(
                    &config_path.display().to_string(),
                    "file does not exist",
                ));
            }
            log::debug!("No config file at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", config_path.display());
        let content = fs::read_to_string(&config_path)
            .map_err(|e| JavalyzerError::config_file_error(&config_path.display().to_string(), &e.to_string()))?;

        toml::from_str(&content)
            .map_err(|e| JavalyzerError::config_file_error(&config_path.display().to_string(), e.message()))
    }

    pub fn create_sample_config(path: Option<&Path>) -> JavalyzerResult<PathBuf> {
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_config_path);

        if config_path.exists() {
            return Err(JavalyzerError::config_file_error(
                &config_path.display().to_string(),
                "file already exists",
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_path, SAMPLE_CONFIG)?;
        log::info!("✅ Created sample config at: {}", config_path.display());
        Ok(config_path)
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.server.port == 0 {
            errors.push("server.port must be greater than 0".to_string());
        }

        if config.server.max_code_length == 0 {
            errors.push("server.max_code_length must be greater than 0".to_string());
        }

        if let Some(static_dir) = &config.server.static_dir {
            if !Path::new(static_dir).is_dir() {
                errors.push(format!("server.static_dir is not a directory: {}", static_dir));
            }
        }

        if config.ai.provider != "deepseek" {
            errors.push(format!("ai.provider '{}' is not supported (expected \"deepseek\")", config.ai.provider));
        }

        if !(config.ai.base_url.starts_with("http://") || config.ai.base_url.starts_with("https://")) {
            errors.push(format!("ai.base_url must be an http(s) URL: {}", config.ai.base_url));
        }

        if config.ai.api_key_env.trim().is_empty() {
            errors.push("ai.api_key_env must name an environment variable".to_string());
        }

        if config.ai.max_tokens == 0 {
            errors.push("ai.max_tokens must be greater than 0".to_string());
        }

        if !(0.0..=2.0).contains(&config.ai.temperature) {
            errors.push(format!("ai.temperature must be within 0.0..=2.0, got {}", config.ai.temperature));
        }

        if config.ai.timeout_secs == 0 {
            errors.push("ai.timeout_secs must be greater than 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let result = ConfigManager::load(Some(&path));
        assert!(matches!(result, Err(JavalyzerError::ConfigurationFileError { .. })));
    }

    #[test]
    fn test_sample_config_round_trips_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let written = ConfigManager::create_sample_config(Some(&path)).unwrap();
        assert_eq!(written, path);

        let config = ConfigManager::load(Some(&path)).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.max_code_length, 10_000);
        assert_eq!(config.ai.model, "deepseek-coder");
        assert_eq!(config.ai.timeout_secs, 30);
        assert!(ConfigManager::validate_config(&config).is_ok());
    }

    #[test]
    fn test_create_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[server]\nport = 8080\n").unwrap();

        assert!(ConfigManager::create_sample_config(Some(&path)).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "[server]\nport = 8080\n");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ai]\nmodel = \"deepseek-chat\"\ntimeout_secs = 5\n").unwrap();

        let config = ConfigManager::load(Some(&path)).unwrap();
        assert_eq!(config.ai.model, "deepseek-chat");
        assert_eq!(config.ai.timeout_secs, 5);
        assert_eq!(config.ai.api_key_env, "DEEPSEEK_API_KEY");
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_invalid_toml_is_a_config_file_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[server\nport = ").unwrap();

        let result = ConfigManager::load(Some(&path));
        assert!(matches!(result, Err(JavalyzerError::ConfigurationFileError { .. })));
    }

    #[test]
    fn test_validate_reports_every_problem() {
        let mut config = Config::default();
        config.server.port = 0;
        config.ai.temperature = 3.5;
        config.ai.base_url = "ftp://example.com".to_string();

        let errors = ConfigManager::validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.contains("server.port")));
        assert!(errors.iter().any(|e| e.contains("ai.temperature")));
        assert!(errors.iter().any(|e| e.contains("ai.base_url")));
    }
}
