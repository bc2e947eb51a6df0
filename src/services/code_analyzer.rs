use std::sync::Arc;
use std::time::Instant;
use crate::config::constants::LOG_PREVIEW_CHARS;
use crate::enums::ai_provider_error::AiProviderError;
use crate::errors::{JavalyzerError, JavalyzerResult};
use crate::helpers::prompt_generator;
use crate::helpers::text::preview;
use crate::prompts::system_analysis_prompt::SYSTEM_ANALYSIS_PROMPT;
use crate::services::ai_providers::deepseek::DeepSeekProvider;
use crate::services::heuristic_analyzer::HeuristicAnalyzer;
use crate::services::response_normalizer::ResponseNormalizer;
use crate::structs::analysis_options::AnalysisOptions;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::config::config::Config;
use crate::traits::ai_provider::AiProvider;

/// Sequences validation, the remote model and the normalizer, falling back to the
/// heuristic analyzer whenever the remote path fails. Holds no per-request state.
#[derive(Clone)]
pub struct CodeAnalyzer {
    ai_provider: Option<Arc<dyn AiProvider>>,
    api_key_env: String,
    max_code_length: usize,
}

impl CodeAnalyzer {
    pub fn new(ai_provider: Arc<dyn AiProvider>, max_code_length: usize) -> Self {
        Self {
            ai_provider: Some(ai_provider),
            api_key_env: String::new(),
            max_code_length,
        }
    }

    /// Analyzer without a remote provider. `analyze` reports a configuration error;
    /// `analyze_offline` still works.
    pub fn unconfigured(api_key_env: &str, max_code_length: usize) -> Self {
        Self {
            ai_provider: None,
            api_key_env: api_key_env.to_string(),
            max_code_length,
        }
    }

    pub fn from_config(config: &Config) -> JavalyzerResult<Self> {
        let max_code_length = config.server.max_code_length;

        let Some(api_key) = config.ai.api_key() else {
            log::warn!(
                "🔑 {} is not set; remote analysis is disabled until it is configured",
                config.ai.api_key_env
            );
            return Ok(Self::unconfigured(&config.ai.api_key_env, max_code_length));
        };

        let provider = DeepSeekProvider::new(api_key, &config.ai)
            .map_err(|e| JavalyzerError::config_error(&e.to_string(), Some("ai"), None))?;

        log::info!("🤖 Remote analysis via {} ({})", config.ai.provider, config.ai.model);
        Ok(Self {
            ai_provider: Some(Arc::new(provider)),
            api_key_env: config.ai.api_key_env.clone(),
            max_code_length,
        })
    }

    pub fn is_remote_configured(&self) -> bool {
        self.ai_provider.is_some()
    }

    /// Rejects blank input and input longer than `max_code_length` characters.
    pub fn validate_code(&self, code: &str) -> JavalyzerResult<()> {
        if code.trim().is_empty() {
            return Err(JavalyzerError::validation_error(
                "code",
                "<empty>",
                "code must not be empty",
                Some("Paste or upload the Java source to analyze"),
            ));
        }

        let length = code.chars().count();
        if length > self.max_code_length {
            return Err(JavalyzerError::validation_error(
                "code",
                &format!("{} characters", length),
                &format!("code must be at most {} characters", self.max_code_length),
                Some("Split the source and analyze it in parts"),
            ));
        }

        Ok(())
    }

    /// Full pipeline. Only validation and configuration errors escape; remote and
    /// parse failures degrade to the heuristic result.
    pub async fn analyze(&self, code: &str, options: &AnalysisOptions) -> JavalyzerResult<AnalysisResult> {
        self.validate_code(code)?;

        let provider = self.ai_provider.as_ref().ok_or_else(|| {
            JavalyzerError::config_error(
                "remote analysis provider is not configured",
                Some(&self.api_key_env),
                Some("Set the API key environment variable and restart the service"),
            )
        })?;

        let start = Instant::now();
        log::info!("🔍 Analyzing {} characters with {}", code.chars().count(), provider.name());

        let result = match Self::analyze_remote(provider.as_ref(), code, options).await {
            Ok(result) => {
                log::info!(
                    "✅ Remote analysis found {} issues in {:.2}s",
                    result.issues.len(),
                    start.elapsed().as_secs_f64()
                );
                result
            }
            Err(e) if e.is_recoverable() => {
                log::warn!("⚠️ Falling back to heuristic analysis: {}", e.technical_details());
                HeuristicAnalyzer::analyze(code, options)
            }
            Err(e) => return Err(e),
        };

        Ok(result)
    }

    /// Heuristic analyzer only; never contacts the provider.
    pub fn analyze_offline(&self, code: &str, options: &AnalysisOptions) -> JavalyzerResult<AnalysisResult> {
        self.validate_code(code)?;
        Ok(HeuristicAnalyzer::analyze(code, options))
    }

    async fn analyze_remote(provider: &dyn AiProvider, code: &str, options: &AnalysisOptions) -> JavalyzerResult<AnalysisResult> {
        let prompt = prompt_generator::generate_prompt(code, options);
        log::debug!("📝 Prompt:\n{}", preview(&prompt, LOG_PREVIEW_CHARS));

        let reply = provider
            .chat(SYSTEM_ANALYSIS_PROMPT.to_string(), vec![prompt])
            .await
            .map_err(|e| Self::remote_error(provider.name(), e))?;

        log::debug!("📨 Raw reply: {}", preview(&reply, LOG_PREVIEW_CHARS));
        ResponseNormalizer::normalize(&reply, code, options)
    }

    fn remote_error(provider_name: &str, error: AiProviderError) -> JavalyzerError {
        JavalyzerError::remote_unavailable(
            &format!("{} chat completion", provider_name),
            error.status_code(),
            &error.to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::issue_type::IssueType;
    use crate::enums::severity::Severity;
    use crate::traits::ai_provider::MockAiProvider;

    const SQL_CODE: &str = "String sql = \"SELECT * FROM t WHERE x='\" + name + \"'\"; Statement.execute(sql);";

    fn mock_provider() -> MockAiProvider {
        let mut provider = MockAiProvider::new();
        provider.expect_name().return_const("mock");
        provider
    }

    fn analyzer(provider: MockAiProvider) -> CodeAnalyzer {
        CodeAnalyzer::new(Arc::new(provider), 10_000)
    }

    #[tokio::test]
    async fn test_remote_result_is_normalized() {
        let mut provider = mock_provider();
        provider
            .expect_chat()
            .withf(|system, prompts| {
                system == SYSTEM_ANALYSIS_PROMPT && prompts.len() == 1 && prompts[0].contains(SQL_CODE)
            })
            .times(1)
            .returning(|_, _| {
                Ok("```json\n{\"issues\": [{\"type\": \"security\", \"severity\": \"critical\", \"line\": 1, \"message\": \"SQL injection\", \"suggestion\": \"Use PreparedStatement\"}], \"summary\": {\"critical\": 5}}\n```".to_string())
            });

        let result = analyzer(provider).analyze(SQL_CODE, &AnalysisOptions::default()).await.unwrap();

        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].message, "SQL injection");
        assert_eq!(result.summary.critical, 1);
        assert_eq!(result.code, SQL_CODE);
    }

    #[tokio::test]
    async fn test_network_failure_falls_back_to_heuristics() {
        let mut provider = mock_provider();
        provider
            .expect_chat()
            .times(1)
            .returning(|_, _| Err(AiProviderError::NetworkError("connection refused".to_string())));

        let options = AnalysisOptions { performance: false, style: false, bugs: false, ..Default::default() };
        let result = analyzer(provider).analyze(SQL_CODE, &options).await.unwrap();

        assert_eq!(result, HeuristicAnalyzer::analyze(SQL_CODE, &options));
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].issue_type, IssueType::Security);
        assert_eq!(result.issues[0].severity, Severity::Critical);
    }

    #[tokio::test]
    async fn test_unparseable_reply_falls_back_to_heuristics() {
        let mut provider = mock_provider();
        provider
            .expect_chat()
            .times(1)
            .returning(|_, _| Ok("Sorry, I cannot help.".to_string()));

        let options = AnalysisOptions::default();
        let result = analyzer(provider).analyze(SQL_CODE, &options).await.unwrap();
        assert_eq!(result, HeuristicAnalyzer::analyze(SQL_CODE, &options));
    }

    #[tokio::test]
    async fn test_empty_code_is_rejected_before_remote_call() {
        let mut provider = MockAiProvider::new();
        provider.expect_chat().never();
        provider.expect_name().never();

        let result = analyzer(provider).analyze("   \n\t", &AnalysisOptions::default()).await;
        assert!(matches!(result, Err(JavalyzerError::ValidationError { .. })));
    }

    #[tokio::test]
    async fn test_oversized_code_is_rejected_before_remote_call() {
        let mut provider = MockAiProvider::new();
        provider.expect_chat().never();

        let code = "x".repeat(10_001);
        let result = analyzer(provider).analyze(&code, &AnalysisOptions::default()).await;
        assert!(matches!(result, Err(JavalyzerError::ValidationError { .. })));
    }

    #[test]
    fn test_length_limit_counts_characters() {
        let analyzer = CodeAnalyzer::unconfigured("DEEPSEEK_API_KEY", 4);
        assert!(analyzer.validate_code("日本語字").is_ok());
        assert!(analyzer.validate_code("日本語字x").is_err());
    }

    #[tokio::test]
    async fn test_missing_provider_is_a_configuration_error() {
        let analyzer = CodeAnalyzer::unconfigured("DEEPSEEK_API_KEY", 10_000);
        assert!(!analyzer.is_remote_configured());

        let result = analyzer.analyze(SQL_CODE, &AnalysisOptions::default()).await;
        match result {
            Err(JavalyzerError::ConfigurationError { field, .. }) => {
                assert_eq!(field.as_deref(), Some("DEEPSEEK_API_KEY"));
            }
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_provider_still_validates_first() {
        let analyzer = CodeAnalyzer::unconfigured("DEEPSEEK_API_KEY", 10_000);
        let result = analyzer.analyze("", &AnalysisOptions::default()).await;
        assert!(matches!(result, Err(JavalyzerError::ValidationError { .. })));
    }

    #[test]
    fn test_offline_analysis_matches_heuristics() {
        let analyzer = CodeAnalyzer::unconfigured("DEEPSEEK_API_KEY", 10_000);
        let options = AnalysisOptions::default();
        assert_eq!(
            analyzer.analyze_offline(SQL_CODE, &options).unwrap(),
            HeuristicAnalyzer::analyze(SQL_CODE, &options)
        );
        assert!(analyzer.analyze_offline("", &options).is_err());
    }
}
