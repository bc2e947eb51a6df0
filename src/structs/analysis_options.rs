use serde::{Deserialize, Deserializer, Serialize};
use crate::enums::issue_type::IssueType;
use crate::helpers::config_helper::ConfigHelper;

/// Which categories of checks a request asks for. Absent or null flags are on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    #[serde(default = "ConfigHelper::default_enabled", deserialize_with = "deserialize_flag")]
    pub security: bool,

    #[serde(default = "ConfigHelper::default_enabled", deserialize_with = "deserialize_flag")]
    pub performance: bool,

    #[serde(default = "ConfigHelper::default_enabled", deserialize_with = "deserialize_flag")]
    pub style: bool,

    #[serde(default = "ConfigHelper::default_enabled", deserialize_with = "deserialize_flag")]
    pub bugs: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            security: true,
            performance: true,
            style: true,
            bugs: true,
        }
    }
}

impl AnalysisOptions {
    pub fn is_enabled(&self, issue_type: IssueType) -> bool {
        match issue_type {
            IssueType::Security => self.security,
            IssueType::Performance => self.performance,
            IssueType::Style => self.style,
            IssueType::Bug => self.bugs,
        }
    }

    /// Enabled categories in prompt order: security, performance, style, bugs.
    pub fn enabled_types(&self) -> Vec<IssueType> {
        [IssueType::Security, IssueType::Performance, IssueType::Style, IssueType::Bug]
            .into_iter()
            .filter(|t| self.is_enabled(*t))
            .collect()
    }
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_flags_default_to_true() {
        let options: AnalysisOptions = serde_json::from_str(r#"{"security": false}"#).unwrap();
        assert!(!options.security);
        assert!(options.performance);
        assert!(options.style);
        assert!(options.bugs);
    }

    #[test]
    fn test_null_flag_counts_as_enabled() {
        let options: AnalysisOptions = serde_json::from_str(r#"{"style": null, "bugs": false}"#).unwrap();
        assert!(options.style);
        assert!(!options.bugs);
    }

    #[test]
    fn test_enabled_types_order() {
        let options = AnalysisOptions { performance: false, ..Default::default() };
        assert_eq!(options.enabled_types(), vec![IssueType::Security, IssueType::Style, IssueType::Bug]);
    }
}
