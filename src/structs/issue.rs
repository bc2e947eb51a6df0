use serde::{Deserialize, Serialize};
use crate::enums::issue_type::IssueType;
use crate::enums::severity::Severity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    #[serde(rename = "type")]
    pub issue_type: IssueType,

    pub severity: Severity,

    /// 1-based; 1 when the location is unknown.
    pub line: u32,

    pub message: String,

    pub suggestion: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_snippet: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_snippet: Option<String>,
}

impl Issue {
    pub fn new(issue_type: IssueType, severity: Severity, line: u32, message: &str, suggestion: &str) -> Self {
        Self {
            issue_type,
            severity,
            line: line.max(1),
            message: message.to_string(),
            suggestion: suggestion.to_string(),
            code_snippet: None,
            fixed_snippet: None,
        }
    }
}
