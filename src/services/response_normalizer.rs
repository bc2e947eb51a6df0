use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use crate::config::constants::LOG_PREVIEW_CHARS;
use crate::enums::issue_type::IssueType;
use crate::enums::priority::Priority;
use crate::enums::severity::Severity;
use crate::errors::{JavalyzerError, JavalyzerResult};
use crate::helpers::text::preview;
use crate::services::heuristic_analyzer::HeuristicAnalyzer;
use crate::structs::analysis_options::AnalysisOptions;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::issue::Issue;
use crate::structs::metrics::Metrics;
use crate::structs::suggestion::Suggestion;

static JSON_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)```json\s*(.*?)```").expect("valid regex"));

const ISSUES_FIELD: &str = "issues";
const METRICS_FIELD: &str = "metrics";
const SUGGESTIONS_FIELD: &str = "suggestions";
const DEFAULT_SUGGESTION_TITLE: &str = "Recommendation";

/// Turns a free-form model reply into an `AnalysisResult`.
pub struct ResponseNormalizer;

impl ResponseNormalizer {

    /// Body of the first ```` ```json ```` fence, else the greedy `{ ... }` span.
    pub fn extract_json_candidate(raw: &str) -> Option<&str> {
        if let Some(captures) = JSON_FENCE.captures(raw) {
            return captures.get(1).map(|m| m.as_str().trim());
        }

        let start = raw.find('{')?;
        let end = raw.rfind('}')?;
        if end < start {
            return None;
        }
        Some(&raw[start..=end])
    }

    pub fn normalize(raw: &str, code: &str, options: &AnalysisOptions) -> JavalyzerResult<AnalysisResult> {
        let context = preview(raw, LOG_PREVIEW_CHARS);

        let candidate = Self::extract_json_candidate(raw).ok_or_else(|| {
            JavalyzerError::malformed_response("no JSON object found in the reply", Some(&context))
        })?;

        let parsed: Value = serde_json::from_str(candidate).map_err(|e| {
            JavalyzerError::malformed_response(&format!("reply is not valid JSON: {}", e), Some(&context))
        })?;

        let object = parsed.as_object().ok_or_else(|| {
            JavalyzerError::malformed_response("reply JSON is not an object", Some(&context))
        })?;

        let raw_issues = object
            .get(ISSUES_FIELD)
            .and_then(Value::as_array)
            .ok_or_else(|| JavalyzerError::malformed_response("reply has no issues list", Some(&context)))?;

        let issues: Vec<Issue> = raw_issues.iter().filter_map(Self::parse_issue).collect();
        if issues.len() < raw_issues.len() {
            log::warn!(
                "⚠️ Dropped {} of {} issues with an unrecognized type or severity",
                raw_issues.len() - issues.len(),
                raw_issues.len()
            );
        }

        let suggestions = object
            .get(SUGGESTIONS_FIELD)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Self::parse_suggestion).collect())
            .unwrap_or_default();

        let fallback_metrics = HeuristicAnalyzer::analyze(code, options).metrics;
        let metrics = Self::merge_metrics(object.get(METRICS_FIELD), fallback_metrics);

        // Any summary in the reply is ignored; AnalysisResult::new recounts from the issues.
        Ok(AnalysisResult::new(issues, metrics, suggestions, code))
    }

    fn parse_issue(value: &Value) -> Option<Issue> {
        let object = value.as_object()?;

        let issue_type: IssueType = object.get("type")?.as_str()?.parse().ok()?;
        let severity: Severity = object.get("severity")?.as_str()?.parse().ok()?;
        let line = object
            .get("line")
            .and_then(as_non_negative_integer)
            .filter(|line| *line >= 1)
            .unwrap_or(1);

        let mut issue = Issue::new(
            issue_type,
            severity,
            line,
            string_field(object, &["message", "description"]).unwrap_or_default(),
            string_field(object, &["suggestion", "fix"]).unwrap_or_default(),
        );
        issue.code_snippet = string_field(object, &["codeSnippet", "code_snippet"]).map(str::to_string);
        issue.fixed_snippet = string_field(object, &["fixedSnippet", "fixed_snippet"]).map(str::to_string);
        Some(issue)
    }

    fn parse_suggestion(value: &Value) -> Option<Suggestion> {
        if let Some(text) = value.as_str() {
            return Some(Suggestion::new(DEFAULT_SUGGESTION_TITLE, text));
        }

        let object = value.as_object()?;
        let title = string_field(object, &["title", "description"]).unwrap_or_default();
        let content = string_field(object, &["content", "example"]).unwrap_or_default();
        if title.is_empty() && content.is_empty() {
            return None;
        }

        let mut suggestion = Suggestion::new(title, content);
        suggestion.priority = object
            .get("priority")
            .and_then(Value::as_str)
            .and_then(|p| p.parse::<Priority>().ok());
        Some(suggestion)
    }

    /// Takes each numeric field from the reply, falling back per field, then clamps to range.
    fn merge_metrics(value: Option<&Value>, fallback: Metrics) -> Metrics {
        let Some(object) = value.and_then(Value::as_object) else {
            return fallback;
        };

        Metrics {
            complexity: numeric_field(object, &["complexity", "cyclomaticComplexity"])
                .unwrap_or(fallback.complexity)
                .max(1),
            lines: numeric_field(object, &["lines", "linesOfCode"]).unwrap_or(fallback.lines),
            maintainability: numeric_field(object, &["maintainability"])
                .unwrap_or(fallback.maintainability)
                .min(100),
            security_score: numeric_field(object, &["securityScore", "security_score"])
                .unwrap_or(fallback.security_score)
                .min(100),
        }
    }
}

fn string_field<'a>(object: &'a Map<String, Value>, names: &[&str]) -> Option<&'a str> {
    names.iter().find_map(|name| object.get(*name).and_then(Value::as_str))
}

fn numeric_field(object: &Map<String, Value>, names: &[&str]) -> Option<u32> {
    names.iter().find_map(|name| object.get(*name).and_then(as_non_negative_integer))
}

/// Accepts JSON numbers and numeric strings; rounds fractions, rejects negatives.
fn as_non_negative_integer(value: &Value) -> Option<u32> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    if number.is_finite() && number >= 0.0 {
        Some(number.round().min(u32::MAX as f64) as u32)
    } else {
        None
    }
}
