use crate::enums::issue_type::IssueType;
use crate::enums::severity::Severity;
use crate::structs::analysis_options::AnalysisOptions;

/// Builds the user prompt asking the model for an `AnalysisResult`-shaped JSON document.
pub fn generate_prompt(code: &str, options: &AnalysisOptions) -> String {
    let focus = options
        .enabled_types()
        .iter()
        .map(|t| t.focus_label())
        .collect::<Vec<_>>()
        .join(", ");

    let severities = Severity::ALL
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let issue_types = IssueType::ALL
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let mut prompt = String::new();
    prompt.push_str(&format!("Analyze the following Java code. Focus on: {}.\n\n", focus));
    prompt.push_str("Code:\n```java\n");
    prompt.push_str(code);
    prompt.push_str("\n```\n\n");
    prompt.push_str("Return the analysis as a single JSON object wrapped in a ```json fenced block, with exactly these fields:\n");
    prompt.push_str(&format!(
        "1. issues: list of problems; each has type (one of: {}), severity (one of: {}), line (1-based line number), message (description), suggestion (how to fix), and optionally codeSnippet and fixedSnippet\n",
        issue_types, severities
    ));
    prompt.push_str("2. summary: number of issues per severity, as {\"critical\": n, \"high\": n, \"medium\": n, \"low\": n}\n");
    prompt.push_str("3. metrics: {\"complexity\": cyclomatic complexity, \"lines\": line count, \"maintainability\": 0-100, \"securityScore\": 0-100}\n");
    prompt.push_str("4. suggestions: list of {\"title\", \"content\", \"priority\" (high, medium or low)} with detailed fix recommendations\n\n");
    prompt.push_str(&format!(
        "Severity levels: critical (severe), high (dangerous), medium (moderate), low (minor or advisory). Issue types: {}.\n\n",
        issue_types
    ));
    prompt.push_str("Make sure the response is valid JSON.");
    prompt
}
