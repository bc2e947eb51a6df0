use once_cell::sync::Lazy;
use regex::Regex;
use crate::config::constants::{
    CLEAN_SECURITY_SCORE, CRITICAL_SECURITY_PENALTY, HIGH_COMPLEXITY_THRESHOLD, HIGH_SECURITY_PENALTY,
    LONG_FILE_LINE_THRESHOLD, MAX_REPORTED_COMPLEXITY, MIN_SECURITY_SCORE,
};
use crate::enums::issue_type::IssueType;
use crate::enums::priority::Priority;
use crate::enums::severity::Severity;
use crate::helpers::text::{find_line_containing, line_count};
use crate::structs::analysis_options::AnalysisOptions;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::issue::Issue;
use crate::structs::metrics::Metrics;
use crate::structs::suggestion::Suggestion;
use crate::structs::summary::Summary;

static LOOP_KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(for|while)\b").expect("valid regex"));
static TRY_WITH_RESOURCES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\btry\s*\(").expect("valid regex"));

static COMPLEXITY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\bif\s*\(",
        r"\bfor\s*\(",
        r"\bwhile\s*\(",
        r"\bcase\s+[^:]+:",
        r"\bcatch\s*\(",
        r"&&|\|\|",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid regex"))
    .collect()
});

/// One row of the fallback rule table.
struct HeuristicRule {
    issue_type: IssueType,
    severity: Severity,
    matches: fn(&str) -> bool,
    /// Text whose first occurrence gives the reported line; `None` reports line 1.
    anchor: Option<&'static str>,
    message: &'static str,
    suggestion: &'static str,
}

const RULES: &[HeuristicRule] = &[
    HeuristicRule {
        issue_type: IssueType::Security,
        severity: Severity::Critical,
        matches: unparameterized_sql,
        anchor: Some("Statement.execute"),
        message: "SQL injection risk: Statement.execute runs a SQL string directly",
        suggestion: "Use PreparedStatement with bound parameters instead of building SQL strings",
    },
    HeuristicRule {
        issue_type: IssueType::Security,
        severity: Severity::High,
        matches: process_exec,
        anchor: Some("Runtime.getRuntime().exec("),
        message: "Command injection risk: external process started with Runtime.exec",
        suggestion: "Validate and escape all input passed to external commands, or avoid spawning a shell",
    },
    HeuristicRule {
        issue_type: IssueType::Performance,
        severity: Severity::Medium,
        matches: string_concat_in_loop,
        anchor: Some("String +="),
        message: "String concatenation inside a loop is slow",
        suggestion: "Use StringBuilder to build strings inside loops",
    },
    HeuristicRule {
        issue_type: IssueType::Bug,
        severity: Severity::High,
        matches: unguarded_close,
        anchor: Some("close()"),
        message: "Resource may not be closed when an exception is thrown",
        suggestion: "Use try-with-resources or close the resource in a finally block",
    },
    HeuristicRule {
        issue_type: IssueType::Style,
        severity: Severity::Low,
        matches: long_file,
        anchor: None,
        message: "File is too long; consider splitting it into several classes",
        suggestion: "Follow the single responsibility principle and split large files into smaller ones",
    },
];

fn unparameterized_sql(code: &str) -> bool {
    code.contains("Statement.execute") && !code.contains("PreparedStatement")
}

fn process_exec(code: &str) -> bool {
    code.contains("Runtime.getRuntime().exec(")
}

fn string_concat_in_loop(code: &str) -> bool {
    code.contains("String +=") && LOOP_KEYWORD.is_match(code)
}

fn unguarded_close(code: &str) -> bool {
    code.contains("close()")
        && !code.contains("finally")
        && !code.contains("try-with-resources")
        && !TRY_WITH_RESOURCES.is_match(code)
}

fn long_file(code: &str) -> bool {
    line_count(code) > LONG_FILE_LINE_THRESHOLD
}

/// Regex-only fallback used when the remote model is unavailable. Pure and total.
pub struct HeuristicAnalyzer;

impl HeuristicAnalyzer {

    pub fn analyze(code: &str, options: &AnalysisOptions) -> AnalysisResult {
        let issues = Self::detect_issues(code, options);
        let metrics = Self::calculate_metrics(code, &issues);
        let suggestions = Self::build_suggestions(&issues, &metrics);

        AnalysisResult::new(issues, metrics, suggestions, code)
    }

    /// Runs the enabled rules in table order.
    pub fn detect_issues(code: &str, options: &AnalysisOptions) -> Vec<Issue> {
        RULES
            .iter()
            .filter(|rule| options.is_enabled(rule.issue_type))
            .filter(|rule| (rule.matches)(code))
            .map(|rule| {
                let line = rule.anchor.map_or(1, |anchor| find_line_containing(code, anchor));
                Issue::new(rule.issue_type, rule.severity, line, rule.message, rule.suggestion)
            })
            .collect()
    }

    pub fn calculate_metrics(code: &str, issues: &[Issue]) -> Metrics {
        let complexity = Self::estimate_complexity(code);

        Metrics {
            complexity,
            lines: line_count(code) as u32,
            maintainability: Self::maintainability(complexity),
            security_score: Self::security_score(issues),
        }
    }

    /// `1 + branch-point matches`, capped.
    pub fn estimate_complexity(code: &str) -> u32 {
        let matches: usize = COMPLEXITY_PATTERNS
            .iter()
            .map(|pattern| pattern.find_iter(code).count())
            .sum();

        (1 + matches as u32).min(MAX_REPORTED_COMPLEXITY)
    }

    pub fn maintainability(complexity: u32) -> u32 {
        100u32.saturating_sub(complexity.saturating_mul(2))
    }

    pub fn security_score(issues: &[Issue]) -> u32 {
        if issues.is_empty() {
            return CLEAN_SECURITY_SCORE;
        }

        let summary = Summary::from_issues(issues);
        let penalty = (summary.critical as u32)
            .saturating_mul(CRITICAL_SECURITY_PENALTY)
            .saturating_add((summary.high as u32).saturating_mul(HIGH_SECURITY_PENALTY));

        CLEAN_SECURITY_SCORE.saturating_sub(penalty).max(MIN_SECURITY_SCORE)
    }

    fn build_suggestions(issues: &[Issue], metrics: &Metrics) -> Vec<Suggestion> {
        let mut suggestions = Vec::new();

        if !issues.is_empty() {
            suggestions.push(
                Suggestion::new(
                    "Overall recommendation",
                    "Fix critical and high severity issues first, then address performance and coding-convention findings.",
                )
                .with_priority(Priority::High),
            );
        }

        if metrics.complexity > HIGH_COMPLEXITY_THRESHOLD {
            suggestions.push(
                Suggestion::new(
                    "Reduce cyclomatic complexity",
                    "The logic is fairly complex; split it into smaller methods that each do one thing.",
                )
                .with_priority(Priority::Medium),
            );
        }

        suggestions
    }
}
