use serde::{Deserialize, Serialize};
use crate::structs::issue::Issue;
use crate::structs::metrics::Metrics;
use crate::structs::suggestion::Suggestion;
use crate::structs::summary::Summary;

/// The record every analysis path returns, whether it came from the model or the heuristics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub issues: Vec<Issue>,
    pub summary: Summary,
    pub metrics: Metrics,
    pub suggestions: Vec<Suggestion>,
    pub code: String,
}

impl AnalysisResult {
    /// The summary is computed from `issues` here so the counts always agree.
    pub fn new(issues: Vec<Issue>, metrics: Metrics, suggestions: Vec<Suggestion>, code: &str) -> Self {
        let summary = Summary::from_issues(&issues);
        Self {
            issues,
            summary,
            metrics,
            suggestions,
            code: code.to_string(),
        }
    }

    pub fn line_count(&self) -> u32 {
        self.metrics.lines
    }
}
