use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::structs::analysis_options::AnalysisOptions;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::summary::Summary;

/// Advisory record the browser may append to its local history log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub code_length: usize,
    pub issues_count: usize,
    pub summary: Summary,
    pub lines: u32,
    pub options: AnalysisOptions,
}

impl HistoryEntry {
    pub fn from_result(result: &AnalysisResult, options: &AnalysisOptions) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            code_length: result.code.chars().count(),
            issues_count: result.issues.len(),
            summary: result.summary,
            lines: result.line_count(),
            options: *options,
        }
    }
}
