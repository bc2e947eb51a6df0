use serde::{Deserialize, Serialize};
use crate::structs::analysis_options::AnalysisOptions;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub sample: Option<String>,

    #[serde(default)]
    pub options: Option<AnalysisOptions>,
}
