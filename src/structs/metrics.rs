use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    /// At least 1.
    pub complexity: u32,
    pub lines: u32,
    /// 0..=100
    pub maintainability: u32,
    /// 0..=100
    pub security_score: u32,
}
