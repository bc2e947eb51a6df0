use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SampleResponse {
    pub code: String,
    #[serde(rename = "type")]
    pub sample_type: String,
}
