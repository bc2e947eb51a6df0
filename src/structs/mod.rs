pub mod ai;
pub mod analysis_options;
pub mod analysis_result;
pub mod analyze_request;
pub mod api_response;
pub mod cli;
pub mod config;
pub mod health_response;
pub mod history_entry;
pub mod issue;
pub mod metrics;
pub mod sample_response;
pub mod suggestion;
pub mod summary;
