pub mod ai_provider_error;
pub mod commands;
pub mod issue_type;
pub mod output_format;
pub mod priority;
pub mod severity;
