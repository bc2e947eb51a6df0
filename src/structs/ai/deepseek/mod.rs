pub mod deepseek_choice;
pub mod deepseek_message;
pub mod deepseek_request;
pub mod deepseek_response;
pub mod deepseek_usage;
