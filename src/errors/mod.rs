use std::fmt;
use std::error::Error as StdError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JavalyzerError {
    // Input errors
    ValidationError {
        field: String,
        value: String,
        constraint: String,
        suggestion: Option<String>,
    },

    // Remote provider errors
    RemoteUnavailable {
        operation: String,
        status_code: Option<u16>,
        reason: String,
    },
    MalformedResponse {
        reason: String,
        context: Option<String>,
    },

    // Configuration errors
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },
}

impl JavalyzerError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn config_file_error(path: &str, reason: &str) -> Self {
        Self::ConfigurationFileError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str, suggestion: Option<&str>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn remote_unavailable(operation: &str, status_code: Option<u16>, reason: &str) -> Self {
        Self::RemoteUnavailable {
            operation: operation.to_string(),
            status_code,
            reason: reason.to_string(),
        }
    }

    pub fn malformed_response(reason: &str, context: Option<&str>) -> Self {
        Self::MalformedResponse {
            reason: reason.to_string(),
            context: context.map(|s| s.to_string()),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Recoverable errors are absorbed by the heuristic fallback and never reach the caller.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::RemoteUnavailable { .. } | Self::MalformedResponse { .. })
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::ConfigurationError { .. } => ErrorSeverity::High,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::RemoteUnavailable { .. } => ErrorSeverity::Medium,
            Self::MalformedResponse { .. } => ErrorSeverity::Medium,
            Self::ValidationError { .. } => ErrorSeverity::Low,
        }
    }

    /// HTTP status used when the error is surfaced by the analysis endpoint.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ValidationError { .. } => 400,
            Self::RemoteUnavailable { .. } => 502,
            Self::MalformedResponse { .. } => 502,
            Self::ConfigurationError { .. }
            | Self::ConfigurationFileError { .. }
            | Self::SystemError { .. } => 500,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ValidationError { field, value, constraint, suggestion } => {
                let mut msg = format!("Validation error for field '{}': {} ({})", field, constraint, value);
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!(". Suggestion: {}", suggestion));
                }
                msg
            }
            Self::RemoteUnavailable { operation, status_code, reason } => {
                let mut msg = format!("Remote provider unavailable during {}: {}", operation, reason);
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {})", code));
                }
                msg
            }
            Self::MalformedResponse { reason, context } => {
                let mut msg = format!("Malformed provider response: {}", reason);
                if let Some(ctx) = context {
                    msg.push_str(&format!("\nContext: {}", ctx));
                }
                msg
            }
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!(". Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}", path, reason)
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for JavalyzerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for JavalyzerError {}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for javalyzer operations
pub type JavalyzerResult<T> = Result<T, JavalyzerError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details, print the user-facing message once, and return the process exit code.
    pub fn handle_error(error: &JavalyzerError) -> i32 {
        let severity = error.severity();

        log::debug!("[{}] {}", severity.name(), error.technical_details());
        eprintln!("{} {}", severity.emoji(), error.user_message());
        Self::exit_code(error)
    }

    /// 2 for input or configuration the user can fix, 1 for everything else.
    pub fn exit_code(error: &JavalyzerError) -> i32 {
        match error {
            JavalyzerError::ValidationError { .. }
            | JavalyzerError::ConfigurationError { .. }
            | JavalyzerError::ConfigurationFileError { .. } => 2,
            _ => 1,
        }
    }
}

impl From<std::io::Error> for JavalyzerError {
    fn from(error: std::io::Error) -> Self {
        JavalyzerError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}
