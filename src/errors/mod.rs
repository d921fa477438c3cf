use std::fmt;
use std::error::Error as StdError;
use serde::{Deserialize, Serialize};
use crate::enums::invocation_error::InvocationError;
use crate::enums::ocr_error::OcrError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DebuggerError {
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

    // File operation errors
    FileOperationError {
        file_path: String,
        operation: String,
        reason: String,
    },

    // User input errors
    UserInputError {
        input: String,
        expected: String,
        suggestion: String,
    },

    // Parser errors
    ParseError {
        content_type: String,
        reason: String,
        context: Option<String>,
    },

    // External service errors
    InvocationError {
        reason: String,
        message: String,
    },
    OcrError {
        reason: String,
        message: String,
    },

    // Execution probe errors
    ExecutionError {
        language: String,
        reason: String,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },
}

impl DebuggerError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn file_error(file_path: &str, operation: &str, reason: &str) -> Self {
        Self::FileOperationError {
            file_path: file_path.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn input_error(input: &str, expected: &str, suggestion: &str) -> Self {
        Self::UserInputError {
            input: input.to_string(),
            expected: expected.to_string(),
            suggestion: suggestion.to_string(),
        }
    }

    pub fn execution_error(language: &str, reason: &str) -> Self {
        Self::ExecutionError {
            language: language.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::ConfigurationError { .. } | Self::ConfigurationFileError { .. })
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InvocationError { .. } => true,
            Self::OcrError { .. } => true,
            Self::ExecutionError { .. } => true,
            Self::ParseError { .. } => true,
            Self::UserInputError { .. } => true,
            Self::FileOperationError { .. } => true,
            Self::ConfigurationError { .. } => false,
            Self::ConfigurationFileError { .. } => false,
            Self::SystemError { .. } => false,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::ConfigurationError { .. } => ErrorSeverity::High,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::FileOperationError { .. } => ErrorSeverity::Medium,
            Self::InvocationError { .. } => ErrorSeverity::Medium,
            Self::OcrError { .. } => ErrorSeverity::Medium,
            Self::ParseError { .. } => ErrorSeverity::Low,
            Self::ExecutionError { .. } => ErrorSeverity::Low,
            Self::UserInputError { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}\n💡 Check file permissions and syntax", path, reason)
            }
            Self::FileOperationError { file_path, operation, reason } => {
                format!("File operation '{}' failed for '{}': {}\n💡 Check file permissions and path", operation, file_path, reason)
            }
            Self::UserInputError { input, expected, suggestion } => {
                format!("Invalid input '{}': expected {}\n💡 {}", input, expected, suggestion)
            }
            Self::ParseError { content_type, reason, context } => {
                let mut msg = format!("Parse error in {}: {}", content_type, reason);
                if let Some(ctx) = context {
                    msg.push_str(&format!("\nContext: {}", ctx));
                }
                msg
            }
            Self::InvocationError { reason, message } => {
                format!("API Error ({}): {}\n💡 Check your API key, quota and network connection", reason, message)
            }
            Self::OcrError { reason, message } => {
                format!("OCR Error ({}): {}\n💡 Try a sharper image or paste the code instead", reason, message)
            }
            Self::ExecutionError { language, reason } => {
                format!("Execution of {} code failed: {}", language, reason)
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

impl fmt::Display for DebuggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for DebuggerError {}

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

/// Result type alias for debugger operations
pub type DebuggerResult<T> = Result<T, DebuggerError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details and print the user-facing message
    pub fn handle_error(error: &DebuggerError) {
        let severity = error.severity();

        log::debug!("[{}] {}", severity.name(), error.technical_details());
        log::error!("{} {}", severity.emoji(), error.user_message());

        if error.is_configuration() {
            log::error!("⛔ Fix the configuration before running any analysis");
        } else if error.is_recoverable() {
            log::info!("🔄 This error is recoverable - you can retry the operation");
        }
    }
}

impl From<std::io::Error> for DebuggerError {
    fn from(error: std::io::Error) -> Self {
        DebuggerError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for DebuggerError {
    fn from(error: serde_json::Error) -> Self {
        DebuggerError::ParseError {
            content_type: "JSON".to_string(),
            reason: error.to_string(),
            context: Some(format!("line {}", error.line())),
        }
    }
}

impl From<toml::de::Error> for DebuggerError {
    fn from(error: toml::de::Error) -> Self {
        DebuggerError::ParseError {
            content_type: "TOML".to_string(),
            reason: error.message().to_string(),
            context: None,
        }
    }
}

impl From<InvocationError> for DebuggerError {
    fn from(error: InvocationError) -> Self {
        DebuggerError::InvocationError {
            reason: error.reason().to_string(),
            message: error.to_string(),
        }
    }
}

impl From<OcrError> for DebuggerError {
    fn from(error: OcrError) -> Self {
        DebuggerError::OcrError {
            reason: error.reason().to_string(),
            message: error.to_string(),
        }
    }
}
