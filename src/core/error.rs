//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unknown severity letter or name
    #[error("Invalid severity: '{0}'")]
    InvalidSeverity(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    pub fn invalid_severity(input: impl Into<String>) -> Self {
        LoggerError::InvalidSeverity(input.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
