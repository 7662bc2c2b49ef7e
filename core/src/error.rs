use serde::Serialize;
use thiserror::Error;

/// Unified error type for the Emotion application.
///
/// This enum provides structured error information that can be
/// serialized to JSON at the API boundary.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum AppError {
    #[error("Classification error: {message}")]
    Classification { message: String },

    #[error("Format error: {message}")]
    Format { message: String },

    #[error("Config error: {message}")]
    Config { message: String },

    #[error("IO error: {message}")]
    Io { message: String },
}

impl AppError {
    /// Create a Classification error
    pub fn classification(message: impl Into<String>) -> Self {
        Self::Classification {
            message: message.into(),
        }
    }

    /// Create a Format error
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    /// Create a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Check if this error is recoverable (user can retry or take action)
    pub fn is_recoverable(&self) -> bool {
        match self {
            // Remote classification may succeed on retry
            // IO issues may be transient
            Self::Classification { .. } | Self::Io { .. } => true,
            // A malformed result or bad config won't change on retry
            Self::Format { .. } | Self::Config { .. } => false,
        }
    }
}

// Convert from ClassifyError
impl From<crate::classify::ClassifyError> for AppError {
    fn from(err: crate::classify::ClassifyError) -> Self {
        AppError::classification(err.to_string())
    }
}

// Convert from FormatError
impl From<crate::format::FormatError> for AppError {
    fn from(err: crate::format::FormatError) -> Self {
        AppError::format(err.to_string())
    }
}

// Convert from ConfigError
impl From<crate::config::ConfigError> for AppError {
    fn from(err: crate::config::ConfigError) -> Self {
        AppError::config(err.to_string())
    }
}

// Convert from std::io::Error
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::io(err.to_string())
    }
}
