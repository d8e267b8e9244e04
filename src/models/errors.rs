//! Centralized Error Handling Module
//!
//! Every failure in the launcher flows through [`AppError`]. Each error carries a
//! unique code so log lines can be grepped by category.
//!
//! Error codes follow pattern: CATEGORY_SPECIFIC_ERROR
//! - CFG_xxx: Credentials / configuration errors (raised before any network call)
//! - GRAPH_xxx: Graph API transport and response errors
//! - OUTPUT_xxx: Console output errors

use std::fmt;

/// Application-wide error type
#[derive(Debug)]
pub struct AppError {
    /// Unique error code for logging
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new AppError
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create AppError with source error
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Unique error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // ============================================
    // Configuration Errors
    // ============================================
    /// Credentials file missing or unreadable
    ConfigMissingCredentials,
    /// Credentials file is not the expected JSON shape
    ConfigInvalidCredentials,
    /// Invalid configuration value (env var, URL, ...)
    ConfigInvalidValue,

    // ============================================
    // Graph API Errors
    // ============================================
    /// Could not reach the Graph API host
    GraphConnectionFailed,
    /// Request exceeded the configured timeout
    GraphTimeout,
    /// Graph API answered with an error object
    GraphApiError,
    /// Response body could not be understood
    GraphInvalidResponse,

    // ============================================
    // Output Errors
    // ============================================
    /// Writing a console line failed
    OutputFailed,

    // ============================================
    // Generic Errors
    // ============================================
    /// Unknown error
    Unknown,
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigMissingCredentials => "CFG_MISSING_CREDENTIALS",
            Self::ConfigInvalidCredentials => "CFG_INVALID_CREDENTIALS",
            Self::ConfigInvalidValue => "CFG_INVALID_VALUE",

            Self::GraphConnectionFailed => "GRAPH_CONNECTION_FAILED",
            Self::GraphTimeout => "GRAPH_TIMEOUT",
            Self::GraphApiError => "GRAPH_API_ERROR",
            Self::GraphInvalidResponse => "GRAPH_INVALID_RESPONSE",

            Self::OutputFailed => "OUTPUT_FAILED",

            Self::Unknown => "UNKNOWN_ERROR",
        }
    }

    /// Errors raised while preparing the session, before any request is sent
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::ConfigMissingCredentials
                | Self::ConfigInvalidCredentials
                | Self::ConfigInvalidValue
        )
    }
}

// ============================================
// Convenience constructors
// ============================================

impl AppError {
    /// Credentials file could not be read
    pub fn missing_credentials(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::with_source(
            ErrorCode::ConfigMissingCredentials,
            format!("Cannot read credentials file {}: {}", path.display(), source),
            source,
        )
    }

    /// Credentials file has the wrong shape
    pub fn invalid_credentials(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalidCredentials, msg)
    }

    /// Bad configuration value
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalidValue, msg)
    }

    /// Graph API returned an error
    pub fn graph_api(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::GraphApiError, msg)
    }

    /// Graph API response could not be used
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::GraphInvalidResponse, msg)
    }
}

// ============================================
// Result type alias
// ============================================

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;

// ============================================
// Conversion from common error types
// ============================================

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        Self::new(ErrorCode::Unknown, err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        let message = format!("Console write failed: {}", err);
        Self::with_source(ErrorCode::OutputFailed, message, err)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::new(ErrorCode::GraphTimeout, format!("Request timeout: {}", err))
        } else if err.is_connect() {
            Self::new(
                ErrorCode::GraphConnectionFailed,
                format!("Connection failed: {}", err),
            )
        } else if err.is_decode() {
            Self::new(ErrorCode::GraphInvalidResponse, err.to_string())
        } else {
            Self::new(ErrorCode::Unknown, err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        let message = format!("JSON error: {}", err);
        Self::with_source(ErrorCode::GraphInvalidResponse, message, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = AppError::graph_api("Invalid OAuth access token.");
        assert_eq!(err.code, ErrorCode::GraphApiError);
        assert_eq!(err.code_str(), "GRAPH_API_ERROR");
        assert_eq!(err.to_string(), "[GRAPH_API_ERROR] Invalid OAuth access token.");
    }

    #[test]
    fn test_config_codes() {
        assert!(ErrorCode::ConfigMissingCredentials.is_config());
        assert!(ErrorCode::ConfigInvalidCredentials.is_config());
        assert!(!ErrorCode::GraphApiError.is_config());
        assert!(!ErrorCode::OutputFailed.is_config());
    }

    #[test]
    fn test_missing_credentials_keeps_source() {
        use std::error::Error;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = AppError::missing_credentials(std::path::Path::new("config/x.json"), io);
        assert_eq!(err.code, ErrorCode::ConfigMissingCredentials);
        assert!(err.message.contains("config/x.json"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_json_error_maps_to_invalid_response() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AppError = json_err.into();
        assert_eq!(err.code, ErrorCode::GraphInvalidResponse);
    }
}
