//! Centralized Error Handling Module
//!
//! Every failure carries a unique error code for logging and monitoring.
//!
//! Error codes follow pattern: CATEGORY_SPECIFIC_ERROR
//! - EXPLORER_xxx: outbound explorer API errors
//! - TX_xxx: transaction lookup errors
//! - API_xxx: inbound API errors
//! - CFG_xxx: configuration errors
//! - EXPORT_xxx: spreadsheet export errors

use std::fmt;

/// Application-wide error type
#[derive(Debug)]
pub struct AppError {
    /// Unique error code for logging/monitoring
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

/// Unique error codes for monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // ============================================
    // Explorer Errors
    // ============================================
    /// Explorer connection failed
    ExplorerConnectionFailed,
    /// Explorer request timed out
    ExplorerTimeout,
    /// Explorer returned a non-success HTTP status
    ExplorerHttpStatus,
    /// Explorer response body did not parse
    ExplorerInvalidResponse,

    // ============================================
    // Transaction Errors
    // ============================================
    /// Identifier shape matches no supported network
    TxUnrecognizedIdentifier,
    /// Explorer does not know the identifier
    TxNotFound,
    /// Unsupported network name in request
    TxUnsupportedNetwork,

    // ============================================
    // API Errors
    // ============================================
    /// Invalid request format
    ApiBadRequest,
    /// Rate limit exceeded
    ApiRateLimited,
    /// Internal server error
    ApiInternalError,
    /// Resource not found
    ApiNotFound,

    // ============================================
    // Configuration Errors
    // ============================================
    /// Invalid configuration value
    ConfigInvalidValue,
    /// Missing API key
    ConfigMissingApiKey,

    // ============================================
    // Export Errors
    // ============================================
    /// Spreadsheet could not be written
    ExportWriteFailed,
    /// No spreadsheet has been generated yet
    ExportNotGenerated,

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
            // Explorer Errors
            Self::ExplorerConnectionFailed => "EXPLORER_CONNECTION_FAILED",
            Self::ExplorerTimeout => "EXPLORER_TIMEOUT",
            Self::ExplorerHttpStatus => "EXPLORER_HTTP_STATUS",
            Self::ExplorerInvalidResponse => "EXPLORER_INVALID_RESPONSE",

            // Transaction Errors
            Self::TxUnrecognizedIdentifier => "TX_UNRECOGNIZED_IDENTIFIER",
            Self::TxNotFound => "TX_NOT_FOUND",
            Self::TxUnsupportedNetwork => "TX_UNSUPPORTED_NETWORK",

            // API Errors
            Self::ApiBadRequest => "API_BAD_REQUEST",
            Self::ApiRateLimited => "API_RATE_LIMITED",
            Self::ApiInternalError => "API_INTERNAL_ERROR",
            Self::ApiNotFound => "API_NOT_FOUND",

            // Configuration Errors
            Self::ConfigInvalidValue => "CFG_INVALID_VALUE",
            Self::ConfigMissingApiKey => "CFG_MISSING_API_KEY",

            // Export Errors
            Self::ExportWriteFailed => "EXPORT_WRITE_FAILED",
            Self::ExportNotGenerated => "EXPORT_NOT_GENERATED",

            // Generic
            Self::Unknown => "UNKNOWN_ERROR",
        }
    }

    /// Get HTTP status code for API responses
    pub fn http_status(&self) -> u16 {
        match self {
            Self::ApiBadRequest
            | Self::TxUnsupportedNetwork
            | Self::TxUnrecognizedIdentifier
            | Self::ConfigInvalidValue => 400,
            Self::ApiNotFound | Self::TxNotFound | Self::ExportNotGenerated => 404,
            Self::ApiRateLimited => 429,
            _ => 500,
        }
    }
}

// ============================================
// Convenience constructors
// ============================================

impl AppError {
    /// Explorer connection failed
    pub fn explorer_connection_failed(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ExplorerConnectionFailed, msg)
    }

    /// Explorer timeout
    pub fn explorer_timeout(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ExplorerTimeout, msg)
    }

    /// Explorer returned a non-success status
    pub fn explorer_status(status: u16) -> Self {
        Self::new(
            ErrorCode::ExplorerHttpStatus,
            format!("Explorer returned HTTP {}", status),
        )
    }

    /// Explorer response did not parse
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ExplorerInvalidResponse, msg)
    }

    /// Transaction not found at the explorer
    pub fn tx_not_found(txid: &str) -> Self {
        Self::new(ErrorCode::TxNotFound, format!("Transaction not found: {}", txid))
    }

    /// Identifier shape matches no supported network
    pub fn unrecognized_identifier(txid: &str) -> Self {
        Self::new(
            ErrorCode::TxUnrecognizedIdentifier,
            format!("Identifier matches no supported network: {}", txid),
        )
    }

    /// Unsupported network name
    pub fn unsupported_network(name: &str) -> Self {
        Self::new(
            ErrorCode::TxUnsupportedNetwork,
            format!("Unsupported network: {}. Supported: ethereum, bitcoin, tron", name),
        )
    }

    /// API bad request
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ApiBadRequest, msg)
    }

    /// API internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ApiInternalError, msg)
    }

    /// Export write failed
    pub fn export_failed(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ExportWriteFailed, msg)
    }

    /// No export generated yet
    pub fn export_not_generated() -> Self {
        Self::new(
            ErrorCode::ExportNotGenerated,
            "No spreadsheet has been generated yet",
        )
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

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::new(ErrorCode::ExplorerTimeout, "Explorer request timeout")
        } else if err.is_connect() {
            Self::new(ErrorCode::ExplorerConnectionFailed, "Explorer connection failed")
        } else if err.is_decode() {
            Self::with_source(ErrorCode::ExplorerInvalidResponse, "Explorer response decode error", err)
        } else {
            Self::new(ErrorCode::Unknown, err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(ErrorCode::ExplorerInvalidResponse, "JSON parse error", err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorCode::ExportWriteFailed, "IO error", err)
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        Self::with_source(ErrorCode::ExportWriteFailed, "CSV write error", err)
    }
}
