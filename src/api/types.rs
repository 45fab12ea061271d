//! API Request/Response Types

use serde::{Deserialize, Serialize};

use crate::models::errors::AppError;

/// API Response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    pub latency_ms: f64,
    pub timestamp: i64,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T, latency_ms: f64) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            latency_ms,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(error: ApiError, latency_ms: f64) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            latency_ms,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

/// API Error
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "API_BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: "API_NOT_FOUND".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn rate_limited(retry_after: u64) -> Self {
        Self {
            code: "API_RATE_LIMITED".to_string(),
            message: format!("Rate limit exceeded. Retry after {} seconds", retry_after),
            details: Some(format!("retry_after: {}", retry_after)),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "API_INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<&AppError> for ApiError {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.code_str().to_string(),
            message: err.message.clone(),
            details: None,
        }
    }
}

// ============================================
// Transaction Export
// ============================================

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    /// Transaction identifiers to look up
    #[serde(default)]
    pub txids: Vec<String>,
    /// Optional network name; omitted means per-identifier detection
    #[serde(default)]
    pub network: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExportData {
    /// Generated spreadsheet file name (fetch via the download endpoint)
    pub file: String,
    pub total_requested: usize,
    /// Rows with real transaction data
    pub total_found: usize,
    /// Rows where the explorer did not know the identifier
    pub total_not_found: usize,
    /// Rows where the lookup itself failed
    pub total_failed: usize,
    pub processing_time_ms: f64,
}

// ============================================
// Stats
// ============================================

#[derive(Debug, Serialize)]
pub struct StatsData {
    pub exports_generated: u64,
    pub records_fetched: u64,
    pub lookup_failures: u64,
    pub uptime_seconds: u64,
    pub api_version: String,
}

// ============================================
// Health Check
// ============================================

#[derive(Debug, Serialize)]
pub struct HealthData {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}
