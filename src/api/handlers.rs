//! API Request Handlers

use axum::{
    extract::{Json, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Instant;
use tracing::{error, info, warn};

use super::types::*;
use crate::core::export::write_spreadsheet;
use crate::core::lookup::Explorers;
use crate::models::config::ServiceConfig;
use crate::models::types::{Network, TxStatus};
use crate::utils::constants::MAX_BATCH_SIZE;

/// Shared application state
pub struct AppState {
    pub config: ServiceConfig,
    pub explorers: Explorers,
    /// Path of the most recently generated spreadsheet
    pub last_export: RwLock<Option<PathBuf>>,
    pub start_time: Instant,
    // Stats counters
    pub exports_generated: AtomicU64,
    pub records_fetched: AtomicU64,
    pub lookup_failures: AtomicU64,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Self {
        let explorers = Explorers::from_config(&config);
        Self {
            config,
            explorers,
            last_export: RwLock::new(None),
            start_time: Instant::now(),
            exports_generated: AtomicU64::new(0),
            records_fetched: AtomicU64::new(0),
            lookup_failures: AtomicU64::new(0),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

// ============================================
// Health Check
// ============================================

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<ApiResponse<HealthData>> {
    let start = Instant::now();

    let data = HealthData {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
    };

    Json(ApiResponse::success(
        data,
        start.elapsed().as_secs_f64() * 1000.0,
    ))
}

// ============================================
// Transaction Export
// ============================================

pub async fn export_transactions(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ExportRequest>,
) -> Result<Json<ApiResponse<ExportData>>, (StatusCode, Json<ApiResponse<()>>)> {
    let start = Instant::now();

    // Validate request
    if req.txids.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(
                ApiError::bad_request("txids array cannot be empty"),
                start.elapsed().as_secs_f64() * 1000.0,
            )),
        ));
    }

    if req.txids.len() > MAX_BATCH_SIZE {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(
                ApiError::bad_request(format!(
                    "Maximum {} identifiers per export request",
                    MAX_BATCH_SIZE
                )),
                start.elapsed().as_secs_f64() * 1000.0,
            )),
        ));
    }

    // Explicit network applies to the whole batch; absent means detection
    let network = match &req.network {
        Some(name) => match Network::from_name(name) {
            Some(n) => Some(n),
            None => {
                return Err((
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::error(
                        ApiError::bad_request(format!(
                            "Unsupported network: {}. Supported: ethereum, bitcoin, tron",
                            name
                        )),
                        start.elapsed().as_secs_f64() * 1000.0,
                    )),
                ));
            }
        },
        None => None,
    };

    info!(
        "Export request: {} identifiers, network: {}",
        req.txids.len(),
        network.map(|n| n.as_str()).unwrap_or("auto-detect")
    );

    let records = state.explorers.resolve_batch(&req.txids, network).await;

    let total_found = records.iter().filter(|r| !r.status.is_placeholder()).count();
    let total_not_found = records
        .iter()
        .filter(|r| r.status == TxStatus::NotFound)
        .count();
    let total_failed = records
        .iter()
        .filter(|r| r.status == TxStatus::Error)
        .count();

    state
        .records_fetched
        .fetch_add(total_found as u64, Ordering::Relaxed);
    state
        .lookup_failures
        .fetch_add((total_not_found + total_failed) as u64, Ordering::Relaxed);

    // Nothing resolved at all mirrors the classic "No transactions found"
    if total_found == 0 {
        warn!("Export produced no resolvable transactions");
        return Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(
                ApiError::not_found("No transactions found"),
                start.elapsed().as_secs_f64() * 1000.0,
            )),
        ));
    }

    let path = match write_spreadsheet(&records, &state.config.export_dir) {
        Ok(path) => path,
        Err(e) => {
            error!("Spreadsheet write failed: {}", e);
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(
                    ApiError::from(&e),
                    start.elapsed().as_secs_f64() * 1000.0,
                )),
            ));
        }
    };

    let file = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    *state.last_export.write().unwrap() = Some(path);
    state.exports_generated.fetch_add(1, Ordering::Relaxed);

    let data = ExportData {
        file,
        total_requested: req.txids.len(),
        total_found,
        total_not_found,
        total_failed,
        processing_time_ms: start.elapsed().as_secs_f64() * 1000.0,
    };

    Ok(Json(ApiResponse::success(
        data,
        start.elapsed().as_secs_f64() * 1000.0,
    )))
}

// ============================================
// Spreadsheet Download
// ============================================

pub async fn download_spreadsheet(
    State(state): State<Arc<AppState>>,
) -> Result<Response, (StatusCode, Json<ApiResponse<()>>)> {
    let start = Instant::now();

    let path = state.last_export.read().unwrap().clone().ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(
                ApiError::not_found("No spreadsheet has been generated yet"),
                start.elapsed().as_secs_f64() * 1000.0,
            )),
        )
    })?;

    let bytes = tokio::fs::read(&path).await.map_err(|e| {
        warn!("Last export vanished from disk: {} ({})", path.display(), e);
        (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(
                ApiError::not_found("Spreadsheet file no longer exists"),
                start.elapsed().as_secs_f64() * 1000.0,
            )),
        )
    })?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "transactions.csv".to_string());

    info!("Serving spreadsheet: {} ({} bytes)", file_name, bytes.len());

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        bytes,
    )
        .into_response())
}

// ============================================
// Stats
// ============================================

pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<ApiResponse<StatsData>> {
    let start = Instant::now();

    let data = StatsData {
        exports_generated: state.exports_generated.load(Ordering::Relaxed),
        records_fetched: state.records_fetched.load(Ordering::Relaxed),
        lookup_failures: state.lookup_failures.load(Ordering::Relaxed),
        uptime_seconds: state.uptime_seconds(),
        api_version: env!("CARGO_PKG_VERSION").to_string(),
    };

    Json(ApiResponse::success(
        data,
        start.elapsed().as_secs_f64() * 1000.0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_download_before_any_export_is_not_found() {
        let state = Arc::new(AppState::new(ServiceConfig::default()));
        let result = download_spreadsheet(State(state)).await;
        let (status, _) = result.err().expect("expected an error response");
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_export_rejects_empty_batch() {
        let state = Arc::new(AppState::new(ServiceConfig::default()));
        let req = ExportRequest {
            txids: vec![],
            network: None,
        };
        let result = export_transactions(State(state), Json(req)).await;
        let (status, _) = result.err().expect("expected an error response");
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_export_rejects_unknown_network() {
        let state = Arc::new(AppState::new(ServiceConfig::default()));
        let req = ExportRequest {
            txids: vec!["abc".to_string()],
            network: Some("dogecoin".to_string()),
        };
        let result = export_transactions(State(state), Json(req)).await;
        let (status, _) = result.err().expect("expected an error response");
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_export_rejects_oversized_batch() {
        let state = Arc::new(AppState::new(ServiceConfig::default()));
        let req = ExportRequest {
            txids: vec!["a".to_string(); MAX_BATCH_SIZE + 1],
            network: None,
        };
        let result = export_transactions(State(state), Json(req)).await;
        let (status, _) = result.err().expect("expected an error response");
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_health_reports_version() {
        let state = Arc::new(AppState::new(ServiceConfig::default()));
        let Json(response) = health_check(State(state)).await;
        assert!(response.success);
        let data = response.data.unwrap();
        assert_eq!(data.status, "healthy");
        assert_eq!(data.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_stats_start_at_zero() {
        let state = Arc::new(AppState::new(ServiceConfig::default()));
        let Json(response) = get_stats(State(state)).await;
        let data = response.data.unwrap();
        assert_eq!(data.exports_generated, 0);
        assert_eq!(data.records_fetched, 0);
        assert_eq!(data.lookup_failures, 0);
    }
}
