//! Blockchair API Client (Bitcoin)
//!
//! Uses the transaction dashboard endpoint. The `data` object is keyed by
//! txid; an unknown identifier yields an empty `data`, and some deployments
//! render it as an empty array, so the outer envelope stays untyped and only
//! the inner transaction object is deserialized.
//!
//! The dashboard reports no sender/recipient, only an optional balance
//! change, so Bitcoin rows never carry address fields.
//!
//! API: https://api.blockchair.com/bitcoin/dashboards/transaction/{txid}
//! Free, no API key required

use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::models::errors::{AppError, AppResult};
use crate::models::types::{Network, TransactionRecord, TxStatus};
use crate::utils::constants::{
    BLOCKCHAIR_BASE_URL, DEFAULT_EXPLORER_TIMEOUT_SECS, SATOSHI_PER_BTC, USER_AGENT,
};
use crate::utils::time::normalize_datetime;

/// Transaction object inside the dashboard's `data.{txid}.transaction`
#[derive(Debug, Clone, Deserialize)]
pub struct BtcTransaction {
    /// Block height, -1 while in the mempool
    #[serde(default)]
    pub block_id: Option<i64>,
    /// `YYYY-MM-DD HH:MM:SS`
    #[serde(default)]
    pub time: Option<String>,
    /// Net value moved, satoshi (absent on some dashboard variants)
    #[serde(default)]
    pub balance_change: Option<i64>,
    /// Fee, satoshi
    #[serde(default)]
    pub fee: Option<i64>,
}

/// Blockchair API client
pub struct BlockchairClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl Default for BlockchairClient {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockchairClient {
    pub fn new() -> Self {
        Self::with_base_url(BLOCKCHAIR_BASE_URL.to_string())
    }

    /// Custom base URL (for tests)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            timeout: Duration::from_secs(DEFAULT_EXPLORER_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetch a transaction dashboard and normalize it into a record
    pub async fn fetch_transaction(&self, txid: &str) -> AppResult<TransactionRecord> {
        let url = format!("{}/bitcoin/dashboards/transaction/{}", self.base_url, txid);

        debug!("Blockchair: fetching {}", txid);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::explorer_status(response.status().as_u16()));
        }

        let body: serde_json::Value = response.json().await?;
        map_transaction(txid, &body)
    }

    /// Probe used by network detection: does Blockchair know this txid?
    pub async fn knows(&self, txid: &str) -> bool {
        matches!(self.fetch_transaction(txid).await, Ok(_))
    }
}

/// Normalize a dashboard envelope into a record
pub fn map_transaction(txid: &str, body: &serde_json::Value) -> AppResult<TransactionRecord> {
    let tx_value = body
        .get("data")
        .and_then(|d| d.get(txid))
        .and_then(|e| e.get("transaction"))
        .ok_or_else(|| AppError::tx_not_found(txid))?;

    let tx: BtcTransaction = serde_json::from_value(tx_value.clone())?;

    let status = match tx.block_id {
        Some(height) if height > 0 => TxStatus::Confirmed,
        _ => TxStatus::Pending,
    };

    Ok(TransactionRecord {
        txid: txid.to_string(),
        network: Some(Network::Bitcoin),
        sender: None,
        recipient: None,
        amount: tx.balance_change.map(|sat| sat as f64 / SATOSHI_PER_BTC),
        fee: tx.fee.map(|sat| sat as f64 / SATOSHI_PER_BTC),
        timestamp: normalize_datetime(tx.time.as_deref()),
        status,
    })
}
