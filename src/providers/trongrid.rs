//! Trongrid API Client (Tron)
//!
//! Fetches a single transaction; the response wraps matches in a `data`
//! array, empty for unknown identifiers. Amounts arrive in sun (1e-6 TRX)
//! and timestamps in unix milliseconds.
//!
//! API: https://api.trongrid.io/v1/transactions/{txid}
//! Free, no API key required

use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::models::errors::{AppError, AppResult};
use crate::models::types::{Network, TransactionRecord, TxStatus};
use crate::utils::constants::{
    DEFAULT_EXPLORER_TIMEOUT_SECS, FIELD_NA, SUN_PER_TRX, TRONGRID_BASE_URL, USER_AGENT,
};
use crate::utils::time::format_unix_millis;

/// Trongrid envelope: matches come back as a `data` array
#[derive(Debug, Deserialize)]
pub struct TrongridResponse {
    #[serde(default)]
    pub data: Vec<TronTransaction>,
}

/// Transaction object from Trongrid
#[derive(Debug, Clone, Deserialize)]
pub struct TronTransaction {
    #[serde(default)]
    pub owner_address: Option<String>,
    #[serde(default)]
    pub to_address: Option<String>,
    /// Value in sun
    #[serde(default)]
    pub amount: Option<i64>,
    /// Unix milliseconds
    #[serde(default)]
    pub block_timestamp: Option<i64>,
    #[serde(default)]
    pub confirmed: Option<bool>,
}

/// Trongrid API client
pub struct TrongridClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl Default for TrongridClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TrongridClient {
    pub fn new() -> Self {
        Self::with_base_url(TRONGRID_BASE_URL.to_string())
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

    /// Fetch a transaction and normalize it into a record
    pub async fn fetch_transaction(&self, txid: &str) -> AppResult<TransactionRecord> {
        let url = format!("{}/v1/transactions/{}", self.base_url, txid);

        debug!("Trongrid: fetching {}", txid);

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

        let body: TrongridResponse = response.json().await?;
        map_transaction(txid, body)
    }

    /// Probe used by network detection: does Trongrid know this txid?
    pub async fn knows(&self, txid: &str) -> bool {
        matches!(self.fetch_transaction(txid).await, Ok(_))
    }
}

/// Normalize the Trongrid envelope into a record
pub fn map_transaction(txid: &str, body: TrongridResponse) -> AppResult<TransactionRecord> {
    let tx = body
        .data
        .into_iter()
        .next()
        .ok_or_else(|| AppError::tx_not_found(txid))?;

    Ok(TransactionRecord {
        txid: txid.to_string(),
        network: Some(Network::Tron),
        sender: tx.owner_address,
        recipient: tx.to_address,
        amount: tx.amount.map(|sun| sun as f64 / SUN_PER_TRX),
        fee: None,
        timestamp: tx
            .block_timestamp
            .map(format_unix_millis)
            .unwrap_or_else(|| FIELD_NA.to_string()),
        status: if tx.confirmed.unwrap_or(false) {
            TxStatus::Success
        } else {
            TxStatus::Pending
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_confirmed_transaction() {
        let body: TrongridResponse = serde_json::from_str(
            r#"{
                "data": [{
                    "owner_address": "TSenderAddressXXXXXXXXXXXXXXXXXXXX",
                    "to_address": "TRecipientAddressXXXXXXXXXXXXXXXXX",
                    "amount": 1500000,
                    "block_timestamp": 1609459200000,
                    "confirmed": true
                }]
            }"#,
        )
        .unwrap();

        let rec = map_transaction("deadbeef", body).unwrap();
        assert_eq!(rec.network, Some(Network::Tron));
        assert_eq!(rec.amount, Some(1.5));
        assert!(rec.fee.is_none());
        assert_eq!(rec.timestamp, "2021-01-01 00:00:00 UTC");
        assert_eq!(rec.status, TxStatus::Success);
    }

    #[test]
    fn test_map_unconfirmed_transaction() {
        let body: TrongridResponse = serde_json::from_str(
            r#"{"data": [{"amount": 100, "confirmed": false}]}"#,
        )
        .unwrap();
        let rec = map_transaction("deadbeef", body).unwrap();
        assert_eq!(rec.status, TxStatus::Pending);
        assert_eq!(rec.timestamp, "N/A");
    }

    #[test]
    fn test_map_unknown_txid() {
        let body: TrongridResponse = serde_json::from_str(r#"{"data": []}"#).unwrap();
        let err = map_transaction("deadbeef", body).unwrap_err();
        assert_eq!(err.code_str(), "TX_NOT_FOUND");
    }
}
