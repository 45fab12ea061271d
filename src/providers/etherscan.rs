//! Etherscan API Client (Ethereum)
//!
//! Uses the proxy module's `eth_getTransactionByHash`, which mirrors the
//! JSON-RPC response: `result` is the transaction object, or null for an
//! unknown hash. The proxy endpoint carries no block timestamp, so the
//! record's date stays `N/A`.
//!
//! API: https://api.etherscan.io/api?module=proxy&action=eth_getTransactionByHash
//! Keyless requests are allowed but heavily throttled.

use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::models::errors::{AppError, AppResult};
use crate::models::types::{Network, TransactionRecord, TxStatus};
use crate::utils::constants::{
    DEFAULT_EXPLORER_TIMEOUT_SECS, ETHERSCAN_BASE_URL, FIELD_NA, USER_AGENT, WEI_PER_ETH,
};

/// Etherscan proxy envelope
#[derive(Debug, Deserialize)]
pub struct EtherscanResponse {
    pub result: Option<EthTransaction>,
}

/// Transaction object as returned by `eth_getTransactionByHash`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthTransaction {
    pub from: Option<String>,
    pub to: Option<String>,
    /// Value in wei, 0x-prefixed hex
    #[serde(default)]
    pub value: Option<String>,
    /// Gas price in wei, 0x-prefixed hex
    #[serde(default)]
    pub gas_price: Option<String>,
    /// Present once the transaction is mined
    #[serde(default)]
    pub block_number: Option<String>,
}

/// Etherscan API client
pub struct EtherscanClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl EtherscanClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, ETHERSCAN_BASE_URL.to_string())
    }

    /// Custom base URL (for tests)
    pub fn with_base_url(api_key: Option<String>, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
            timeout: Duration::from_secs(DEFAULT_EXPLORER_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetch a transaction and normalize it into a record.
    /// Unknown hashes surface as `TX_NOT_FOUND`.
    pub async fn fetch_transaction(&self, txid: &str) -> AppResult<TransactionRecord> {
        let mut url = format!(
            "{}/api?module=proxy&action=eth_getTransactionByHash&txhash={}",
            self.base_url, txid
        );
        if let Some(key) = &self.api_key {
            url.push_str("&apikey=");
            url.push_str(key);
        }

        debug!("Etherscan: fetching {}", txid);

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

        let body: EtherscanResponse = response.json().await?;
        map_transaction(txid, body)
    }

    /// Probe used by network detection: does Etherscan know this hash?
    pub async fn knows(&self, txid: &str) -> bool {
        matches!(self.fetch_transaction(txid).await, Ok(_))
    }
}

/// Normalize the proxy response into a record
pub fn map_transaction(txid: &str, body: EtherscanResponse) -> AppResult<TransactionRecord> {
    let tx = body.result.ok_or_else(|| AppError::tx_not_found(txid))?;

    Ok(TransactionRecord {
        txid: txid.to_string(),
        network: Some(Network::Ethereum),
        sender: tx.from,
        recipient: tx.to,
        amount: tx.value.as_deref().and_then(hex_wei_to_eth),
        fee: tx.gas_price.as_deref().and_then(hex_wei_to_eth),
        timestamp: FIELD_NA.to_string(),
        status: if tx.block_number.is_some() {
            TxStatus::Success
        } else {
            TxStatus::Pending
        },
    })
}

/// Parse a 0x-prefixed hex wei quantity into ETH
fn hex_wei_to_eth(hex: &str) -> Option<f64> {
    let stripped = hex.strip_prefix("0x").unwrap_or(hex);
    u128::from_str_radix(stripped, 16)
        .ok()
        .map(|wei| wei as f64 / WEI_PER_ETH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_wei_to_eth() {
        // 1 ETH = 0xde0b6b3a7640000 wei
        assert_eq!(hex_wei_to_eth("0xde0b6b3a7640000"), Some(1.0));
        assert_eq!(hex_wei_to_eth("0x0"), Some(0.0));
        assert_eq!(hex_wei_to_eth("not hex"), None);
    }

    #[test]
    fn test_map_found_transaction() {
        let body: EtherscanResponse = serde_json::from_str(
            r#"{
                "jsonrpc": "2.0",
                "id": 1,
                "result": {
                    "from": "0x1111111111111111111111111111111111111111",
                    "to": "0x2222222222222222222222222222222222222222",
                    "value": "0xde0b6b3a7640000",
                    "gasPrice": "0x4a817c800",
                    "blockNumber": "0x10d4f"
                }
            }"#,
        )
        .unwrap();

        let rec = map_transaction("0xabc", body).unwrap();
        assert_eq!(rec.network, Some(Network::Ethereum));
        assert_eq!(
            rec.sender.as_deref(),
            Some("0x1111111111111111111111111111111111111111")
        );
        assert_eq!(rec.amount, Some(1.0));
        // 20 gwei
        assert_eq!(rec.fee, Some(2e-8));
        assert_eq!(rec.timestamp, "N/A");
        assert_eq!(rec.status, TxStatus::Success);
    }

    #[test]
    fn test_map_pending_transaction() {
        let body: EtherscanResponse = serde_json::from_str(
            r#"{"result": {"from": "0x11", "to": "0x22", "value": "0x0", "gasPrice": "0x1"}}"#,
        )
        .unwrap();
        let rec = map_transaction("0xabc", body).unwrap();
        assert_eq!(rec.status, TxStatus::Pending);
    }

    #[test]
    fn test_map_unknown_hash() {
        let body: EtherscanResponse =
            serde_json::from_str(r#"{"jsonrpc": "2.0", "id": 1, "result": null}"#).unwrap();
        let err = map_transaction("0xdead", body).unwrap_err();
        assert_eq!(err.code_str(), "TX_NOT_FOUND");
    }
}
