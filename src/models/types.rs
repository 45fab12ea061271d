//! Type definitions for Txport
//! Core data structures for transaction lookup and export

use serde::{Deserialize, Serialize};

use crate::utils::constants::FIELD_NA;

/// Supported blockchain networks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Ethereum,
    Bitcoin,
    Tron,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Ethereum => "ethereum",
            Network::Bitcoin => "bitcoin",
            Network::Tron => "tron",
        }
    }

    /// Ticker of the network's native unit, used in log lines
    pub fn native_symbol(&self) -> &'static str {
        match self {
            Network::Ethereum => "ETH",
            Network::Bitcoin => "BTC",
            Network::Tron => "TRX",
        }
    }

    /// Parse a request-supplied network name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "ethereum" | "eth" => Some(Network::Ethereum),
            "bitcoin" | "btc" => Some(Network::Bitcoin),
            "tron" | "trx" => Some(Network::Tron),
            _ => None,
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lookup outcome recorded in the spreadsheet's `Status` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxStatus {
    /// Transaction found and executed (Ethereum, Tron)
    Success,
    /// Transaction known but not yet confirmed
    Pending,
    /// Transaction confirmed in a block (Bitcoin)
    Confirmed,
    /// Explorer does not know the identifier
    NotFound,
    /// Lookup failed (network error, malformed response, bad identifier)
    Error,
}

impl TxStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxStatus::Success => "Success",
            TxStatus::Pending => "Pending",
            TxStatus::Confirmed => "Confirmed",
            TxStatus::NotFound => "Not Found",
            TxStatus::Error => "Error",
        }
    }

    /// Placeholder statuses carry no transaction data
    pub fn is_placeholder(&self) -> bool {
        matches!(self, TxStatus::NotFound | TxStatus::Error)
    }
}

/// One normalized transaction, one spreadsheet row.
///
/// Optional fields are explorer-dependent: the Blockchair dashboard endpoint
/// reports only a balance change, so Bitcoin rows carry neither sender nor
/// recipient. Absent fields render as `N/A` in the export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub txid: String,
    pub network: Option<Network>,
    pub sender: Option<String>,
    pub recipient: Option<String>,
    /// Value moved, in the network's native unit (ETH / BTC / TRX)
    pub amount: Option<f64>,
    /// Fee paid, in the network's native unit
    pub fee: Option<f64>,
    /// `YYYY-MM-DD HH:MM:SS UTC`, or `N/A` when the explorer omits it
    pub timestamp: String,
    pub status: TxStatus,
}

impl TransactionRecord {
    /// Placeholder row for an identifier that could not be resolved
    pub fn placeholder(txid: impl Into<String>, network: Option<Network>, status: TxStatus) -> Self {
        Self {
            txid: txid.into(),
            network,
            sender: None,
            recipient: None,
            amount: None,
            fee: None,
            timestamp: FIELD_NA.to_string(),
            status,
        }
    }
}
