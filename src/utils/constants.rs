//! Constants Module - Single Source of Truth
//!
//! Explorer base URLs, unit scales, timeouts, and identifier shapes used
//! across the application live here. No hardcoded values in other modules.

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// Application name
pub const APP_NAME: &str = "Txport";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent for outbound explorer requests
pub const USER_AGENT: &str = "Txport/0.1";

// ============================================
// HTTP CONSTANTS
// ============================================

/// Default timeout for explorer API requests (seconds)
pub const DEFAULT_EXPLORER_TIMEOUT_SECS: u64 = 10;

/// Maximum transaction identifiers per export request
pub const MAX_BATCH_SIZE: usize = 100;

// ============================================
// EXPLORER BASE URLS
// ============================================

/// Etherscan API root (Ethereum)
pub const ETHERSCAN_BASE_URL: &str = "https://api.etherscan.io";

/// Blockchair API root (Bitcoin)
pub const BLOCKCHAIR_BASE_URL: &str = "https://api.blockchair.com";

/// Trongrid API root (Tron)
pub const TRONGRID_BASE_URL: &str = "https://api.trongrid.io";

// ============================================
// UNIT SCALES
// ============================================

/// Wei per ETH
pub const WEI_PER_ETH: f64 = 1e18;

/// Satoshi per BTC
pub const SATOSHI_PER_BTC: f64 = 1e8;

/// Sun per TRX
pub const SUN_PER_TRX: f64 = 1e6;

// ============================================
// IDENTIFIER SHAPES
// ============================================

/// Length of a 0x-prefixed Ethereum transaction hash
pub const ETH_TXID_LEN: usize = 66;

/// Length of an unprefixed 64-hex identifier (Bitcoin or Tron)
pub const RAW_TXID_LEN: usize = 64;

// ============================================
// EXPORT CONSTANTS
// ============================================

/// Default directory for generated spreadsheets
pub const DEFAULT_EXPORT_DIR: &str = "exports";

/// Spreadsheet column order. Every record renders exactly these columns.
pub const EXPORT_COLUMNS: [&str; 8] = [
    "TxID",
    "Network",
    "From",
    "To",
    "Amount",
    "Fee",
    "Date",
    "Status",
];

/// Sentinel rendered for fields the explorer did not report
pub const FIELD_NA: &str = "N/A";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_columns_order() {
        assert_eq!(EXPORT_COLUMNS[0], "TxID");
        assert_eq!(EXPORT_COLUMNS[7], "Status");
        assert_eq!(EXPORT_COLUMNS.len(), 8);
    }

    #[test]
    fn test_identifier_lengths() {
        assert_eq!("0x".len() + RAW_TXID_LEN, ETH_TXID_LEN);
    }
}
