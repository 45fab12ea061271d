//! Txport Library
//!
//! Batch transaction lookup and spreadsheet export:
//! - Resolves each identifier to a network (shape heuristics, then probing)
//! - Fetches details from public block-explorer APIs
//! - Normalizes sender/recipient/amount/fee/timestamp/status into flat records
//! - Emits the batch as a downloadable CSV spreadsheet

pub mod api;
pub mod core;
pub mod models;
pub mod providers;
pub mod utils;

pub use crate::core::detect::{classify_txid, detect_network, IdShape};
pub use crate::core::export::write_spreadsheet;
pub use crate::core::lookup::Explorers;
pub use crate::models::config::ServiceConfig;
pub use crate::models::errors::{AppError, AppResult, ErrorCode};
pub use crate::models::types::{Network, TransactionRecord, TxStatus};
pub use crate::providers::blockchair::BlockchairClient;
pub use crate::providers::etherscan::EtherscanClient;
pub use crate::providers::trongrid::TrongridClient;
