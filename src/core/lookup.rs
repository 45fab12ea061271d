//! Transaction Lookup
//!
//! Bundles the three explorer clients and turns one identifier into one
//! record. Lookup failures never abort a batch: they fold into placeholder
//! records so the output stays row-for-row aligned with the request.

use tracing::{info, warn};

use crate::core::detect;
use crate::models::config::ServiceConfig;
use crate::models::errors::{AppResult, ErrorCode};
use crate::models::types::{Network, TransactionRecord, TxStatus};
use crate::providers::blockchair::BlockchairClient;
use crate::providers::etherscan::EtherscanClient;
use crate::providers::trongrid::TrongridClient;

/// The explorer clients, one per supported network
pub struct Explorers {
    pub etherscan: EtherscanClient,
    pub blockchair: BlockchairClient,
    pub trongrid: TrongridClient,
}

impl Explorers {
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self {
            etherscan: EtherscanClient::new(config.etherscan_api_key.clone())
                .with_timeout(config.explorer_timeout),
            blockchair: BlockchairClient::new().with_timeout(config.explorer_timeout),
            trongrid: TrongridClient::new().with_timeout(config.explorer_timeout),
        }
    }

    /// Fetch from the explorer responsible for `network`
    pub async fn fetch(&self, network: Network, txid: &str) -> AppResult<TransactionRecord> {
        match network {
            Network::Ethereum => self.etherscan.fetch_transaction(txid).await,
            Network::Bitcoin => self.blockchair.fetch_transaction(txid).await,
            Network::Tron => self.trongrid.fetch_transaction(txid).await,
        }
    }

    /// Probe whether the explorer for `network` recognizes the identifier
    pub async fn knows(&self, network: Network, txid: &str) -> bool {
        match network {
            Network::Ethereum => self.etherscan.knows(txid).await,
            Network::Bitcoin => self.blockchair.knows(txid).await,
            Network::Tron => self.trongrid.knows(txid).await,
        }
    }

    /// Resolve one identifier into a record. With an explicit network the
    /// explorer is queried directly; otherwise the network is detected
    /// first. Every failure path yields a placeholder record.
    pub async fn resolve_record(
        &self,
        txid: &str,
        network: Option<Network>,
    ) -> TransactionRecord {
        let network = match network {
            Some(n) => n,
            None => match detect::detect_network(self, txid).await {
                Some(n) => n,
                None => {
                    warn!("Could not resolve a network for {}", txid);
                    return TransactionRecord::placeholder(txid, None, TxStatus::Error);
                }
            },
        };

        match self.fetch(network, txid).await {
            Ok(record) => record,
            Err(e) if e.code == ErrorCode::TxNotFound => {
                info!("{} unknown to {} explorer", txid, network);
                TransactionRecord::placeholder(txid, Some(network), TxStatus::NotFound)
            }
            Err(e) => {
                warn!("Lookup failed for {} on {}: {}", txid, network, e);
                TransactionRecord::placeholder(txid, Some(network), TxStatus::Error)
            }
        }
    }

    /// Resolve a whole batch, one identifier at a time, in request order
    pub async fn resolve_batch(
        &self,
        txids: &[String],
        network: Option<Network>,
    ) -> Vec<TransactionRecord> {
        let mut records = Vec::with_capacity(txids.len());
        for txid in txids {
            records.push(self.resolve_record(txid, network).await);
        }
        records
    }
}
