//! Network Detection
//!
//! Two stages. The identifier's shape settles Ethereum outright (0x prefix,
//! 66 chars). A bare 64-hex identifier is valid on both Bitcoin and Tron,
//! so shape alone narrows it to a candidate list and the explorers are
//! probed in a fixed order; the first one that recognizes the identifier
//! wins.

use tracing::{debug, info};

use crate::core::lookup::Explorers;
use crate::models::types::Network;
use crate::utils::constants::{ETH_TXID_LEN, RAW_TXID_LEN};

/// What an identifier's shape alone can say about its network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdShape {
    /// 0x-prefixed 64-hex: Ethereum, no probing needed
    Ethereum,
    /// Bare 64-hex: Bitcoin or Tron, needs probing
    AmbiguousRaw,
    /// Matches no supported network
    Unrecognized,
}

/// Classify an identifier by shape
pub fn classify_txid(txid: &str) -> IdShape {
    if txid.len() == ETH_TXID_LEN {
        if let Some(rest) = txid.strip_prefix("0x") {
            if is_hex(rest) {
                return IdShape::Ethereum;
            }
        }
        return IdShape::Unrecognized;
    }

    if txid.len() == RAW_TXID_LEN && is_hex(txid) {
        return IdShape::AmbiguousRaw;
    }

    IdShape::Unrecognized
}

fn is_hex(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_hexdigit())
}

/// Probe order for ambiguous 64-hex identifiers
pub const PROBE_ORDER: [Network; 2] = [Network::Bitcoin, Network::Tron];

/// Resolve an identifier to a network, probing explorers when the shape is
/// ambiguous. Returns `None` when the shape is unrecognized or no probed
/// explorer knows the identifier.
pub async fn detect_network(explorers: &Explorers, txid: &str) -> Option<Network> {
    match classify_txid(txid) {
        IdShape::Ethereum => {
            debug!("Detected ethereum by shape: {}", txid);
            Some(Network::Ethereum)
        }
        IdShape::AmbiguousRaw => {
            for network in PROBE_ORDER {
                if explorers.knows(network, txid).await {
                    info!("Probe resolved {} to {}", txid, network);
                    return Some(network);
                }
            }
            debug!("No explorer recognized {}", txid);
            None
        }
        IdShape::Unrecognized => None,
    }
}
