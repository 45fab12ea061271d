//! Integration tests for Txport

use txport::core::export::write_spreadsheet;
use txport::models::errors::ErrorCode;
use txport::models::types::{Network, TransactionRecord, TxStatus};
use txport::providers::{blockchair, etherscan, trongrid};
use txport::{classify_txid, IdShape};

const ETH_TXID: &str = "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b";
const BTC_TXID: &str = "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b";

#[test]
fn test_identifier_shape_detection() {
    // 0x-prefixed 64-hex resolves to Ethereum without probing
    assert_eq!(classify_txid(ETH_TXID), IdShape::Ethereum);

    // Bare 64-hex could be Bitcoin or Tron
    assert_eq!(classify_txid(BTC_TXID), IdShape::AmbiguousRaw);

    // Everything else is unrecognized
    assert_eq!(classify_txid("abc"), IdShape::Unrecognized);
    assert_eq!(classify_txid(""), IdShape::Unrecognized);
}

#[test]
fn test_ethereum_response_mapping() {
    let body: etherscan::EtherscanResponse = serde_json::from_str(
        r#"{
            "jsonrpc": "2.0",
            "id": 1,
            "result": {
                "from": "0xa7d9ddbe1f17865597fbd27ec712455208b6b76d",
                "to": "0xf02c1c8e6114b1dbe8937a39260b5b0a374432bb",
                "value": "0xf3dbb76162000",
                "gasPrice": "0x4a817c800",
                "blockNumber": "0x5daf3b"
            }
        }"#,
    )
    .unwrap();

    let rec = etherscan::map_transaction(ETH_TXID, body).unwrap();
    assert_eq!(rec.network, Some(Network::Ethereum));
    assert_eq!(
        rec.sender.as_deref(),
        Some("0xa7d9ddbe1f17865597fbd27ec712455208b6b76d")
    );
    assert_eq!(
        rec.recipient.as_deref(),
        Some("0xf02c1c8e6114b1dbe8937a39260b5b0a374432bb")
    );
    // 0xf3dbb76162000 wei = 0.004290842 ETH
    assert!((rec.amount.unwrap() - 0.004290842).abs() < 1e-12);
    assert_eq!(rec.status, TxStatus::Success);
    // The proxy endpoint has no block time
    assert_eq!(rec.timestamp, "N/A");
}

#[test]
fn test_bitcoin_response_mapping() {
    let body: serde_json::Value = serde_json::from_str(&format!(
        r#"{{
            "data": {{
                "{BTC_TXID}": {{
                    "transaction": {{
                        "block_id": 170,
                        "time": "2009-01-12 03:30:25",
                        "balance_change": 1000000000,
                        "fee": 0
                    }}
                }}
            }}
        }}"#
    ))
    .unwrap();

    let rec = blockchair::map_transaction(BTC_TXID, &body).unwrap();
    assert_eq!(rec.network, Some(Network::Bitcoin));
    assert!(rec.sender.is_none());
    assert_eq!(rec.amount, Some(10.0));
    assert_eq!(rec.timestamp, "2009-01-12 03:30:25 UTC");
    assert_eq!(rec.status, TxStatus::Confirmed);
}

#[test]
fn test_tron_response_mapping() {
    let body: trongrid::TrongridResponse = serde_json::from_str(
        r#"{
            "data": [{
                "owner_address": "41a614f803b6fd780986a42c78ec9c7f77e6ded13c",
                "to_address": "41b2a2e1dbd8cc1335c1cbfa9d9a1af36eca4c7bdc",
                "amount": 25000000,
                "block_timestamp": 1609459200000,
                "confirmed": true
            }]
        }"#,
    )
    .unwrap();

    let rec = trongrid::map_transaction(BTC_TXID, body).unwrap();
    assert_eq!(rec.network, Some(Network::Tron));
    assert_eq!(rec.amount, Some(25.0));
    assert_eq!(rec.timestamp, "2021-01-01 00:00:00 UTC");
    assert_eq!(rec.status, TxStatus::Success);
}

#[test]
fn test_unknown_identifiers_map_to_not_found() {
    let eth: etherscan::EtherscanResponse =
        serde_json::from_str(r#"{"result": null}"#).unwrap();
    assert_eq!(
        etherscan::map_transaction(ETH_TXID, eth).unwrap_err().code,
        ErrorCode::TxNotFound
    );

    let btc: serde_json::Value = serde_json::from_str(r#"{"data": {}}"#).unwrap();
    assert_eq!(
        blockchair::map_transaction(BTC_TXID, &btc).unwrap_err().code,
        ErrorCode::TxNotFound
    );

    let trx: trongrid::TrongridResponse = serde_json::from_str(r#"{"data": []}"#).unwrap();
    assert_eq!(
        trongrid::map_transaction(BTC_TXID, trx).unwrap_err().code,
        ErrorCode::TxNotFound
    );
}

#[test]
fn test_spreadsheet_has_row_per_identifier() {
    let records = vec![
        TransactionRecord {
            txid: ETH_TXID.to_string(),
            network: Some(Network::Ethereum),
            sender: Some("0xaaaa".to_string()),
            recipient: Some("0xbbbb".to_string()),
            amount: Some(0.5),
            fee: Some(0.0001),
            timestamp: "N/A".to_string(),
            status: TxStatus::Success,
        },
        TransactionRecord::placeholder(BTC_TXID, Some(Network::Bitcoin), TxStatus::NotFound),
        TransactionRecord::placeholder("garbage", None, TxStatus::Error),
    ];

    let dir = std::env::temp_dir().join("txport-integration-test");
    let path = write_spreadsheet(&records, &dir).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 4, "header plus one row per identifier");
    assert_eq!(lines[0], "TxID,Network,From,To,Amount,Fee,Date,Status");
    assert!(lines[1].contains("ethereum"));
    assert!(lines[2].contains("Not Found"));
    assert!(lines[3].contains("garbage,N/A,N/A,N/A,N/A,N/A,N/A,Error"));

    std::fs::remove_file(path).ok();
}

#[test]
fn test_error_code_http_statuses() {
    assert_eq!(ErrorCode::TxUnsupportedNetwork.http_status(), 400);
    assert_eq!(ErrorCode::TxNotFound.http_status(), 404);
    assert_eq!(ErrorCode::ExportNotGenerated.http_status(), 404);
    assert_eq!(ErrorCode::ExplorerTimeout.http_status(), 500);
}
