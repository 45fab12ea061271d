//! Spreadsheet Export
//!
//! Serializes a batch of records into a CSV file, one file per export,
//! under the configured export directory. Column order is fixed in
//! `utils::constants::EXPORT_COLUMNS`; absent fields render as `N/A`.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

use crate::models::errors::AppResult;
use crate::models::types::TransactionRecord;
use crate::utils::constants::{EXPORT_COLUMNS, FIELD_NA};

/// Write records to a fresh uuid-named CSV file under `dir`, creating the
/// directory if needed. Returns the path of the written file.
pub fn write_spreadsheet(records: &[TransactionRecord], dir: &Path) -> AppResult<PathBuf> {
    fs::create_dir_all(dir)?;

    let path = dir.join(format!("transactions-{}.csv", Uuid::new_v4()));
    let mut writer = csv::Writer::from_path(&path)?;

    writer.write_record(EXPORT_COLUMNS)?;
    for record in records {
        writer.write_record(record_row(record))?;
    }
    writer.flush()?;

    info!("Spreadsheet written: {} ({} rows)", path.display(), records.len());

    Ok(path)
}

/// Render one record as one CSV row, in `EXPORT_COLUMNS` order
fn record_row(record: &TransactionRecord) -> [String; 8] {
    [
        record.txid.clone(),
        record
            .network
            .map(|n| n.as_str().to_string())
            .unwrap_or_else(|| FIELD_NA.to_string()),
        field_or_na(record.sender.as_deref()),
        field_or_na(record.recipient.as_deref()),
        number_or_na(record.amount),
        number_or_na(record.fee),
        record.timestamp.clone(),
        record.status.as_str().to_string(),
    ]
}

fn field_or_na(value: Option<&str>) -> String {
    value.unwrap_or(FIELD_NA).to_string()
}

fn number_or_na(value: Option<f64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| FIELD_NA.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::{Network, TxStatus};

    fn sample_record() -> TransactionRecord {
        TransactionRecord {
            txid: "0xabc".to_string(),
            network: Some(Network::Ethereum),
            sender: Some("0x1111".to_string()),
            recipient: Some("0x2222".to_string()),
            amount: Some(1.5),
            fee: Some(0.001),
            timestamp: "2021-01-01 00:00:00 UTC".to_string(),
            status: TxStatus::Success,
        }
    }

    #[test]
    fn test_record_row_order() {
        let row = record_row(&sample_record());
        assert_eq!(row[0], "0xabc");
        assert_eq!(row[1], "ethereum");
        assert_eq!(row[2], "0x1111");
        assert_eq!(row[3], "0x2222");
        assert_eq!(row[4], "1.5");
        assert_eq!(row[5], "0.001");
        assert_eq!(row[6], "2021-01-01 00:00:00 UTC");
        assert_eq!(row[7], "Success");
    }

    #[test]
    fn test_placeholder_row_renders_na() {
        let rec = TransactionRecord::placeholder("abc", None, TxStatus::Error);
        let row = record_row(&rec);
        assert_eq!(row[1], "N/A");
        assert_eq!(row[2], "N/A");
        assert_eq!(row[4], "N/A");
        assert_eq!(row[7], "Error");
    }

    #[test]
    fn test_write_spreadsheet() {
        let dir = std::env::temp_dir().join("txport-export-test");
        let records = vec![
            sample_record(),
            TransactionRecord::placeholder("missing", Some(Network::Bitcoin), TxStatus::NotFound),
        ];

        let path = write_spreadsheet(&records, &dir).unwrap();
        assert!(path.exists());

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        // Header plus one row per requested identifier
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "TxID,Network,From,To,Amount,Fee,Date,Status");
        assert!(lines[1].starts_with("0xabc,ethereum"));
        assert!(lines[2].contains("Not Found"));

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_each_export_gets_fresh_file() {
        let dir = std::env::temp_dir().join("txport-export-test");
        let records = vec![sample_record()];
        let a = write_spreadsheet(&records, &dir).unwrap();
        let b = write_spreadsheet(&records, &dir).unwrap();
        assert_ne!(a, b);
        fs::remove_file(a).ok();
        fs::remove_file(b).ok();
    }
}
