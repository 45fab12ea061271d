//! Timestamp normalization helpers
//!
//! Explorers disagree on time formats: Etherscan's proxy endpoint reports
//! none, Blockchair returns a `YYYY-MM-DD HH:MM:SS` string, Trongrid returns
//! unix milliseconds. Everything normalizes to `YYYY-MM-DD HH:MM:SS UTC`.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::utils::constants::FIELD_NA;

const OUTPUT_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";
const EXPLORER_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a unix timestamp (seconds) as a UTC date string, `N/A` if the
/// value does not map to a valid date.
pub fn format_unix_timestamp(secs: i64) -> String {
    match DateTime::<Utc>::from_timestamp(secs, 0) {
        Some(dt) => dt.format(OUTPUT_FORMAT).to_string(),
        None => FIELD_NA.to_string(),
    }
}

/// Render unix milliseconds (Trongrid's `block_timestamp`) as a UTC date string.
pub fn format_unix_millis(millis: i64) -> String {
    format_unix_timestamp(millis / 1000)
}

/// Normalize an explorer-provided `YYYY-MM-DD HH:MM:SS` string (Blockchair's
/// `time` field), `N/A` when absent or malformed.
pub fn normalize_datetime(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return FIELD_NA.to_string();
    };
    match NaiveDateTime::parse_from_str(raw.trim(), EXPLORER_FORMAT) {
        Ok(dt) => dt.format(OUTPUT_FORMAT).to_string(),
        Err(_) => FIELD_NA.to_string(),
    }
}
