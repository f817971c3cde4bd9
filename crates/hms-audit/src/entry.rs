//! Access log entry and sealed log types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hms_contracts::access::AccessRecord;

/// One link in the access log's hash chain.
///
/// Changing any field, including those of the embedded `record`, invalidates
/// `this_hash` and every later `prev_hash`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessLogEntry {
    /// Position in the chain, starting at 0.
    pub sequence: u64,

    /// The log this entry belongs to.
    pub log_id: String,

    pub record: AccessRecord,

    /// `this_hash` of the previous entry, or `GENESIS_HASH` for the first.
    pub prev_hash: String,

    /// SHA-256 (hex) over (log_id, sequence, prev_hash, record JSON).
    pub this_hash: String,
}

impl AccessLogEntry {
    /// The `prev_hash` of the first entry in every chain: 64 hex zeros.
    pub const GENESIS_HASH: &'static str =
        "0000000000000000000000000000000000000000000000000000000000000000";
}

/// A point-in-time export of an access log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessLog {
    pub log_id: String,

    /// All entries in chain order.
    pub entries: Vec<AccessLogEntry>,

    /// When the snapshot was taken (UTC).
    pub exported_at: DateTime<Utc>,

    /// `this_hash` of the last entry. Empty when the log is empty.
    pub terminal_hash: String,
}
