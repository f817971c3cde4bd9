//! Hash chaining for session access records.
//!
//! Each login, failed login and logout becomes one link. A link's hash
//! commits to the terminal it was written on (`log_id`), its position in
//! that terminal's log, the hash before it and the record itself, so an
//! entry cannot be edited, dropped, reordered or replayed into another
//! terminal's log without `verify_chain` failing.

use sha2::{Digest, Sha256};

use hms_contracts::{
    access::AccessRecord,
    error::{HmsError, HmsResult},
};

use crate::entry::AccessLogEntry;

/// Hash one access log link.
///
/// Bytes fed to SHA-256: `log_id`, `sequence` as little-endian u64,
/// `prev_hash`, then the record's compact JSON. Returns lowercase hex, or
/// `AuditWriteFailed` if the record cannot be serialized.
pub fn hash_entry(
    log_id: &str,
    sequence: u64,
    record: &AccessRecord,
    prev_hash: &str,
) -> HmsResult<String> {
    let record_json = serde_json::to_vec(record).map_err(|e| HmsError::AuditWriteFailed {
        reason: format!("access record is not serializable: {}", e),
    })?;

    let mut hasher = Sha256::new();
    hasher.update(log_id.as_bytes());
    hasher.update(sequence.to_le_bytes());
    hasher.update(prev_hash.as_bytes());
    hasher.update(&record_json);

    Ok(hex::encode(hasher.finalize()))
}

/// Check that `entries` form one unbroken chain from a single log.
///
/// Every entry must carry the first entry's `log_id` and its own position as
/// `sequence`, point at its predecessor's hash (the genesis sentinel for the
/// first), and hold a `this_hash` that recomputes. An empty chain is valid.
pub fn verify_chain(entries: &[AccessLogEntry]) -> bool {
    let Some(first) = entries.first() else {
        return true;
    };

    let mut expected_prev = AccessLogEntry::GENESIS_HASH;
    for (position, entry) in (0u64..).zip(entries) {
        let linked = entry.log_id == first.log_id
            && entry.sequence == position
            && entry.prev_hash == expected_prev;
        let sealed = hash_entry(&entry.log_id, entry.sequence, &entry.record, &entry.prev_hash)
            .is_ok_and(|recomputed| recomputed == entry.this_hash);

        if !(linked && sealed) {
            return false;
        }
        expected_prev = entry.this_hash.as_str();
    }

    true
}
