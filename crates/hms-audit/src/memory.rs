//! In-memory implementation of `AccessAuditWriter`.
//!
//! `InMemoryAccessLog` keeps every entry in a `Vec` behind a `Mutex`, so the
//! session store can hold it as `Arc<dyn AccessAuditWriter>` while operators
//! export or verify the same log.

use std::sync::{Mutex, PoisonError};

use chrono::Utc;
use tracing::debug;

use hms_contracts::{
    access::AccessRecord,
    error::HmsResult,
};
use hms_core::traits::AccessAuditWriter;

use crate::{
    chain::{hash_entry, verify_chain},
    entry::{AccessLog, AccessLogEntry},
};

// ── Internal mutable state ────────────────────────────────────────────────────

pub(crate) struct LogState {
    /// All entries written so far, in append order.
    pub(crate) entries: Vec<AccessLogEntry>,

    /// `this_hash` of the last entry, or `GENESIS_HASH` before the first.
    pub(crate) last_hash: String,
}

// ── Public writer ─────────────────────────────────────────────────────────────

/// An append-only access log backed by a SHA-256 hash chain.
pub struct InMemoryAccessLog {
    log_id: String,
    pub(crate) state: Mutex<LogState>,
}

impl InMemoryAccessLog {
    /// Create an empty log. `log_id` is mixed into every entry hash, so logs
    /// with different ids never share a valid chain.
    pub fn new(log_id: impl Into<String>) -> Self {
        Self {
            log_id: log_id.into(),
            state: Mutex::new(LogState {
                entries: Vec::new(),
                last_hash: AccessLogEntry::GENESIS_HASH.to_string(),
            }),
        }
    }

    /// Snapshot every entry written so far.
    pub fn export_log(&self) -> AccessLog {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let terminal_hash = state
            .entries
            .last()
            .map(|e| e.this_hash.clone())
            .unwrap_or_default();

        AccessLog {
            log_id: self.log_id.clone(),
            entries: state.entries.clone(),
            exported_at: Utc::now(),
            terminal_hash,
        }
    }

    /// Recheck the whole chain.
    pub fn verify_integrity(&self) -> bool {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        verify_chain(&state.entries)
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ── AccessAuditWriter impl ────────────────────────────────────────────────────

impl AccessAuditWriter for InMemoryAccessLog {
    fn write(&self, record: &AccessRecord) -> HmsResult<()> {
        // Every append completes before the guard drops, so a poisoned lock
        // still holds a consistent chain.
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        let sequence = state.entries.len() as u64;
        let prev_hash = state.last_hash.clone();
        let this_hash = hash_entry(&self.log_id, sequence, record, &prev_hash)?;

        debug!(log_id = %self.log_id, sequence, "access event recorded");

        state.entries.push(AccessLogEntry {
            sequence,
            log_id: self.log_id.clone(),
            record: record.clone(),
            prev_hash,
            this_hash: this_hash.clone(),
        });
        state.last_hash = this_hash;

        Ok(())
    }
}
