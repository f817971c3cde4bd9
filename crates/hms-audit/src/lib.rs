//! # hms-audit
//!
//! Append-only, SHA-256 hash-chained log of session access events.
//!
//! Every login attempt and logout the session store records is wrapped in an
//! `AccessLogEntry` linked to its predecessor by hash. Editing any stored
//! entry breaks the chain and `verify_chain` reports it.
//!
//! ```rust,ignore
//! use hms_audit::InMemoryAccessLog;
//!
//! let log = Arc::new(InMemoryAccessLog::new("ward-terminal-3"));
//! let session = SessionStore::new(directory, log.clone(), settings);
//! // ... logins and logouts ...
//! assert!(log.verify_integrity());
//! ```

pub mod chain;
pub mod entry;
pub mod memory;

pub use chain::{hash_entry, verify_chain};
pub use entry::{AccessLog, AccessLogEntry};
pub use memory::InMemoryAccessLog;

// ── Tests ─────────────────────────────────────────────────────────────────────
