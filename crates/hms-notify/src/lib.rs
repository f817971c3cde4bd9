//! # hms-notify
//!
//! Per-identity notifications for the hospital access shell.
//!
//! [`NotificationStore`] owns the master list and reads the current identity
//! from a shared [`SessionStore`](hms_core::SessionStore), so the header badge
//! (`unread_count`) and dropdown (`list`) always reflect whoever is signed in.

pub mod store;

pub use store::NotificationStore;

// ── Tests ─────────────────────────────────────────────────────────────────────
