//! Session access events and the records written to the access log.
//!
//! Every login attempt and every effective logout produces exactly one
//! `AccessRecord`. The audit writer appends it; records are never modified.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{identity::StaffId, role::RoleId};

/// What happened to the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AccessEvent {
    /// A login attempt matched an identity and the session now holds it.
    LoginSucceeded { staff_id: StaffId, role: RoleId },

    /// A login attempt did not match. `username` is the submitted value,
    /// not necessarily an existing account.
    LoginFailed { username: String },

    /// A signed-in identity signed out.
    Logout { staff_id: StaffId },
}

/// An immutable record of one session event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRecord {
    pub event: AccessEvent,
    /// Wall-clock time the record was created (UTC).
    pub timestamp: DateTime<Utc>,
}

impl AccessRecord {
    /// Stamp `event` with the current time.
    pub fn now(event: AccessEvent) -> Self {
        Self { event, timestamp: Utc::now() }
    }
}
