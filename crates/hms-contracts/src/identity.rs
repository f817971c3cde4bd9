//! Staff identity types.
//!
//! An `Identity` is a staff record that can authenticate and holds exactly one
//! role. Identities are created by staff registration and are never deleted;
//! the only mutation observed in practice is the status toggle.

use serde::{Deserialize, Serialize};

use crate::role::RoleId;

/// Stable identifier for a staff member.
///
/// Example: StaffId("S005")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaffId(pub String);

impl StaffId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for StaffId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Employment status shown on the staff roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StaffStatus {
    Active,
    OnLeave,
}

impl StaffStatus {
    /// The status a roster toggle moves to.
    pub fn toggled(self) -> Self {
        match self {
            StaffStatus::Active => StaffStatus::OnLeave,
            StaffStatus::OnLeave => StaffStatus::Active,
        }
    }
}

/// Contact details carried on a staff record. None of these take part in
/// authentication or authorization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

/// A staff member capable of signing in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: StaffId,
    /// Display name used in the header and on the roster.
    pub name: String,
    /// Login name. Matched case-insensitively.
    pub username: String,
    /// Stored credential. Matched exactly.
    pub password: String,
    /// The single role this identity holds.
    pub role: RoleId,
    pub status: StaffStatus,
    #[serde(flatten)]
    pub contact: ContactInfo,
}

impl Identity {
    /// Case-insensitive username comparison used by login and by the
    /// directory's uniqueness check.
    pub fn username_matches(&self, username: &str) -> bool {
        self.username.to_lowercase() == username.to_lowercase()
    }
}
