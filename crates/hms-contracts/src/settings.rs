//! Runtime settings for the session and notification stores.
//!
//! Deserialized from the `[session]` and `[notifications]` tables of the
//! hospital configuration file. Every field has a default, so an empty file
//! yields the stock behaviour.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{identity::StaffId, role::RoleId};

/// Default simulated login round-trip.
pub const DEFAULT_LOGIN_LATENCY_MS: u64 = 800;

/// Session store settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    /// How long `login` suspends before checking credentials.
    #[serde(default = "default_login_latency_ms")]
    pub login_latency_ms: u64,
}

impl SessionSettings {
    pub fn login_latency(&self) -> Duration {
        Duration::from_millis(self.login_latency_ms)
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self { login_latency_ms: DEFAULT_LOGIN_LATENCY_MS }
    }
}

fn default_login_latency_ms() -> u64 {
    DEFAULT_LOGIN_LATENCY_MS
}

/// Notification scoping settings.
///
/// While `admin_redirect` is on, an identity holding `admin_role` sees the
/// `admin_bucket` identity's notifications rather than its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    #[serde(default = "default_admin_redirect")]
    pub admin_redirect: bool,
    #[serde(default = "default_admin_role")]
    pub admin_role: RoleId,
    #[serde(default = "default_admin_bucket")]
    pub admin_bucket: StaffId,
}

impl NotificationSettings {
    /// Settings under which every identity reads its own bucket.
    pub fn without_admin_redirect() -> Self {
        Self { admin_redirect: false, ..Self::default() }
    }
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            admin_redirect: default_admin_redirect(),
            admin_role: default_admin_role(),
            admin_bucket: default_admin_bucket(),
        }
    }
}

fn default_admin_redirect() -> bool {
    true
}

fn default_admin_role() -> RoleId {
    RoleId::new("Administrator")
}

fn default_admin_bucket() -> StaffId {
    StaffId::new("S005")
}

/// The top-level settings document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HospitalSettings {
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub notifications: NotificationSettings,
}
