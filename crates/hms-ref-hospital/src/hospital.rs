//! Bootstrap wiring: fixtures in, a ready-to-use access shell out.
//!
//! Cross-file checks run here, after each document has been parsed on its own:
//!
//! 1. Every staff member references a configured role.
//! 2. Every permission the menu references is in the role vocabulary.
//! 3. Notifications addressed to unknown staff are kept but logged.

use std::sync::Arc;

use tracing::{info, warn};

use hms_access::TomlRoleTable;
use hms_audit::InMemoryAccessLog;
use hms_contracts::{
    error::{HmsError, HmsResult},
    settings::HospitalSettings,
};
use hms_core::{AuthorizationGate, SessionStore, StaffDirectory};
use hms_nav::{MenuTree, NavigationShell};
use hms_notify::NotificationStore;

use crate::fixtures::Fixtures;

/// Identifier mixed into every access log entry hash.
pub const ACCESS_LOG_ID: &str = "reference-hospital";

/// One fully wired access shell: a single session and everything that reads it.
pub struct Hospital {
    pub directory: Arc<StaffDirectory>,
    pub roles: Arc<TomlRoleTable>,
    pub access_log: Arc<InMemoryAccessLog>,
    pub session: Arc<SessionStore>,
    pub gate: Arc<AuthorizationGate>,
    pub notifications: NotificationStore,
    pub navigation: NavigationShell,
}

impl Hospital {
    /// Build from the embedded fixtures and settings.
    pub fn bootstrap() -> HmsResult<Self> {
        let fixtures = Fixtures::embedded();
        let settings = fixtures.parse_settings()?;
        Self::build(&fixtures, settings)
    }

    /// Build from `fixtures`, overriding their settings document with
    /// `settings`.
    pub fn build(fixtures: &Fixtures, settings: HospitalSettings) -> HmsResult<Self> {
        let roles = Arc::new(TomlRoleTable::from_toml_str(&fixtures.roles)?);

        let staff = fixtures.parse_staff()?;
        for member in &staff {
            if !roles.contains_role(&member.role) {
                return Err(HmsError::ConfigError {
                    reason: format!(
                        "staff member '{}' references unknown role '{}'",
                        member.id, member.role
                    ),
                });
            }
        }
        let directory = Arc::new(StaffDirectory::from_members(staff)?);

        let menu = MenuTree::from_toml_str(&fixtures.menu)?;
        if let Some(unknown) = menu.permissions().find(|p| !roles.is_known(p)) {
            return Err(HmsError::ConfigError {
                reason: format!("menu references unknown permission '{}'", unknown),
            });
        }

        let seed = fixtures.parse_notifications()?;
        for n in seed.iter().filter(|n| directory.get(&n.user_id).is_none()) {
            warn!(notification_id = %n.id, user_id = %n.user_id, "notification for unknown staff");
        }

        let access_log = Arc::new(InMemoryAccessLog::new(ACCESS_LOG_ID));
        let session = Arc::new(SessionStore::new(
            Arc::clone(&directory),
            access_log.clone(),
            settings.session,
        ));
        let gate = Arc::new(AuthorizationGate::new(Arc::clone(&session), roles.clone()));
        let notifications =
            NotificationStore::new(Arc::clone(&session), settings.notifications, seed);
        let navigation = NavigationShell::new(menu, gate.clone());

        info!(
            staff = directory.len(),
            roles = roles.roles().count(),
            notifications = notifications.all().len(),
            "hospital bootstrapped"
        );

        Ok(Self {
            directory,
            roles,
            access_log,
            session,
            gate,
            notifications,
            navigation,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
