//! The authorization gate.
//!
//! Answers "does the signed-in identity hold permission P" by reading the
//! session's current role and asking the `RoleResolver` for that role's
//! permissions, every time. Nothing is cached per identity, so a login,
//! logout or role-table swap is reflected on the very next check.

use std::sync::Arc;

use tracing::{debug, warn};

use hms_contracts::role::{Permission, PermissionSet};

use crate::{
    session::SessionStore,
    traits::{Authorizer, RoleResolver},
};

/// Permission checks against the live session.
pub struct AuthorizationGate {
    session: Arc<SessionStore>,
    roles: Arc<dyn RoleResolver>,
}

impl AuthorizationGate {
    pub fn new(session: Arc<SessionStore>, roles: Arc<dyn RoleResolver>) -> Self {
        Self { session, roles }
    }

    /// Every permission the signed-in identity holds. Empty when signed out
    /// or when the identity's role is not configured.
    pub fn permissions(&self) -> PermissionSet {
        self.session.with_state(|state| {
            state
                .identity()
                .and_then(|identity| self.roles.permissions_for(&identity.role))
                .cloned()
                .unwrap_or_default()
        })
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }
}

impl Authorizer for AuthorizationGate {
    fn has_permission(&self, permission: &Permission) -> bool {
        self.session.with_state(|state| {
            let Some(identity) = state.identity() else {
                debug!(permission = %permission, "permission check while signed out");
                return false;
            };

            match self.roles.permissions_for(&identity.role) {
                Some(granted) => granted.has(permission),
                None => {
                    warn!(
                        staff_id = %identity.id,
                        role = %identity.role,
                        "signed-in identity references an unconfigured role"
                    );
                    false
                }
            }
        })
    }
}
