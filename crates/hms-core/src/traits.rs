//! Trait seams between the session machinery and its collaborators.
//!
//! - `RoleResolver`      — trusted, immutable role → permission table
//! - `Authorizer`        — the question UI code asks ("may I show this?")
//! - `AccessAuditWriter` — append-only sink for session events
//!
//! The session store and authorization gate only ever talk to these traits,
//! so tests can swap in fixed tables or failing sinks.

use hms_contracts::{
    access::AccessRecord,
    error::HmsResult,
    role::{Permission, PermissionSet, RoleId},
};

/// Resolves a role reference to the permissions it grants.
///
/// Implementations must be deterministic and side-effect free; the gate calls
/// this on every permission check rather than caching per identity.
pub trait RoleResolver: Send + Sync {
    /// Return the permission set for `role`, or `None` if the role is not
    /// configured.
    fn permissions_for(&self, role: &RoleId) -> Option<&PermissionSet>;
}

/// Answers permission questions for whoever is currently signed in.
pub trait Authorizer: Send + Sync {
    /// Return true if the current identity holds `permission`.
    ///
    /// Must return false when nobody is signed in and for tokens the
    /// current role does not carry, known or not.
    fn has_permission(&self, permission: &Permission) -> bool;
}

/// The access log: one record per login attempt or effective logout.
pub trait AccessAuditWriter: Send + Sync {
    /// Append one record. Implementations never modify earlier records.
    fn write(&self, record: &AccessRecord) -> HmsResult<()>;
}
