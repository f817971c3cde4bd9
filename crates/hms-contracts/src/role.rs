//! Role and permission types.
//!
//! Access is granted by role: every identity references one role, and every
//! role carries a set of permission tokens drawn from a closed vocabulary.
//! Checks are plain set membership against the role at query time.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// An opaque permission token.
///
/// Tokens are namespaced: e.g. "patient:read", "admin:users",
/// "clinical:pharmacy". A token outside the configured vocabulary is never
/// granted to any role, so checking it always yields false.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(pub String);

impl Permission {
    /// Construct a permission from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stable role identifier. Doubles as the role's display name in the seed
/// data ("Administrator", "Nurse", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleId(pub String);

impl RoleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for RoleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A deduplicated, unordered bundle of permission tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet {
    inner: BTreeSet<Permission>,
}

impl PermissionSet {
    /// Grant a permission to this set. Granting twice is a no-op.
    pub fn grant(&mut self, permission: Permission) {
        self.inner.insert(permission);
    }

    /// Return true if the set contains the given permission.
    pub fn has(&self, permission: &Permission) -> bool {
        self.inner.contains(permission)
    }

    /// Return an iterator over all granted permissions, in sorted order.
    pub fn all(&self) -> impl Iterator<Item = &Permission> {
        self.inner.iter()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        Self { inner: iter.into_iter().collect() }
    }
}

/// A named bundle of permissions assigned to identities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    pub permissions: PermissionSet,
}
