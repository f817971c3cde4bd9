//! TOML-backed role table.
//!
//! `TomlRoleTable` loads a `RoleConfig` from a TOML string or file, validates
//! it, and implements the `RoleResolver` trait from hms-core.
//!
//! Validation on load:
//!
//! 1. Role ids are unique.
//! 2. Every token a role lists appears in the vocabulary.
//!
//! After loading the table is immutable. `with_grant` builds a new table
//! rather than editing in place.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::Path,
};

use tracing::debug;

use hms_contracts::{
    error::{HmsError, HmsResult},
    role::{Permission, PermissionSet, Role, RoleId},
};
use hms_core::traits::RoleResolver;

use crate::config::RoleConfig;

/// An immutable role → permission table read from a TOML document.
///
/// ```rust,ignore
/// use hms_access::TomlRoleTable;
///
/// let roles = TomlRoleTable::from_file(Path::new("config/roles.toml"))?;
/// ```
#[derive(Debug, Clone)]
pub struct TomlRoleTable {
    vocabulary: BTreeSet<Permission>,
    roles: BTreeMap<RoleId, Role>,
}

impl TomlRoleTable {
    /// Parse `s` as TOML and build a validated table.
    ///
    /// Returns `HmsError::ConfigError` if the TOML is malformed, a role id
    /// repeats, or a role grants a token outside the vocabulary.
    pub fn from_toml_str(s: &str) -> HmsResult<Self> {
        let config: RoleConfig = toml::from_str(s).map_err(|e| HmsError::ConfigError {
            reason: format!("failed to parse role TOML: {}", e),
        })?;
        Self::from_config(config)
    }

    /// Read the file at `path` and parse it as a role table.
    pub fn from_file(path: &Path) -> HmsResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| HmsError::ConfigError {
            reason: format!("failed to read role file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Validate an already-deserialized configuration.
    pub fn from_config(config: RoleConfig) -> HmsResult<Self> {
        let vocabulary: BTreeSet<Permission> =
            config.vocabulary.permissions.into_iter().map(Permission::new).collect();

        let mut roles = BTreeMap::new();
        for entry in config.roles {
            let id = RoleId::new(entry.id);

            let mut permissions = PermissionSet::default();
            for token in entry.permissions.into_iter().map(Permission::new) {
                if !vocabulary.contains(&token) {
                    return Err(HmsError::ConfigError {
                        reason: format!(
                            "role '{}' grants unknown permission '{}'",
                            id, token
                        ),
                    });
                }
                permissions.grant(token);
            }

            let role = Role {
                name: entry.name.unwrap_or_else(|| id.0.clone()),
                id: id.clone(),
                permissions,
            };

            if roles.insert(id.clone(), role).is_some() {
                return Err(HmsError::ConfigError {
                    reason: format!("role '{}' is defined more than once", id),
                });
            }
        }

        debug!(
            roles = roles.len(),
            vocabulary = vocabulary.len(),
            "role table loaded"
        );

        Ok(Self { vocabulary, roles })
    }

    /// Look up a role by id.
    pub fn role(&self, id: &RoleId) -> Option<&Role> {
        self.roles.get(id)
    }

    /// All configured roles, ordered by id.
    pub fn roles(&self) -> impl Iterator<Item = &Role> {
        self.roles.values()
    }

    pub fn contains_role(&self, id: &RoleId) -> bool {
        self.roles.contains_key(id)
    }

    /// The permission vocabulary, sorted.
    pub fn vocabulary(&self) -> impl Iterator<Item = &Permission> {
        self.vocabulary.iter()
    }

    /// Return true if `permission` is part of the vocabulary.
    pub fn is_known(&self, permission: &Permission) -> bool {
        self.vocabulary.contains(permission)
    }

    /// Return a copy of this table with `permission` added to `role`.
    ///
    /// Fails with `ConfigError` for an unknown role or a token outside the
    /// vocabulary, under the same rules applied on load.
    pub fn with_grant(&self, role: &RoleId, permission: Permission) -> HmsResult<Self> {
        if !self.is_known(&permission) {
            return Err(HmsError::ConfigError {
                reason: format!("cannot grant unknown permission '{}'", permission),
            });
        }

        let mut next = self.clone();
        let target = next.roles.get_mut(role).ok_or_else(|| HmsError::ConfigError {
            reason: format!("cannot grant to unknown role '{}'", role),
        })?;
        target.permissions.grant(permission);
        Ok(next)
    }
}

impl RoleResolver for TomlRoleTable {
    fn permissions_for(&self, role: &RoleId) -> Option<&PermissionSet> {
        self.roles.get(role).map(|r| &r.permissions)
    }
}
