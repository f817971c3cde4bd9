//! Menu tree types and configuration schema.
//!
//! A `MenuTree` is deserialized from TOML: an ordered list of groups, each
//! holding an ordered list of items. An item without a `permission` is open
//! to everyone, signed in or not.

use std::{collections::HashSet, path::Path};

use serde::{Deserialize, Serialize};

use hms_contracts::{
    error::{HmsError, HmsResult},
    role::Permission,
};

/// One navigable page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Page id, unique across the whole tree. Notification links target it.
    pub page: String,

    pub label: String,

    /// Required permission, or `None` for universally accessible pages.
    #[serde(default)]
    pub permission: Option<Permission>,
}

/// A titled section of the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuGroup {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

/// The full, unfiltered sidebar.
///
/// Example:
/// ```toml
/// [[groups]]
/// id = "main"
/// label = "Main"
///
///   [[groups.items]]
///   page = "dashboard"
///   label = "Dashboard"
///
///   [[groups.items]]
///   page = "patients"
///   label = "Patients"
///   permission = "patient:read"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuTree {
    #[serde(default)]
    pub groups: Vec<MenuGroup>,
}

impl MenuTree {
    /// Parse and validate a menu tree.
    ///
    /// Returns `HmsError::ConfigError` on malformed TOML or when a page id
    /// appears more than once.
    pub fn from_toml_str(s: &str) -> HmsResult<Self> {
        let tree: MenuTree = toml::from_str(s).map_err(|e| HmsError::ConfigError {
            reason: format!("failed to parse menu TOML: {}", e),
        })?;
        tree.validate()?;
        Ok(tree)
    }

    pub fn from_file(path: &Path) -> HmsResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| HmsError::ConfigError {
            reason: format!("failed to read menu file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Find an item by page id.
    pub fn item(&self, page: &str) -> Option<&MenuItem> {
        self.items().find(|item| item.page == page)
    }

    /// Every item in display order.
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.groups.iter().flat_map(|g| g.items.iter())
    }

    /// Every distinct permission the tree references.
    pub fn permissions(&self) -> impl Iterator<Item = &Permission> {
        let mut seen = HashSet::new();
        self.items()
            .filter_map(|item| item.permission.as_ref())
            .filter(move |p| seen.insert(*p))
    }

    fn validate(&self) -> HmsResult<()> {
        let mut pages = HashSet::new();
        for item in self.items() {
            if !pages.insert(item.page.as_str()) {
                return Err(HmsError::ConfigError {
                    reason: format!("menu page '{}' is defined more than once", item.page),
                });
            }
        }
        Ok(())
    }
}
