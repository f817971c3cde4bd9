//! Role table configuration schema.
//!
//! A `RoleConfig` is deserialized from TOML. It declares the permission
//! vocabulary once and then every role as a list of tokens from it.

use serde::{Deserialize, Serialize};

/// The closed set of permission tokens UI code may reference.
///
/// Example in TOML:
/// ```toml
/// [vocabulary]
/// permissions = ["patient:read", "patient:write", "admin:users"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VocabularyConfig {
    pub permissions: Vec<String>,
}

/// A single role as written in the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleEntry {
    /// Stable identifier referenced by staff records.
    pub id: String,

    /// Display name. Defaults to `id` when omitted.
    #[serde(default)]
    pub name: Option<String>,

    /// Free-text note for whoever maintains the file. Not used at runtime.
    #[serde(default)]
    pub description: Option<String>,

    /// Tokens granted to this role. Every entry must appear in the vocabulary.
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// The top-level structure of a role table file.
///
/// Example:
/// ```toml
/// [vocabulary]
/// permissions = ["patient:read", "patient:write"]
///
/// [[roles]]
/// id = "Nurse"
/// permissions = ["patient:read", "patient:write"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleConfig {
    pub vocabulary: VocabularyConfig,
    #[serde(default)]
    pub roles: Vec<RoleEntry>,
}
