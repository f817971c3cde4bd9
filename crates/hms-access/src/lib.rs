//! # hms-access
//!
//! A TOML-driven role → permission table for the hospital access shell.
//!
//! ## Overview
//!
//! This crate provides [`TomlRoleTable`], which implements the
//! [`RoleResolver`](hms_core::traits::RoleResolver) trait. The permission
//! vocabulary and every role are declared in one TOML file, so UI code and
//! tests read the same single source.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use hms_access::TomlRoleTable;
//!
//! let roles = TomlRoleTable::from_file(Path::new("config/roles.toml"))?;
//! // Pass `Arc::new(roles)` to `hms_core::AuthorizationGate::new(...)`.
//! ```

pub mod config;
pub mod table;

pub use config::{RoleConfig, RoleEntry, VocabularyConfig};
pub use table::TomlRoleTable;

// ── Tests ─────────────────────────────────────────────────────────────────────
