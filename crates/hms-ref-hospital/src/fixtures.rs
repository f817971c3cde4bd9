//! Seed configuration for the reference hospital.
//!
//! All data here is fictional. The five TOML documents are embedded at build
//! time; `Fixtures::from_dir` reads replacements from disk with the same
//! file names.

use std::path::Path;

use serde::Deserialize;

use hms_contracts::{
    error::{HmsError, HmsResult},
    identity::Identity,
    notification::Notification,
    settings::HospitalSettings,
};

pub const ROLES_FILE: &str = "roles.toml";
pub const STAFF_FILE: &str = "staff.toml";
pub const MENU_FILE: &str = "menu.toml";
pub const NOTIFICATIONS_FILE: &str = "notifications.toml";
pub const SETTINGS_FILE: &str = "hospital.toml";

/// The raw TOML sources a hospital is bootstrapped from.
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub roles: String,
    pub staff: String,
    pub menu: String,
    pub notifications: String,
    pub settings: String,
}

#[derive(Deserialize)]
struct StaffFile {
    #[serde(default)]
    staff: Vec<Identity>,
}

#[derive(Deserialize)]
struct NotificationFile {
    #[serde(default)]
    notifications: Vec<Notification>,
}

impl Fixtures {
    /// The fixtures compiled into this crate.
    pub fn embedded() -> Self {
        Self {
            roles: include_str!("../config/roles.toml").to_string(),
            staff: include_str!("../config/staff.toml").to_string(),
            menu: include_str!("../config/menu.toml").to_string(),
            notifications: include_str!("../config/notifications.toml").to_string(),
            settings: include_str!("../config/hospital.toml").to_string(),
        }
    }

    /// Read all five files from `dir`.
    pub fn from_dir(dir: &Path) -> HmsResult<Self> {
        let read = |name: &str| {
            let path = dir.join(name);
            std::fs::read_to_string(&path).map_err(|e| HmsError::ConfigError {
                reason: format!("failed to read '{}': {}", path.display(), e),
            })
        };

        Ok(Self {
            roles: read(ROLES_FILE)?,
            staff: read(STAFF_FILE)?,
            menu: read(MENU_FILE)?,
            notifications: read(NOTIFICATIONS_FILE)?,
            settings: read(SETTINGS_FILE)?,
        })
    }

    pub fn parse_staff(&self) -> HmsResult<Vec<Identity>> {
        let file: StaffFile = parse(STAFF_FILE, &self.staff)?;
        Ok(file.staff)
    }

    pub fn parse_notifications(&self) -> HmsResult<Vec<Notification>> {
        let file: NotificationFile = parse(NOTIFICATIONS_FILE, &self.notifications)?;
        Ok(file.notifications)
    }

    pub fn parse_settings(&self) -> HmsResult<HospitalSettings> {
        parse(SETTINGS_FILE, &self.settings)
    }
}

fn parse<T: serde::de::DeserializeOwned>(name: &str, source: &str) -> HmsResult<T> {
    toml::from_str(source).map_err(|e| HmsError::ConfigError {
        reason: format!("failed to parse {}: {}", name, e),
    })
}
