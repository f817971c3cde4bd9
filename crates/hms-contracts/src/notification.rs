//! Notification records and their identifiers.
//!
//! Each notification belongs to exactly one identity. Records are created by
//! page-level flows (lab results, claim rejections, stock alerts, ...) and are
//! only ever mutated by flipping `read` to true.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::StaffId;

/// Unique identifier for a notification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(pub String);

impl NotificationId {
    /// Generate a fresh, unique notification ID.
    pub fn generate() -> Self {
        Self(format!("N-{}", uuid::Uuid::new_v4()))
    }
}

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What raised the notification. Drives the icon in the header dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Lab,
    Appointment,
    Inventory,
    Billing,
    Claim,
    Crisis,
}

/// Where clicking a notification should take the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationLink {
    /// Target page id, matching a menu item's `page`.
    pub page: String,
    /// Optional record to focus on the target page (e.g. a claim id).
    #[serde(default)]
    pub entity_id: Option<String>,
}

/// A notification as stored in the master list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub link: Option<NotificationLink>,
    /// The identity whose bucket this notification lives in.
    pub user_id: StaffId,
}

/// A notification before the store assigns it an id and read flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNotification {
    pub kind: NotificationKind,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub link: Option<NotificationLink>,
    pub user_id: StaffId,
}

impl NewNotification {
    /// Materialize as an unread notification with the given id.
    pub fn into_notification(self, id: NotificationId) -> Notification {
        Notification {
            id,
            kind: self.kind,
            message: self.message,
            read: false,
            timestamp: self.timestamp,
            link: self.link,
            user_id: self.user_id,
        }
    }
}
