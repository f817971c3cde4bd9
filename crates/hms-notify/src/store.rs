//! The notification store.
//!
//! Holds the master list of notifications for every identity and exposes a
//! view scoped to whoever is signed in. Scoping is a filter over the master
//! list at read time; nothing is ever removed from it.
//!
//! Scope resolution:
//!
//!   signed out                          → no scope, empty view
//!   signed in with `admin_role`         → `admin_bucket` (while redirect is on)
//!   signed in otherwise                 → the identity's own id
//!
//! The administrator redirect means every administrator account reads the
//! same bucket. It is on by default and switched off with
//! `admin_redirect = false`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use hms_contracts::{
    identity::{Identity, StaffId},
    notification::{NewNotification, Notification, NotificationId},
    settings::NotificationSettings,
};
use hms_core::SessionStore;

/// Notifications for all identities, viewed through the live session.
pub struct NotificationStore {
    session: Arc<SessionStore>,
    settings: NotificationSettings,
    master: Mutex<Vec<Notification>>,
}

impl NotificationStore {
    /// Create a store seeded with `seed`, kept in the given order.
    pub fn new(
        session: Arc<SessionStore>,
        settings: NotificationSettings,
        seed: Vec<Notification>,
    ) -> Self {
        Self {
            session,
            settings,
            master: Mutex::new(seed),
        }
    }

    /// The owner id the current view is filtered by, if anyone is signed in.
    pub fn scope(&self) -> Option<StaffId> {
        self.session
            .with_state(|state| state.identity().map(|identity| self.scope_for(identity)))
    }

    /// The current view, most recent first. Ties keep master-list order, so
    /// a freshly added notification sorts ahead of an equal timestamp.
    pub fn list(&self) -> Vec<Notification> {
        let Some(scope) = self.scope() else {
            return Vec::new();
        };

        let mut view: Vec<Notification> = self
            .master()
            .iter()
            .filter(|n| n.user_id == scope)
            .cloned()
            .collect();
        view.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        view
    }

    /// Unread entries in the current view.
    pub fn unread_count(&self) -> usize {
        let Some(scope) = self.scope() else {
            return 0;
        };

        self.master()
            .iter()
            .filter(|n| n.user_id == scope && !n.read)
            .count()
    }

    /// Mark one notification in the current view as read.
    ///
    /// Returns true if a flag actually flipped. Already-read, unknown, and
    /// out-of-scope ids are left alone.
    pub fn mark_as_read(&self, id: &NotificationId) -> bool {
        let Some(scope) = self.scope() else {
            return false;
        };

        let mut master = self.master();
        match master.iter_mut().find(|n| &n.id == id && n.user_id == scope) {
            Some(n) if !n.read => {
                n.read = true;
                debug!(notification_id = %id, "notification marked read");
                true
            }
            _ => false,
        }
    }

    /// Mark every notification in the current view as read, under a single
    /// lock so no reader sees a partially-read view. Returns how many flipped.
    pub fn mark_all_as_read(&self) -> usize {
        let Some(scope) = self.scope() else {
            return 0;
        };

        let mut flipped = 0;
        for n in self.master().iter_mut().filter(|n| n.user_id == scope && !n.read) {
            n.read = true;
            flipped += 1;
        }

        if flipped > 0 {
            info!(scope = %scope, count = flipped, "all notifications marked read");
        }
        flipped
    }

    /// Append a new unread notification to the front of the master list.
    pub fn add(&self, notification: NewNotification) -> NotificationId {
        let id = NotificationId::generate();
        debug!(
            notification_id = %id,
            user_id = %notification.user_id,
            kind = ?notification.kind,
            "notification added"
        );
        self.master().insert(0, notification.into_notification(id.clone()));
        id
    }

    /// Snapshot of the unscoped master list, in stored order.
    pub fn all(&self) -> Vec<Notification> {
        self.master().clone()
    }

    fn scope_for(&self, identity: &Identity) -> StaffId {
        if self.settings.admin_redirect && identity.role == self.settings.admin_role {
            self.settings.admin_bucket.clone()
        } else {
            identity.id.clone()
        }
    }

    fn master(&self) -> MutexGuard<'_, Vec<Notification>> {
        self.master.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
