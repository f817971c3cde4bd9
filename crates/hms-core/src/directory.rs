//! The in-memory staff directory.
//!
//! Holds every identity that can sign in. Members are registered once and
//! never removed; the roster's status toggle is the only mutation.

use std::sync::{PoisonError, RwLock};

use tracing::info;

use hms_contracts::{
    error::{HmsError, HmsResult},
    identity::{Identity, StaffId, StaffStatus},
};

/// Registry of staff identities, unique by id and by (case-insensitive)
/// username.
#[derive(Debug, Default)]
pub struct StaffDirectory {
    members: RwLock<Vec<Identity>>,
}

impl StaffDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a directory from seed records, rejecting duplicates.
    pub fn from_members(members: impl IntoIterator<Item = Identity>) -> HmsResult<Self> {
        let directory = Self::new();
        for member in members {
            directory.register(member)?;
        }
        Ok(directory)
    }

    /// Add a new staff member.
    ///
    /// Returns `DuplicateStaff` if the id or the username (ignoring case) is
    /// already taken.
    pub fn register(&self, identity: Identity) -> HmsResult<()> {
        let mut members = self.members.write().unwrap_or_else(PoisonError::into_inner);

        if members.iter().any(|m| m.id == identity.id) {
            return Err(HmsError::DuplicateStaff {
                field: "id",
                value: identity.id.0,
            });
        }
        if members.iter().any(|m| m.username_matches(&identity.username)) {
            return Err(HmsError::DuplicateStaff {
                field: "username",
                value: identity.username,
            });
        }

        info!(staff_id = %identity.id, role = %identity.role, "staff member registered");
        members.push(identity);
        Ok(())
    }

    /// Look up a member by id.
    pub fn get(&self, id: &StaffId) -> Option<Identity> {
        self.read().iter().find(|m| &m.id == id).cloned()
    }

    /// Look up a member by username, ignoring case.
    pub fn find_by_username(&self, username: &str) -> Option<Identity> {
        self.read().iter().find(|m| m.username_matches(username)).cloned()
    }

    /// Flip a member between active and on-leave. Returns the new status.
    pub fn toggle_status(&self, id: &StaffId) -> HmsResult<StaffStatus> {
        let mut members = self.members.write().unwrap_or_else(PoisonError::into_inner);
        let member = members
            .iter_mut()
            .find(|m| &m.id == id)
            .ok_or_else(|| HmsError::UnknownStaff { staff_id: id.0.clone() })?;

        member.status = member.status.toggled();
        info!(staff_id = %id, status = ?member.status, "staff status toggled");
        Ok(member.status)
    }

    /// Snapshot of every member in registration order.
    pub fn all(&self) -> Vec<Identity> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Identity>> {
        self.members.read().unwrap_or_else(PoisonError::into_inner)
    }
}
