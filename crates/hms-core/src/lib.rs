//! # hms-core
//!
//! Session and authorization core for the hospital access shell.
//!
//! This crate provides:
//! - The trait seams (`RoleResolver`, `Authorizer`, `AccessAuditWriter`)
//! - The `StaffDirectory` of identities that can sign in
//! - The `SessionStore` holding the single signed-in slot
//! - The `AuthorizationGate` that answers permission checks against it
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hms_core::{AuthorizationGate, SessionStore, traits::Authorizer};
//!
//! session.login("shacomputec", password).await?;
//! if gate.has_permission(&Permission::new("admin:users")) { /* ... */ }
//! ```

pub mod directory;
pub mod gate;
pub mod session;
pub mod traits;

pub use directory::StaffDirectory;
pub use gate::AuthorizationGate;
pub use session::{SessionState, SessionStore};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
        time::Duration,
    };

    use hms_contracts::{
        access::{AccessEvent, AccessRecord},
        error::{HmsError, HmsResult},
        identity::{Identity, StaffId, StaffStatus},
        role::{Permission, PermissionSet, RoleId},
        settings::SessionSettings,
    };

    use super::{
        traits::{AccessAuditWriter, Authorizer, RoleResolver},
        AuthorizationGate, SessionState, SessionStore, StaffDirectory,
    };

    // ── Test doubles ──────────────────────────────────────────────────────────

    struct FixedRoles(HashMap<RoleId, PermissionSet>);

    impl RoleResolver for FixedRoles {
        fn permissions_for(&self, role: &RoleId) -> Option<&PermissionSet> {
            self.0.get(role)
        }
    }

    #[derive(Default)]
    struct RecordingAudit(Mutex<Vec<AccessRecord>>);

    impl RecordingAudit {
        fn events(&self) -> Vec<AccessEvent> {
            self.0.lock().unwrap().iter().map(|r| r.event.clone()).collect()
        }
    }

    impl AccessAuditWriter for RecordingAudit {
        fn write(&self, record: &AccessRecord) -> HmsResult<()> {
            self.0.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    struct FailingAudit;

    impl AccessAuditWriter for FailingAudit {
        fn write(&self, _record: &AccessRecord) -> HmsResult<()> {
            Err(HmsError::AuditWriteFailed { reason: "sink offline".to_string() })
        }
    }

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn staff(id: &str, username: &str, password: &str, role: &str) -> Identity {
        Identity {
            id: StaffId::new(id),
            name: format!("Staff {id}"),
            username: username.to_string(),
            password: password.to_string(),
            role: RoleId::new(role),
            status: StaffStatus::Active,
            contact: Default::default(),
        }
    }

    fn perms(names: &[&str]) -> PermissionSet {
        names.iter().map(|n| Permission::new(*n)).collect()
    }

    fn directory() -> Arc<StaffDirectory> {
        Arc::new(
            StaffDirectory::from_members([
                staff("S005", "shacomputec", "Admin@2024", "Administrator"),
                staff("S007", "aowusu", "ward-7", "Nurse"),
                staff("S099", "ghost", "boo", "Janitor"),
            ])
            .unwrap(),
        )
    }

    fn roles() -> Arc<FixedRoles> {
        let mut table = HashMap::new();
        table.insert(
            RoleId::new("Administrator"),
            perms(&["patient:read", "patient:write", "admin:users", "admin:settings"]),
        );
        table.insert(RoleId::new("Nurse"), perms(&["patient:read", "patient:write"]));
        Arc::new(FixedRoles(table))
    }

    fn instant() -> SessionSettings {
        SessionSettings { login_latency_ms: 0 }
    }

    fn session_with(audit: Arc<dyn AccessAuditWriter>) -> Arc<SessionStore> {
        Arc::new(SessionStore::new(directory(), audit, instant()))
    }

    fn gate_for(session: &Arc<SessionStore>) -> AuthorizationGate {
        AuthorizationGate::new(Arc::clone(session), roles())
    }

    // ── Session: login ────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_login_with_seeded_credentials_signs_in() {
        let session = session_with(Arc::new(RecordingAudit::default()));

        let identity = session.login("shacomputec", "Admin@2024").await.unwrap();

        assert_eq!(identity.id, StaffId::new("S005"));
        assert_eq!(session.current(), Some(identity));
    }

    #[tokio::test]
    async fn test_login_username_is_case_insensitive() {
        let session = session_with(Arc::new(RecordingAudit::default()));

        let identity = session.login("ShaComputec", "Admin@2024").await.unwrap();
        assert_eq!(identity.id, StaffId::new("S005"));
    }

    #[tokio::test]
    async fn test_login_password_is_case_sensitive() {
        let session = session_with(Arc::new(RecordingAudit::default()));

        let err = session.login("shacomputec", "admin@2024").await.unwrap_err();
        assert!(matches!(err, HmsError::InvalidCredentials));
        assert_eq!(err.to_string(), "Invalid username or password.");
        assert_eq!(session.state(), SessionState::SignedOut);
    }

    #[tokio::test]
    async fn test_login_unknown_username_fails() {
        let session = session_with(Arc::new(RecordingAudit::default()));

        let err = session.login("nobody", "Admin@2024").await.unwrap_err();
        assert!(matches!(err, HmsError::InvalidCredentials));
        assert!(session.current().is_none());
    }

    #[tokio::test]
    async fn test_failed_login_keeps_existing_identity() {
        let session = session_with(Arc::new(RecordingAudit::default()));
        session.login("aowusu", "ward-7").await.unwrap();

        assert!(session.login("shacomputec", "wrong").await.is_err());
        assert_eq!(session.current().map(|i| i.id), Some(StaffId::new("S007")));
    }

    #[tokio::test]
    async fn test_second_login_replaces_identity() {
        let session = session_with(Arc::new(RecordingAudit::default()));
        session.login("aowusu", "ward-7").await.unwrap();
        session.login("shacomputec", "Admin@2024").await.unwrap();

        assert_eq!(session.current().map(|i| i.id), Some(StaffId::new("S005")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_waits_for_configured_latency() {
        let session = SessionStore::new(
            directory(),
            Arc::new(RecordingAudit::default()),
            SessionSettings { login_latency_ms: 500 },
        );

        let start = tokio::time::Instant::now();
        let (result, observed_mid_flight) = tokio::join!(session.login("aowusu", "ward-7"), async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            session.current()
        });

        assert!(result.is_ok());
        assert!(observed_mid_flight.is_none(), "session must not change before latency elapses");
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    // ── Session: logout ───────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_logout_clears_identity() {
        let session = session_with(Arc::new(RecordingAudit::default()));
        session.login("aowusu", "ward-7").await.unwrap();

        session.logout();
        assert_eq!(session.state(), SessionState::SignedOut);
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let session = session_with(Arc::new(RecordingAudit::default()));
        let mut rx = session.subscribe();

        session.logout();
        session.logout();

        assert_eq!(session.state(), SessionState::SignedOut);
        assert!(!rx.has_changed().unwrap(), "no-op logout must not notify subscribers");
    }

    #[tokio::test]
    async fn test_subscribers_see_login_and_logout() {
        let session = session_with(Arc::new(RecordingAudit::default()));
        let mut rx = session.subscribe();

        session.login("aowusu", "ward-7").await.unwrap();
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_signed_in());

        session.logout();
        assert!(rx.has_changed().unwrap());
        assert!(!rx.borrow_and_update().is_signed_in());
    }

    // ── Session: access log ───────────────────────────────────────────────────

    #[tokio::test]
    async fn test_every_session_event_is_recorded() {
        let audit = Arc::new(RecordingAudit::default());
        let session = session_with(audit.clone());

        let _ = session.login("aowusu", "nope").await;
        session.login("aowusu", "ward-7").await.unwrap();
        session.logout();
        session.logout();

        assert_eq!(
            audit.events(),
            vec![
                AccessEvent::LoginFailed { username: "aowusu".to_string() },
                AccessEvent::LoginSucceeded {
                    staff_id: StaffId::new("S007"),
                    role: RoleId::new("Nurse"),
                },
                AccessEvent::Logout { staff_id: StaffId::new("S007") },
            ]
        );
    }

    #[tokio::test]
    async fn test_unrecorded_login_still_signs_in() {
        let session = session_with(Arc::new(FailingAudit));

        for _ in 0..3 {
            let identity = session.login("aowusu", "ward-7").await.unwrap();
            assert_eq!(identity.id, StaffId::new("S007"));
            assert_eq!(session.current().map(|i| i.id), Some(StaffId::new("S007")));
            session.logout();
        }
    }

    #[tokio::test]
    async fn test_unrecorded_failure_still_reports_invalid_credentials() {
        let session = session_with(Arc::new(FailingAudit));

        let err = session.login("aowusu", "nope").await.unwrap_err();
        assert!(matches!(err, HmsError::InvalidCredentials));
    }

    // ── Authorization gate ────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_signed_out_holds_no_permissions() {
        let session = session_with(Arc::new(RecordingAudit::default()));
        let gate = gate_for(&session);

        for p in ["patient:read", "admin:users", "made:up"] {
            assert!(!gate.has_permission(&Permission::new(p)));
        }
        assert!(gate.permissions().is_empty());
    }

    #[tokio::test]
    async fn test_nurse_lacks_admin_users() {
        let session = session_with(Arc::new(RecordingAudit::default()));
        let gate = gate_for(&session);
        session.login("aowusu", "ward-7").await.unwrap();

        assert!(gate.has_permission(&Permission::new("patient:read")));
        assert!(gate.has_permission(&Permission::new("patient:write")));
        assert!(!gate.has_permission(&Permission::new("admin:users")));
    }

    #[tokio::test]
    async fn test_gate_matches_role_membership_for_every_token() {
        let session = session_with(Arc::new(RecordingAudit::default()));
        let gate = gate_for(&session);
        let table = roles();
        let vocabulary =
            ["patient:read", "patient:write", "admin:users", "admin:settings", "clinical:lab"];

        for (username, password, role) in
            [("shacomputec", "Admin@2024", "Administrator"), ("aowusu", "ward-7", "Nurse")]
        {
            session.login(username, password).await.unwrap();
            let granted = table.permissions_for(&RoleId::new(role)).unwrap();
            for p in vocabulary.iter().map(|p| Permission::new(*p)) {
                assert_eq!(gate.has_permission(&p), granted.has(&p), "{role} / {p}");
            }
        }
    }

    #[tokio::test]
    async fn test_gate_follows_session_after_logout() {
        let session = session_with(Arc::new(RecordingAudit::default()));
        let gate = gate_for(&session);
        let users = Permission::new("admin:users");

        session.login("shacomputec", "Admin@2024").await.unwrap();
        assert!(gate.has_permission(&users));

        session.logout();
        assert!(!gate.has_permission(&users));
    }

    #[tokio::test]
    async fn test_unconfigured_role_fails_closed() {
        let session = session_with(Arc::new(RecordingAudit::default()));
        let gate = gate_for(&session);
        session.login("ghost", "boo").await.unwrap();

        assert!(!gate.has_permission(&Permission::new("patient:read")));
        assert!(gate.permissions().is_empty());
    }

    // ── Staff directory ───────────────────────────────────────────────────────

    #[test]
    fn test_directory_rejects_duplicate_id() {
        let dir = directory();
        let err = dir.register(staff("S007", "someone", "x", "Nurse")).unwrap_err();
        assert!(matches!(err, HmsError::DuplicateStaff { field: "id", .. }));
    }

    #[test]
    fn test_directory_rejects_duplicate_username_ignoring_case() {
        let dir = directory();
        let err = dir.register(staff("S100", "AOWUSU", "x", "Nurse")).unwrap_err();
        assert!(matches!(err, HmsError::DuplicateStaff { field: "username", .. }));
        assert_eq!(dir.len(), 3);
    }

    #[test]
    fn test_directory_toggles_status() {
        let dir = directory();
        let id = StaffId::new("S007");

        assert_eq!(dir.toggle_status(&id).unwrap(), StaffStatus::OnLeave);
        assert_eq!(dir.get(&id).unwrap().status, StaffStatus::OnLeave);
        assert_eq!(dir.toggle_status(&id).unwrap(), StaffStatus::Active);
    }

    #[test]
    fn test_directory_toggle_unknown_staff_errors() {
        let dir = directory();
        let err = dir.toggle_status(&StaffId::new("S404")).unwrap_err();
        assert!(matches!(err, HmsError::UnknownStaff { .. }));
    }
}
