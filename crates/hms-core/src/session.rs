//! The session store: the single signed-in slot.
//!
//! States:
//!
//!   SignedOut ──login(ok)──▶ SignedIn(identity) ──logout──▶ SignedOut
//!
//! `login` is the only suspension point. It waits for the configured latency
//! before checking credentials, so a pending login never blocks other work on
//! the same runtime. There is no lock against concurrent logins and no way to
//! cancel one; the caller is expected to disable duplicate submissions.
//!
//! The current state lives in a `tokio::sync::watch` channel so that views
//! derived from it (visible menu, notification badge) can re-render when it
//! changes. Readers that only need the present value use `current()`.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use hms_contracts::{
    access::{AccessEvent, AccessRecord},
    error::{HmsError, HmsResult},
    identity::Identity,
    settings::SessionSettings,
};

use crate::{directory::StaffDirectory, traits::AccessAuditWriter};

/// Who, if anyone, is signed in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    SignedOut,
    SignedIn(Identity),
}

impl SessionState {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            SessionState::SignedIn(identity) => Some(identity),
            SessionState::SignedOut => None,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, SessionState::SignedIn(_))
    }
}

/// Owns the session slot. Construct one per logical session and pass it to
/// whatever needs it; there is no process-wide instance.
pub struct SessionStore {
    directory: Arc<StaffDirectory>,
    audit: Arc<dyn AccessAuditWriter>,
    settings: SessionSettings,
    state: watch::Sender<SessionState>,
}

impl SessionStore {
    /// Create a signed-out session over `directory`.
    pub fn new(
        directory: Arc<StaffDirectory>,
        audit: Arc<dyn AccessAuditWriter>,
        settings: SessionSettings,
    ) -> Self {
        let (state, _) = watch::channel(SessionState::SignedOut);
        Self { directory, audit, settings, state }
    }

    /// Attempt to sign in.
    ///
    /// Waits `settings.login_latency()` and then looks for an identity whose
    /// username matches `username` ignoring case and whose stored credential
    /// equals `password` exactly. On a match the identity becomes current
    /// (replacing whoever was signed in) and is returned.
    ///
    /// Access log failures are logged and never change the outcome: matching
    /// credentials always sign in.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` if nothing matched. The session is unchanged.
    pub async fn login(&self, username: &str, password: &str) -> HmsResult<Identity> {
        debug!(username = %username, "login attempt");

        tokio::time::sleep(self.settings.login_latency()).await;

        let matched = self
            .directory
            .find_by_username(username)
            .filter(|identity| identity.password == password);

        let Some(identity) = matched else {
            warn!(username = %username, "login failed - invalid credentials");
            let record = AccessRecord::now(AccessEvent::LoginFailed {
                username: username.to_string(),
            });
            if let Err(e) = self.audit.write(&record) {
                warn!(error = %e, "failed login could not be recorded");
            }
            return Err(HmsError::InvalidCredentials);
        };

        info!(staff_id = %identity.id, role = %identity.role, "signed in");
        self.state.send_replace(SessionState::SignedIn(identity.clone()));

        let record = AccessRecord::now(AccessEvent::LoginSucceeded {
            staff_id: identity.id.clone(),
            role: identity.role.clone(),
        });
        if let Err(e) = self.audit.write(&record) {
            warn!(staff_id = %identity.id, error = %e, "login could not be recorded");
        }
        Ok(identity)
    }

    /// Sign out. Always succeeds; calling it while signed out changes nothing
    /// and notifies no subscribers.
    pub fn logout(&self) {
        let mut signed_out = None;
        self.state.send_if_modified(|state| {
            match std::mem::replace(state, SessionState::SignedOut) {
                SessionState::SignedIn(identity) => {
                    signed_out = Some(identity);
                    true
                }
                SessionState::SignedOut => false,
            }
        });

        let Some(identity) = signed_out else {
            debug!("logout while already signed out");
            return;
        };

        info!(staff_id = %identity.id, "signed out");
        let record = AccessRecord::now(AccessEvent::Logout { staff_id: identity.id });
        if let Err(e) = self.audit.write(&record) {
            warn!(error = %e, "logout could not be recorded");
        }
    }

    /// The signed-in identity, if any.
    pub fn current(&self) -> Option<Identity> {
        self.state.borrow().identity().cloned()
    }

    /// Snapshot of the full session state.
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Run `f` against the current state without cloning it.
    pub fn with_state<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        f(&self.state.borrow())
    }

    /// Subscribe to session changes. The receiver starts at the current state.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn directory(&self) -> &Arc<StaffDirectory> {
        &self.directory
    }
}
