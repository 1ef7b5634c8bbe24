//! Mock-authentication session controller.
//!
//! Owns the single current [`Session`], mirrors every change to a
//! [`SessionStore`], and reports which view region should be visible through
//! [`ViewState`]. The "network" behind login and register is a fixed timer;
//! no credentials are ever checked beyond presence.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::{AuthError, AuthResult};
use crate::store::SessionStore;

/// The authenticated identity. Either fully present or entirely absent;
/// there is no partial session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque identifier, unique per account.
    pub id: String,
    /// Display name shown in the authenticated region.
    pub name: String,
    /// Contact address the session was created with.
    pub email: String,
}

impl Session {
    /// Synthesize a session for a login: the display name is the local part
    /// of the address, up to the first `@`.
    fn from_login(email: &str) -> Self {
        let name = email.split('@').next().unwrap_or(email);
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    /// Synthesize a session for a registration with an explicit display name.
    fn from_registration(name: &str, email: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
        }
    }
}

/// Which of the two mutually exclusive view regions is active.
///
/// The controller never touches presentation itself; it returns this value
/// after every mutation and the rendering boundary applies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// Show the anonymous controls (login/register buttons).
    Anonymous,
    /// Show the authenticated info (user name, logout button).
    Authenticated,
}

impl ViewState {
    /// Derive the view state from session presence.
    pub fn from_session(session: Option<&Session>) -> Self {
        match session {
            Some(_) => ViewState::Authenticated,
            None => ViewState::Anonymous,
        }
    }

    /// Whether the authenticated region is the active one.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, ViewState::Authenticated)
    }
}

/// Controller owning the current session.
///
/// View state is derived from the session under a single lock, so it can
/// never disagree with session presence, not even transiently.
pub struct SessionController {
    current: RwLock<Option<Session>>,
    store: Arc<dyn SessionStore>,
    network_delay: Duration,
    attempts: AtomicU64,
}

impl SessionController {
    /// Create a controller with no current session.
    pub fn new(store: Arc<dyn SessionStore>, config: &AuthConfig) -> Self {
        Self {
            current: RwLock::new(None),
            store,
            network_delay: Duration::from_millis(config.network_delay_ms),
            attempts: AtomicU64::new(0),
        }
    }

    /// Adopt the mirrored session from a previous run, if one exists.
    ///
    /// Called once at startup. A readable mirror is adopted without
    /// re-validation; an absent or unreadable mirror leaves the controller
    /// anonymous. Unreadable mirrors are logged and swallowed.
    pub async fn restore(&self) -> ViewState {
        match self.store.load().await {
            Ok(Some(session)) => {
                info!(user = %session.name, "restored persisted session");
                *self.current.write().unwrap() = Some(session);
            }
            Ok(None) => {
                debug!("no persisted session");
            }
            Err(e) => {
                warn!(error = %e, "persisted session unreadable, treating as logged out");
            }
        }
        self.view_state()
    }

    /// Log in with an address and secret.
    ///
    /// Both inputs must be non-empty, otherwise fails with
    /// [`AuthError::InvalidCredentials`] before the mock round-trip and
    /// without touching state. On success the synthesized session becomes
    /// current and the mirror is overwritten.
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<Session> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }
        self.round_trip(Session::from_login(email)).await
    }

    /// Register a new account with a name, address and secret.
    ///
    /// All three inputs must be non-empty, otherwise fails with
    /// [`AuthError::InvalidRegistration`]. Same success contract as
    /// [`SessionController::login`].
    pub async fn register(&self, name: &str, email: &str, password: &str) -> AuthResult<Session> {
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AuthError::InvalidRegistration);
        }
        self.round_trip(Session::from_registration(name, email)).await
    }

    /// Clear the current session and its persisted mirror. Never fails;
    /// mirror errors on clear are logged and swallowed.
    pub async fn logout(&self) -> ViewState {
        self.adopt(None).await;
        info!("logged out");
        ViewState::Anonymous
    }

    /// Snapshot of the current session, if any.
    pub fn current(&self) -> Option<Session> {
        self.current.read().unwrap().clone()
    }

    /// Which view region should be visible right now.
    pub fn view_state(&self) -> ViewState {
        ViewState::from_session(self.current.read().unwrap().as_ref())
    }

    /// Simulated network round-trip with attempt sequencing.
    ///
    /// Each attempt takes a monotonically increasing number before sleeping.
    /// An attempt that is no longer the newest when it wakes resolves
    /// [`AuthError::Superseded`] and leaves all state untouched, so a slow
    /// stale completion can never overwrite a newer session.
    async fn round_trip(&self, session: Session) -> AuthResult<Session> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.network_delay).await;

        if attempt != self.attempts.load(Ordering::SeqCst) {
            debug!(attempt, "discarding superseded auth attempt");
            return Err(AuthError::Superseded { attempt });
        }

        info!(user = %session.name, "authenticated");
        self.adopt(Some(session.clone())).await;
        Ok(session)
    }

    /// Replace the current session and bring the mirror in line: saved on
    /// presence, removed on absence. The in-memory session is the owner;
    /// mirror failures are logged, not propagated.
    async fn adopt(&self, session: Option<Session>) {
        *self.current.write().unwrap() = session.clone();

        let result = match &session {
            Some(s) => self.store.save(s).await,
            None => self.store.clear().await,
        };
        if let Err(e) = result {
            warn!(error = %e, "failed to update persisted session mirror");
        }
    }
}
