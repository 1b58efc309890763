//! Session controller — the façade pages use to mutate session state.
//!
//! DESIGN
//! ======
//! Every operation is a two-phase command: dispatch `OperationStarted`,
//! await a single remote call, dispatch exactly one terminal event. The
//! single-flight check happens before anything is dispatched, so a busy
//! rejection leaves the store byte-for-byte unchanged. The controller is
//! generic over its two seams: [`IdentityService`] (the remote boundary)
//! and [`SessionHandle`] (the store), so the whole flow runs under plain
//! native tests with scripted fakes.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use leptos::prelude::{GetUntracked, RwSignal, Update};

use crate::net::api::AuthError;
use crate::net::types::{AuthResponse, RegistrationInput};
use crate::state::session::{SessionEvent, SessionState, SessionStoreError};

/// Remote identity-service operations the controller depends on.
///
/// Implemented by [`crate::net::api::IdentityApi`] over HTTP and by
/// scripted fakes in tests.
#[allow(async_fn_in_trait)]
pub trait IdentityService {
    async fn register(&self, input: &RegistrationInput) -> Result<AuthResponse, AuthError>;
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, AuthError>;
    /// Look up an existing session via the ambient credential.
    async fn current_session(&self) -> Result<AuthResponse, AuthError>;
    async fn logout(&self) -> Result<(), AuthError>;
}

/// Read/dispatch access to the session store.
pub trait SessionHandle {
    fn read(&self) -> SessionState;
    /// Apply one event to the owned state.
    ///
    /// # Errors
    ///
    /// Propagates [`SessionStoreError`] from the transition function.
    fn dispatch(&self, event: SessionEvent) -> Result<(), SessionStoreError>;
}

impl SessionHandle for RwSignal<SessionState> {
    fn read(&self) -> SessionState {
        self.get_untracked()
    }

    fn dispatch(&self, event: SessionEvent) -> Result<(), SessionStoreError> {
        // A disposed signal means the app is unmounting; drop the event.
        self.try_update(|state| state.apply(event)).unwrap_or(Ok(()))
    }
}

/// Drives the session state machine from remote-call outcomes.
#[derive(Clone, Debug)]
pub struct SessionController<S, H> {
    identity: S,
    store: H,
}

impl<S: IdentityService, H: SessionHandle> SessionController<S, H> {
    pub fn new(identity: S, store: H) -> Self {
        Self { identity, store }
    }

    /// Single-flight gate shared by all four operations.
    fn begin(&self) -> Result<(), SessionStoreError> {
        if self.store.read().loading {
            return Err(SessionStoreError::Busy);
        }
        self.store.dispatch(SessionEvent::OperationStarted)
    }

    /// Create an account. Input is validated by the caller; see
    /// [`crate::util::validate`].
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Busy`] when another operation is in
    /// flight. Remote failures are absorbed into session state, not
    /// returned.
    pub async fn register(&self, input: RegistrationInput) -> Result<(), SessionStoreError> {
        self.begin()?;
        let event = match self.identity.register(&input).await {
            Ok(resp) => SessionEvent::AuthSucceeded {
                user: resp.user,
                message: resp.message,
            },
            Err(e) => SessionEvent::AuthFailed {
                error: e.to_string(),
            },
        };
        self.store.dispatch(event)
    }

    /// Authenticate with email and password. Both must be non-empty;
    /// the caller rejects whitespace-only input before invoking this.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Busy`] when another operation is in
    /// flight. Remote failures are absorbed into session state.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), SessionStoreError> {
        self.begin()?;
        let event = match self.identity.login(email, password).await {
            Ok(resp) => SessionEvent::AuthSucceeded {
                user: resp.user,
                message: resp.message,
            },
            Err(e) => SessionEvent::AuthFailed {
                error: e.to_string(),
            },
        };
        self.store.dispatch(event)
    }

    /// Recover an existing session from the ambient credential, once at
    /// application start. Silent both ways: success carries no message
    /// and a missing session is an expected outcome, never a visible
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Busy`] when another operation is in
    /// flight.
    pub async fn check_session(&self) -> Result<(), SessionStoreError> {
        self.begin()?;
        let event = match self.identity.current_session().await {
            Ok(resp) => SessionEvent::AuthSucceeded {
                user: resp.user,
                message: None,
            },
            // No session (or an unreachable service) on load is not an
            // error; land in the anonymous state without a notification.
            Err(_) => SessionEvent::LoggedOut,
        };
        self.store.dispatch(event)
    }

    /// End the session. The remote invalidation call is attempted but
    /// its outcome never blocks the local transition; the client must
    /// not stay authenticated-looking because of a network blip.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Busy`] when another operation is in
    /// flight.
    pub async fn logout(&self) -> Result<(), SessionStoreError> {
        self.begin()?;
        if let Err(e) = self.identity.logout().await {
            leptos::logging::warn!("remote logout failed: {e}");
        }
        self.store.dispatch(SessionEvent::LoggedOut)
    }
}
