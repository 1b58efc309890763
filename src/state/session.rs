//! Auth-session state machine for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards, the toaster, and user-aware components to
//! coordinate login redirects and identity-dependent rendering. The
//! state is mutated only through [`SessionState::apply`]; ad-hoc field
//! writes would bypass the single-flight and notification invariants.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Authentication state tracking the current user, in-flight status,
/// and the transient one-shot notification fields.
///
/// Holds two invariants for every reachable state: `authenticated` is
/// true iff `user` is present, and `error`/`message` are never both
/// present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub authenticated: bool,
    pub user: Option<User>,
    /// True while exactly one session-mutating operation is in flight.
    pub loading: bool,
    /// Last failure text, pending one-shot display by the toaster.
    pub error: Option<String>,
    /// Last success text, pending one-shot display by the toaster.
    pub message: Option<String>,
}

/// The closed set of events the session store applies.
///
/// Controllers emit the first four; the toaster emits the clear events
/// after surfacing a notification exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// A session-mutating operation began; rejected while one is in flight.
    OperationStarted,
    /// Terminal: the remote call produced an authenticated session.
    AuthSucceeded {
        user: User,
        message: Option<String>,
    },
    /// Terminal: the remote call failed; prior authentication survives.
    AuthFailed { error: String },
    /// Terminal: the session ended; resets to the anonymous default.
    LoggedOut,
    ClearError,
    ClearMessage,
}

/// Precondition failures surfaced by [`SessionState::apply`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionStoreError {
    /// A second session-mutating operation was attempted while one is
    /// already in flight. Fail fast; callers must not queue.
    #[error("another authentication request is already in progress")]
    Busy,
}

impl SessionState {
    /// Apply one transition event.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Busy`] when `OperationStarted` is
    /// dispatched while `loading` is already set; the state is untouched.
    pub fn apply(&mut self, event: SessionEvent) -> Result<(), SessionStoreError> {
        match event {
            SessionEvent::OperationStarted => {
                if self.loading {
                    return Err(SessionStoreError::Busy);
                }
                self.loading = true;
            }
            SessionEvent::AuthSucceeded { user, message } => {
                self.authenticated = true;
                self.user = Some(user);
                self.loading = false;
                self.error = None;
                self.message = message;
            }
            SessionEvent::AuthFailed { error } => {
                // Prior authenticated/user survive a failed operation.
                self.loading = false;
                self.error = Some(error);
                self.message = None;
            }
            SessionEvent::LoggedOut => *self = Self::default(),
            SessionEvent::ClearError => self.error = None,
            SessionEvent::ClearMessage => self.message = None,
        }
        Ok(())
    }
}
