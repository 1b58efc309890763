use super::*;

fn sample_user() -> User {
    User {
        full_name: "Asha Rao".to_owned(),
        email: "asha@example.com".to_owned(),
        date_of_birth: "12/04/1994".to_owned(),
        phone_number: "+919876543210".to_owned(),
    }
}

fn invariants_hold(state: &SessionState) {
    assert_eq!(state.authenticated, state.user.is_some());
    assert!(state.error.is_none() || state.message.is_none());
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_anonymous() {
    let state = SessionState::default();
    assert!(!state.authenticated);
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert!(state.message.is_none());
}

// =============================================================
// OperationStarted
// =============================================================

#[test]
fn operation_started_sets_loading() {
    let mut state = SessionState::default();
    state.apply(SessionEvent::OperationStarted).unwrap();
    assert!(state.loading);
    invariants_hold(&state);
}

#[test]
fn operation_started_while_loading_fails_fast() {
    let mut state = SessionState::default();
    state.apply(SessionEvent::OperationStarted).unwrap();
    let before = state.clone();
    let err = state.apply(SessionEvent::OperationStarted).unwrap_err();
    assert_eq!(err, SessionStoreError::Busy);
    assert_eq!(state, before);
}

#[test]
fn operation_started_leaves_pending_notification_untouched() {
    let mut state = SessionState::default();
    state.apply(SessionEvent::OperationStarted).unwrap();
    state
        .apply(SessionEvent::AuthFailed {
            error: "Invalid credentials".to_owned(),
        })
        .unwrap();
    state.apply(SessionEvent::OperationStarted).unwrap();
    assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
}

// =============================================================
// Terminal events
// =============================================================

#[test]
fn auth_succeeded_installs_user_and_message() {
    let mut state = SessionState::default();
    state.apply(SessionEvent::OperationStarted).unwrap();
    state
        .apply(SessionEvent::AuthSucceeded {
            user: sample_user(),
            message: Some("Welcome".to_owned()),
        })
        .unwrap();
    assert!(state.authenticated);
    assert_eq!(state.user.as_ref().unwrap().full_name, "Asha Rao");
    assert!(!state.loading);
    assert_eq!(state.message.as_deref(), Some("Welcome"));
    assert!(state.error.is_none());
    invariants_hold(&state);
}

#[test]
fn auth_succeeded_clears_stale_error() {
    let mut state = SessionState::default();
    state.apply(SessionEvent::OperationStarted).unwrap();
    state
        .apply(SessionEvent::AuthFailed {
            error: "X".to_owned(),
        })
        .unwrap();
    state.apply(SessionEvent::OperationStarted).unwrap();
    state
        .apply(SessionEvent::AuthSucceeded {
            user: sample_user(),
            message: None,
        })
        .unwrap();
    assert!(state.error.is_none());
    assert!(state.message.is_none());
    invariants_hold(&state);
}

#[test]
fn auth_failed_keeps_prior_authentication() {
    let mut state = SessionState::default();
    state.apply(SessionEvent::OperationStarted).unwrap();
    state
        .apply(SessionEvent::AuthSucceeded {
            user: sample_user(),
            message: None,
        })
        .unwrap();

    state.apply(SessionEvent::OperationStarted).unwrap();
    state
        .apply(SessionEvent::AuthFailed {
            error: "server error".to_owned(),
        })
        .unwrap();
    assert!(state.authenticated);
    assert!(state.user.is_some());
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("server error"));
    invariants_hold(&state);
}

#[test]
fn auth_failed_displaces_pending_success_message() {
    let mut state = SessionState::default();
    state.apply(SessionEvent::OperationStarted).unwrap();
    state
        .apply(SessionEvent::AuthSucceeded {
            user: sample_user(),
            message: Some("Welcome".to_owned()),
        })
        .unwrap();
    state.apply(SessionEvent::OperationStarted).unwrap();
    state
        .apply(SessionEvent::AuthFailed {
            error: "server error".to_owned(),
        })
        .unwrap();
    // error and message are never both present
    assert!(state.message.is_none());
    assert_eq!(state.error.as_deref(), Some("server error"));
    invariants_hold(&state);
}

#[test]
fn logged_out_resets_everything() {
    let mut state = SessionState::default();
    state.apply(SessionEvent::OperationStarted).unwrap();
    state
        .apply(SessionEvent::AuthSucceeded {
            user: sample_user(),
            message: Some("Welcome".to_owned()),
        })
        .unwrap();
    state.apply(SessionEvent::LoggedOut).unwrap();
    assert_eq!(state, SessionState::default());
}

#[test]
fn logged_out_from_loading_clears_loading() {
    let mut state = SessionState::default();
    state.apply(SessionEvent::OperationStarted).unwrap();
    state.apply(SessionEvent::LoggedOut).unwrap();
    assert!(!state.loading);
}

// =============================================================
// Clear events
// =============================================================

#[test]
fn clear_error_removes_only_error() {
    let mut state = SessionState::default();
    state.apply(SessionEvent::OperationStarted).unwrap();
    state
        .apply(SessionEvent::AuthFailed {
            error: "bad".to_owned(),
        })
        .unwrap();
    state.apply(SessionEvent::ClearError).unwrap();
    assert!(state.error.is_none());
}

#[test]
fn clear_events_are_idempotent() {
    let mut state = SessionState::default();
    let before = state.clone();
    state.apply(SessionEvent::ClearError).unwrap();
    state.apply(SessionEvent::ClearMessage).unwrap();
    assert_eq!(state, before);
}
