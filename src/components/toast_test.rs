use super::*;
use crate::net::types::User;

fn sample_user() -> User {
    User {
        full_name: "A B".to_owned(),
        email: "a@b.com".to_owned(),
        date_of_birth: "01/02/1990".to_owned(),
        phone_number: "+919876543210".to_owned(),
    }
}

#[test]
fn no_notification_for_default_state() {
    assert!(pending_notification(&SessionState::default()).is_none());
}

#[test]
fn error_becomes_error_toast_with_clear_event() {
    let mut state = SessionState::default();
    state.apply(SessionEvent::OperationStarted).unwrap();
    state
        .apply(SessionEvent::AuthFailed {
            error: "Invalid credentials".to_owned(),
        })
        .unwrap();

    let (toast, clear) = pending_notification(&state).unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.text, "Invalid credentials");
    assert_eq!(clear, SessionEvent::ClearError);
}

#[test]
fn message_becomes_success_toast_with_clear_event() {
    let mut state = SessionState::default();
    state.apply(SessionEvent::OperationStarted).unwrap();
    state
        .apply(SessionEvent::AuthSucceeded {
            user: sample_user(),
            message: Some("Welcome".to_owned()),
        })
        .unwrap();

    let (toast, clear) = pending_notification(&state).unwrap();
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(clear, SessionEvent::ClearMessage);
}

#[test]
fn clear_event_releases_the_notification_exactly_once() {
    let mut state = SessionState::default();
    state.apply(SessionEvent::OperationStarted).unwrap();
    state
        .apply(SessionEvent::AuthFailed {
            error: "boom".to_owned(),
        })
        .unwrap();

    let (_, clear) = pending_notification(&state).unwrap();
    state.apply(clear).unwrap();
    // Consumed; a second pass finds nothing to display.
    assert!(pending_notification(&state).is_none());
}

#[test]
fn silent_session_recovery_produces_no_toast() {
    let mut state = SessionState::default();
    state.apply(SessionEvent::OperationStarted).unwrap();
    state
        .apply(SessionEvent::AuthSucceeded {
            user: sample_user(),
            message: None,
        })
        .unwrap();
    assert!(pending_notification(&state).is_none());
}
