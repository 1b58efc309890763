//! Transient toast notifications driven by session state.
//!
//! DESIGN
//! ======
//! The toaster is the sole consumer of the session's `error`/`message`
//! fields. Surfacing a notification and dispatching its clear event is
//! one logical operation, so each result is shown exactly once and an
//! unrelated re-render can never redisplay stale text.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

use crate::state::controller::SessionHandle;
use crate::state::session::{SessionEvent, SessionState};

/// Seconds a toast stays on screen before auto-dismissing.
#[cfg(feature = "hydrate")]
const TOAST_SECS: u64 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A single notification taken out of session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
}

/// Pick the pending notification, if any, together with the clear event
/// that releases it. Errors take precedence; the store guarantees both
/// are never present at once.
pub fn pending_notification(state: &SessionState) -> Option<(Toast, SessionEvent)> {
    if let Some(text) = &state.error {
        Some((
            Toast {
                kind: ToastKind::Error,
                text: text.clone(),
            },
            SessionEvent::ClearError,
        ))
    } else if let Some(text) = &state.message {
        Some((
            Toast {
                kind: ToastKind::Success,
                text: text.clone(),
            },
            SessionEvent::ClearMessage,
        ))
    } else {
        None
    }
}

/// Toast overlay mounted once at the application root.
#[component]
pub fn Toaster() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let current = RwSignal::new(None::<Toast>);

    // Acquire the pending notification and release it from the store in
    // the same pass.
    Effect::new(move || {
        let state = session.get();
        if let Some((toast, clear)) = pending_notification(&state) {
            current.set(Some(toast));
            if let Err(e) = SessionHandle::dispatch(&session, clear) {
                leptos::logging::warn!("toast clear rejected: {e}");
            }
        }
    });

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if current.get().is_some() {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_secs(TOAST_SECS)).await;
                current.set(None);
            });
        }
    });

    let toast_class = move || match current.get() {
        Some(Toast {
            kind: ToastKind::Error,
            ..
        }) => "toast toast--error",
        _ => "toast toast--success",
    };

    view! {
        <Show when=move || current.get().is_some()>
            <div class=toast_class role="status">
                {move || current.get().map(|t| t.text).unwrap_or_default()}
            </div>
        </Show>
    }
}
