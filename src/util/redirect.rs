//! Shared auth redirect helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components must apply identical redirect behavior: anonymous
//! users are bounced to `/login`, authenticated users are bounced away
//! from the credential forms.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Redirect to `/login` whenever no operation is in flight and no
/// session exists.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if !state.loading && !state.authenticated {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Redirect to the home page once a session exists. Used by the login
/// and register pages so an authenticated user never sees them.
pub fn install_auth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session.get().authenticated {
            navigate("/", NavigateOptions::default());
        }
    });
}
