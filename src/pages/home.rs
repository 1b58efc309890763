//! Authenticated landing page with greeting and logout.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::AppController;
use crate::state::session::SessionState;
use crate::util::redirect::install_unauth_redirect;

/// Home page — greets the signed-in user and offers logout.
/// Redirects to `/login` when no session exists.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let controller = expect_context::<AppController>();

    install_unauth_redirect(session, use_navigate());

    let greeting = move || {
        session
            .get()
            .user
            .map(|user| format!("Hello {}, How are you", user.full_name))
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        if session.get().loading {
            return;
        }
        let controller = controller.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = controller.logout().await {
                leptos::logging::warn!("logout rejected: {e}");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = controller;
    };

    view! {
        <div class="home-page">
            <h1 class="home-page__greeting">{greeting}</h1>
            <h2 class="home-page__subtitle">"This is the Home Page"</h2>
            <button
                class="home-page__logout"
                on:click=on_logout
                disabled=move || session.get().loading
            >
                "Logout"
            </button>
        </div>
    }
}
