//! Login page with email + password form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::AppController;
use crate::state::session::SessionState;
use crate::util::redirect::install_auth_redirect;

/// Trim both fields and require them non-empty before any dispatch, so
/// rejected input never touches the session store.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    let password = password.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Please fill all the fields");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let controller = expect_context::<AppController>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    install_auth_redirect(session, use_navigate());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.get().loading {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(msg) => {
                    info.set(msg.to_owned());
                    return;
                }
            };
        info.set(String::new());

        let controller = controller.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = controller.login(&email_value, &password_value).await {
                leptos::logging::warn!("login rejected: {e}");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (controller, email_value, password_value);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Login"</h1>
                <form class="login-form" on:submit=on_submit>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        class="login-input"
                        type="email"
                        placeholder="Enter your email..."
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        placeholder="Enter your password..."
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button
                        class="login-button"
                        type="submit"
                        disabled=move || session.get().loading
                    >
                        "Login"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Don't have an account? "
                    <A href="/register">"Sign up for free."</A>
                </p>
            </div>
        </div>
    }
}
