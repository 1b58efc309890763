//! Registration page collecting the full account form.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::AppController;
use crate::config::ValidationPolicy;
use crate::net::types::RegistrationInput;
use crate::state::session::SessionState;
use crate::util::redirect::install_auth_redirect;
use crate::util::validate::{normalize_phone, validate_registration};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let controller = expect_context::<AppController>();
    let policy = expect_context::<ValidationPolicy>();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let date_of_birth = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    install_auth_redirect(session, use_navigate());

    let phone_policy = policy.clone();
    let on_phone_input = move |ev: leptos::ev::Event| {
        phone_number.set(normalize_phone(&event_target_value(&ev), &phone_policy));
    };

    let submit_policy = policy;
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.get().loading {
            return;
        }
        let input = RegistrationInput {
            full_name: full_name.get(),
            email: email.get(),
            date_of_birth: date_of_birth.get(),
            phone_number: phone_number.get(),
            password: password.get(),
        };
        // The confirmation is consumed here; only the sanitized input
        // is handed to the controller.
        if let Err(msg) = validate_registration(&input, &confirm_password.get(), &submit_policy) {
            info.set(msg);
            return;
        }
        info.set(String::new());

        let controller = controller.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = controller.register(input).await {
                leptos::logging::warn!("register rejected: {e}");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (controller, input);
    };

    view! {
        <div class="register-page">
            <div class="register-card">
                <h1>"Create Account"</h1>
                <form class="register-form" on:submit=on_submit>
                    <input
                        class="register-input"
                        type="text"
                        placeholder="Full Name"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="text"
                        placeholder="Date of Birth (DD/MM/YYYY)"
                        prop:value=move || date_of_birth.get()
                        on:input=move |ev| date_of_birth.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="text"
                        placeholder="Phone Number (10 digits)"
                        prop:value=move || phone_number.get()
                        on:input=on_phone_input
                    />
                    <input
                        class="register-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="password"
                        placeholder="Confirm Password"
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| confirm_password.set(event_target_value(&ev))
                    />
                    <p class="register-card__footer">
                        "Already have an account? "
                        <A href="/login">"Login"</A>
                    </p>
                    <button
                        class="register-button"
                        type="submit"
                        disabled=move || session.get().loading
                    >
                        "Create Account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="register-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
