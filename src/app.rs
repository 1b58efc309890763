//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast::Toaster;
use crate::config::{ApiConfig, ValidationPolicy};
use crate::net::api::IdentityApi;
use crate::pages::{home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::controller::SessionController;
use crate::state::session::SessionState;

/// The controller type pages pull from context.
pub type AppController = SessionController<IdentityApi, RwSignal<SessionState>>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides session state, validation policy, and the session
/// controller via context, kicks off one silent session-recovery check,
/// and sets up client-side routing with the toaster mounted at the
/// root.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let controller = SessionController::new(IdentityApi::new(ApiConfig::default()), session);

    provide_context(session);
    provide_context(ValidationPolicy::default());
    provide_context(controller.clone());

    // Recover an existing session from the ambient cookie, once on load.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Err(e) = controller.check_session().await {
            leptos::logging::warn!("session check rejected: {e}");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    drop(controller);

    view! {
        <Stylesheet id="leptos" href="/pkg/auth-guard.css"/>
        <Title text="Auth Guard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
        <Toaster/>
    }
}
