//! HTTP client for the remote identity service.
//!
//! Client-side (hydrate): real calls via `gloo-net`, each bounded by a
//! timeout so a hung request cannot leave the session store loading
//! forever. Server-side (SSR): stubs returning errors since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is folded into [`AuthError`] here; callers never see a
//! transport error escape this boundary. The controller decides which
//! errors become visible notifications.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::config::ApiConfig;
use crate::net::types::{AuthResponse, RegistrationInput};
use crate::state::controller::IdentityService;

/// Identity-service failures, classified by how the UI should react.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The service rejected the submitted input (malformed fields,
    /// duplicate account). Shown once, never retried automatically.
    #[error("{0}")]
    Validation(String),
    /// Wrong credentials.
    #[error("{0}")]
    Rejected(String),
    /// Transport-level or 5xx failure, including timeouts.
    #[error("{0}")]
    Network(String),
    /// No existing session for the ambient credential. Expected on a
    /// fresh load; never surfaced to the user.
    #[error("no active session")]
    NoSession,
}

#[cfg(feature = "hydrate")]
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(15);

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Map a non-OK status and its message body onto the error taxonomy.
#[cfg(any(test, feature = "hydrate"))]
fn classify_status(status: u16, message: String) -> AuthError {
    match status {
        401 => AuthError::Rejected(message),
        s if (400..500).contains(&s) => AuthError::Validation(message),
        _ => AuthError::Network(message),
    }
}

#[cfg(not(feature = "hydrate"))]
fn server_unavailable() -> AuthError {
    AuthError::Network("not available on server".to_owned())
}

/// Bound a request future by [`REQUEST_TIMEOUT`], synthesizing a
/// network error on expiry.
#[cfg(feature = "hydrate")]
async fn bounded<T>(
    fut: impl Future<Output = Result<T, AuthError>>,
) -> Result<T, AuthError> {
    use futures::future::{Either, select};

    let fut = std::pin::pin!(fut);
    let timer = std::pin::pin!(gloo_timers::future::sleep(REQUEST_TIMEOUT));
    match select(fut, timer).await {
        Either::Left((out, _)) => out,
        Either::Right(((), _)) => Err(AuthError::Network("request timed out".to_owned())),
    }
}

/// Decode a response into [`AuthResponse`], folding non-OK statuses
/// into [`AuthError`] via the service's `{ message }` error body.
#[cfg(feature = "hydrate")]
async fn decode_auth_response(resp: gloo_net::http::Response) -> Result<AuthResponse, AuthError> {
    use crate::net::types::ApiErrorBody;

    let status = resp.status();
    if !resp.ok() {
        let message = resp
            .json::<ApiErrorBody>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| request_failed_message(status));
        return Err(classify_status(status, message));
    }
    resp.json::<AuthResponse>()
        .await
        .map_err(|e| AuthError::Network(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn post_auth(
    url: String,
    payload: serde_json::Value,
) -> Result<AuthResponse, AuthError> {
    bounded(async move {
        let resp = gloo_net::http::Request::post(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .json(&payload)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        decode_auth_response(resp).await
    })
    .await
}

/// Identity-service client over the configured base URL.
#[derive(Clone, Debug)]
pub struct IdentityApi {
    config: ApiConfig,
}

impl IdentityApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

impl IdentityService for IdentityApi {
    /// `POST {base}/register` with the camelCase registration payload.
    async fn register(&self, input: &RegistrationInput) -> Result<AuthResponse, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let payload =
                serde_json::to_value(input).map_err(|e| AuthError::Network(e.to_string()))?;
            post_auth(self.config.url("/register"), payload).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = input;
            Err(server_unavailable())
        }
    }

    /// `POST {base}/login` with email and password.
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({ "email": email, "password": password });
            post_auth(self.config.url("/login"), payload).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(server_unavailable())
        }
    }

    /// `GET {base}/me`, relying on the ambient session cookie. Any
    /// non-OK response is treated as "no session", not as an error.
    async fn current_session(&self) -> Result<AuthResponse, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.url("/me");
            bounded(async move {
                let resp = gloo_net::http::Request::get(&url)
                    .credentials(web_sys::RequestCredentials::Include)
                    .send()
                    .await
                    .map_err(|e| AuthError::Network(e.to_string()))?;
                if !resp.ok() {
                    return Err(AuthError::NoSession);
                }
                resp.json::<AuthResponse>()
                    .await
                    .map_err(|e| AuthError::Network(e.to_string()))
            })
            .await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(server_unavailable())
        }
    }

    /// `POST {base}/logout`. A non-OK status is still success from the
    /// client's point of view; only transport failures are reported,
    /// and callers ignore even those.
    async fn logout(&self) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.url("/logout");
            bounded(async move {
                gloo_net::http::Request::post(&url)
                    .credentials(web_sys::RequestCredentials::Include)
                    .send()
                    .await
                    .map_err(|e| AuthError::Network(e.to_string()))?;
                Ok(())
            })
            .await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(server_unavailable())
        }
    }
}
