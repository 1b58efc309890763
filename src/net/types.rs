//! Shared wire DTOs for the identity-service boundary.
//!
//! DESIGN
//! ======
//! These types mirror the identity service's JSON payloads (camelCase
//! field names) so serde round-trips stay lossless.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated account as returned by the identity service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Display name shown on the home page.
    pub full_name: String,
    /// Account email address.
    pub email: String,
    /// Date of birth as a DD/MM/YYYY string.
    pub date_of_birth: String,
    /// Phone number with international prefix (e.g. `+91` + 10 digits).
    pub phone_number: String,
}

/// Registration payload sent to `POST /register`.
///
/// The password confirmation the form collects is consumed by client-side
/// validation and never appears here, so it is never sent over the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInput {
    pub full_name: String,
    pub email: String,
    pub date_of_birth: String,
    pub phone_number: String,
    /// Transient credential; forwarded to the service and never retained
    /// in session state.
    pub password: String,
}

/// Successful response body for register/login/session lookups.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    /// Optional human-readable success message to surface once.
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body the identity service attaches to non-OK responses.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}
