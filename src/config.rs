//! Deployment configuration for the identity-service boundary.
//!
//! DESIGN
//! ======
//! The backend base URL and the phone-number policy are locale/deployment
//! decisions, not code. Both are injected at the application root so no
//! module hardcodes an endpoint or a country prefix.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Location of the remote identity service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL prefixed to every identity-service path, without a
    /// trailing slash (e.g. `/api/v1` or `https://auth.example.com/api/v1`).
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "/api/v1".to_owned(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Join a path (starting with `/`) onto the configured base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

/// Registration-input policy for the deployment's locale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// International dialing prefix prepended to bare phone numbers.
    pub phone_prefix: String,
    /// Number of national digits expected after the prefix.
    pub phone_digits: usize,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            phone_prefix: "+91".to_owned(),
            phone_digits: 10,
        }
    }
}
