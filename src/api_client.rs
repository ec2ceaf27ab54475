//! HTTP adapter for the `/endpoint` API under test.
//!
//! Provides a thin wrapper around `reqwest::Client` that formats a
//! `(token, action)` pair into the form-encoded POST the endpoint expects.
//! Its entire contract is "build and send one request, return the response
//! unmodified": no retries, no timeout tuning, no status mapping. The
//! scenarios assert on the raw response.

use anyhow::{Context, Result};
use std::fmt;

/// Path of the endpoint under test, joined onto the configured base URL.
const ENDPOINT_PATH: &str = "/endpoint";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Command sent to `/endpoint` in the `action` form field.
///
/// Semantics (token storage, upstream calls) are owned by the application
/// under test; this suite only picks which command to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Login,
    Action,
    Logout,
}

impl Action {
    /// Wire name used in the form body.
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Login => "LOGIN",
            Action::Action => "ACTION",
            Action::Logout => "LOGOUT",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Thin client for the `/endpoint` API.
///
/// Wraps `reqwest::Client` with a normalized base URL and an optional API
/// key. Any HTTP status comes back as a plain response; only transport
/// failures surface as errors.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl ApiClient {
    /// Create a new adapter.
    ///
    /// `base_url` is trimmed and stripped of trailing slashes to prevent
    /// double-slash issues when joining the endpoint path. `api_key: None`
    /// omits the `X-Api-Key` header entirely; the unauthorized scenario
    /// relies on that.
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        let normalized = base_url.trim().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url: normalized,
            api_key,
        }
    }

    /// Send one `(token, action)` request and return the response unmodified.
    ///
    /// The body is form-encoded (`token=<token>&action=<action>`); the token
    /// is passed through verbatim. Non-2xx statuses are **not** errors here.
    pub async fn send_request(&self, token: &str, action: Action) -> Result<reqwest::Response> {
        let url = self.url(ENDPOINT_PATH);
        let mut req = self
            .client
            .post(&url)
            .header("Accept", "application/json")
            .form(&[("token", token), ("action", action.as_str())]);
        if let Some(key) = &self.api_key {
            req = req.header(API_KEY_HEADER, key);
        }
        req.send()
            .await
            .with_context(|| format!("failed to connect to API at {url}"))
    }

    /// Build a full URL by joining the base URL with an endpoint path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
