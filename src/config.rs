//! Suite configuration.
//!
//! Resolved per run from `ENDPOINT_E2E_*` environment variables with the
//! documented defaults. Nothing is persisted: every run starts from the
//! environment, and each scenario constructs a fresh mock server and
//! adapter from the same values.

use anyhow::{Context, Result};
use std::env;

/// Default base URL of the application under test.
pub const DEFAULT_APP_URL: &str = "http://localhost:8080";

/// Default API key the application accepts in `X-Api-Key`.
pub const DEFAULT_API_KEY: &str = "qazWSXedc";

/// Default fixed local port the application's upstream `/auth` and
/// `/doAction` calls are directed to. Distinct from the application's own
/// port.
pub const DEFAULT_UPSTREAM_PORT: u16 = 8888;

/// Environment variable naming the application base URL.
///
/// Doubles as the live-suite gate: the end-to-end scenarios only run when
/// it is set, so `cargo test` stays safe on machines without a deployment.
pub const APP_URL_ENV_VAR: &str = "ENDPOINT_E2E_APP_URL";

/// Environment variable overriding the API key.
const API_KEY_ENV_VAR: &str = "ENDPOINT_E2E_API_KEY";

/// Environment variable overriding the upstream mock port.
const UPSTREAM_PORT_ENV_VAR: &str = "ENDPOINT_E2E_UPSTREAM_PORT";

/// Per-run configuration for the endpoint scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestConfig {
    /// Base URL of the application under test.
    pub app_url: String,
    /// API key sent in the `X-Api-Key` header.
    pub api_key: String,
    /// Fixed local port the upstream mock listens on.
    pub upstream_port: u16,
}

impl TestConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Resolve configuration from an arbitrary variable source.
    ///
    /// Internal implementation shared by `from_env` and tests, so tests do
    /// not have to mutate process-global environment state.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let app_url = lookup(APP_URL_ENV_VAR).unwrap_or_else(|| DEFAULT_APP_URL.to_string());
        let api_key = lookup(API_KEY_ENV_VAR).unwrap_or_else(|| DEFAULT_API_KEY.to_string());
        let upstream_port = match lookup(UPSTREAM_PORT_ENV_VAR) {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("invalid {UPSTREAM_PORT_ENV_VAR} value: {raw}"))?,
            None => DEFAULT_UPSTREAM_PORT,
        };
        Ok(Self {
            app_url,
            api_key,
            upstream_port,
        })
    }

    /// The application base URL, only if explicitly configured.
    ///
    /// `None` means there is no application to test against and the live
    /// scenarios should skip rather than assume a deployment on the
    /// default port.
    pub fn app_url_from_env() -> Option<String> {
        env::var(APP_URL_ENV_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
