//! Test support for the `/endpoint` token lifecycle suite.
//!
//! The scenarios themselves live under `tests/`. This lib target exposes
//! the adapter, configuration and assertion helpers they share.

pub mod api_client;
pub mod config;
pub mod verify;

pub use api_client::{Action, ApiClient};
pub use config::TestConfig;
