//! Constants shared by the models and the HTTP client.
//!
//! Base URLs of the hosted API, endpoint templates, and header names.

use std::time::Duration;

/// Base URL of the hosted mainnet API
pub const MAINNET_BASE_URL: &str = "https://api.mainnet.hiro.so";

/// Base URL of the hosted testnet API
pub const TESTNET_BASE_URL: &str = "https://api.testnet.hiro.so";

/// Definition version sent when none is specified
pub const DEFAULT_API_VERSION: &str = "1";

/// Timeout applied to every request unless overridden
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent with every request unless overridden
pub const DEFAULT_USER_AGENT: &str = concat!("chainhooks-client-rs/", env!("CARGO_PKG_VERSION"));

// Endpoints, relative to the base URL
pub const ENDPOINT_CHAINHOOKS: &str = "/chainhooks/me";
pub const ENDPOINT_BULK_ENABLED: &str = "/chainhooks/me/enabled";
pub const ENDPOINT_CONSUMER_SECRET: &str = "/chainhooks/me/secret";
pub const ENDPOINT_STATUS: &str = "/chainhooks";

// Header names
pub const HEADER_API_KEY: &str = "x-api-key";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Path of a single chainhook, `/chainhooks/me/{uuid}`
pub fn chainhook_path(uuid: &str) -> String {
	format!("{}/{}", ENDPOINT_CHAINHOOKS, urlencoding::encode(uuid))
}

/// Path toggling a single chainhook, `/chainhooks/me/{uuid}/enabled`
pub fn chainhook_enabled_path(uuid: &str) -> String {
	format!("{}/enabled", chainhook_path(uuid))
}

/// Path of an on-demand evaluation, `/chainhooks/me/{uuid}/evaluate`
pub fn chainhook_evaluate_path(uuid: &str) -> String {
	format!("{}/evaluate", chainhook_path(uuid))
}
