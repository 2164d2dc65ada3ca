use std::time::Duration;

use crate::utils::constants::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, MAINNET_BASE_URL};

/// Connection settings of a [`super::ChainhooksClient`]
///
/// Everything is passed programmatically; nothing is read from the
/// environment.
#[derive(Debug, Clone)]
pub struct ClientConfig {
	/// API root, e.g. [`crate::models::Network::base_url`]. Empty means mainnet.
	pub base_url: String,
	/// Sent as `x-api-key`
	pub api_key: Option<String>,
	/// Sent as `Authorization: Bearer <jwt>`
	pub jwt: Option<String>,
	/// Applied to every request
	pub timeout: Duration,
	pub user_agent: String,
	/// Pre-built HTTP client to share connection pools with the caller
	pub http_client: Option<reqwest::Client>,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			base_url: MAINNET_BASE_URL.to_string(),
			api_key: None,
			jwt: None,
			timeout: DEFAULT_TIMEOUT,
			user_agent: DEFAULT_USER_AGENT.to_string(),
			http_client: None,
		}
	}
}

impl ClientConfig {
	pub fn new(base_url: impl Into<String>) -> Self {
		Self {
			base_url: base_url.into(),
			..Default::default()
		}
	}

	pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
		self.api_key = Some(api_key.into());
		self
	}

	pub fn with_jwt(mut self, jwt: impl Into<String>) -> Self {
		self.jwt = Some(jwt.into());
		self
	}

	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}

	pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = user_agent.into();
		self
	}

	pub fn with_http_client(mut self, http_client: reqwest::Client) -> Self {
		self.http_client = Some(http_client);
		self
	}
}
