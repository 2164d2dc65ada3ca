use serde::{Deserialize, Serialize};

use crate::models::ChainhookStatus;

/// Enables or disables every chainhook matching a selector
///
/// At least one selector (`uuids`, `webhook_url`, `statuses`) must be set; the
/// client rejects a request without one before sending it. How the service
/// combines several selectors is defined by the service, not by this client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BulkEnableChainhooksRequest {
	pub enabled: bool,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub uuids: Vec<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub webhook_url: Option<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub statuses: Vec<ChainhookStatus>,
}

impl BulkEnableChainhooksRequest {
	/// Selects chainhooks by uuid
	pub fn by_uuids<I, S>(enabled: bool, uuids: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			enabled,
			uuids: uuids.into_iter().map(Into::into).collect(),
			..Default::default()
		}
	}

	/// Selects chainhooks delivering to `webhook_url`
	pub fn by_webhook(enabled: bool, webhook_url: impl Into<String>) -> Self {
		Self {
			enabled,
			webhook_url: Some(webhook_url.into()),
			..Default::default()
		}
	}

	/// Selects chainhooks in any of `statuses`
	pub fn by_status(enabled: bool, statuses: impl IntoIterator<Item = ChainhookStatus>) -> Self {
		Self {
			enabled,
			statuses: statuses.into_iter().collect(),
			..Default::default()
		}
	}

	/// Whether any selector is set
	pub fn has_selector(&self) -> bool {
		!self.uuids.is_empty() || self.webhook_url.is_some() || !self.statuses.is_empty()
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BulkEnableChainhooksResponse {
	pub updated_count: u64,
}
