use serde::{Deserialize, Serialize};

use crate::{
	models::{Chain, EventFilter, Network},
	utils::constants::DEFAULT_API_VERSION,
};

/// Optional behavior toggles of a chainhook
///
/// A `None` field means "use the server default" and is omitted from the
/// request; it is never equivalent to `false` or `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChainhookOptions {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub enable_on_registration: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub expire_after_evaluations: Option<u64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub expire_after_occurrences: Option<u64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub decode_clarity_values: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub include_contract_abi: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub include_contract_source_code: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub include_post_conditions: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub include_raw_transactions: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub include_block_signatures: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub include_block_metadata: Option<bool>,
}

impl ChainhookOptions {
	/// Options with every flag unset
	pub fn new() -> Self {
		Self::default()
	}

	/// Whether no flag is set
	pub fn is_empty(&self) -> bool {
		*self == Self::default()
	}
}

/// Ordered event filters of a chainhook
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChainhookFilters {
	pub events: Vec<EventFilter>,
}

/// What the service does when a filter matches
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChainhookAction {
	/// POST the matched payload to `url`
	HttpPost { url: String },
}

impl ChainhookAction {
	pub fn http_post(url: impl Into<String>) -> Self {
		ChainhookAction::HttpPost { url: url.into() }
	}

	/// Delivery URL of the action
	pub fn url(&self) -> &str {
		match self {
			ChainhookAction::HttpPost { url } => url,
		}
	}
}

impl Default for ChainhookAction {
	fn default() -> Self {
		ChainhookAction::HttpPost { url: String::new() }
	}
}

/// The unit of registration: filters, options, and a delivery action
///
/// Built and validated by [`crate::services::builder::ChainhookBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChainhookDefinition {
	pub name: String,
	#[serde(default = "default_version")]
	pub version: String,
	#[serde(default)]
	pub chain: Chain,
	pub network: Network,
	pub filters: ChainhookFilters,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub options: Option<ChainhookOptions>,
	pub action: ChainhookAction,
}

fn default_version() -> String {
	DEFAULT_API_VERSION.to_string()
}

impl Default for ChainhookDefinition {
	fn default() -> Self {
		Self {
			name: String::new(),
			version: default_version(),
			chain: Chain::default(),
			network: Network::default(),
			filters: ChainhookFilters::default(),
			options: None,
			action: ChainhookAction::default(),
		}
	}
}
