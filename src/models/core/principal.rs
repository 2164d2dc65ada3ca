use serde::{Deserialize, Serialize};

/// A Stacks address, either a standard account or a contract
///
/// Exactly one of the two fields is expected to be set. Use
/// [`Principal::standard`] or [`Principal::contract`] to build one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Principal {
	/// Standard address, e.g. `SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7`
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub standard: Option<String>,
	/// Contract address, e.g. `SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7.token`
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub contract: Option<String>,
}

impl Principal {
	pub fn standard(address: impl Into<String>) -> Self {
		Self {
			standard: Some(address.into()),
			contract: None,
		}
	}

	pub fn contract(address: impl Into<String>) -> Self {
		Self {
			standard: None,
			contract: Some(address.into()),
		}
	}
}
