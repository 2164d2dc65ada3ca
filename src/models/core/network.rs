use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::constants::{MAINNET_BASE_URL, TESTNET_BASE_URL};

/// Stacks network a chainhook observes
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
	#[default]
	Mainnet,
	Testnet,
}

impl Network {
	/// Base URL of the hosted API serving this network
	pub fn base_url(&self) -> &'static str {
		match self {
			Network::Mainnet => MAINNET_BASE_URL,
			Network::Testnet => TESTNET_BASE_URL,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Network::Mainnet => "mainnet",
			Network::Testnet => "testnet",
		}
	}
}

impl fmt::Display for Network {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Blockchain a chainhook observes. Stacks is the only supported chain.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
	#[default]
	Stacks,
}
