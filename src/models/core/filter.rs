//! Event filters matched by a chainhook.
//!
//! Every filter serializes as a flat JSON object whose `type` field carries
//! the [`EventType`] discriminant. Fields left as `None` are unconstrained and
//! are omitted from the wire form rather than sent as `null`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Principal;

/// Discriminant of every blockchain event a filter can match
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
	FtEvent,
	FtMint,
	FtBurn,
	FtTransfer,
	NftEvent,
	NftMint,
	NftBurn,
	NftTransfer,
	StxEvent,
	StxMint,
	StxBurn,
	StxTransfer,
	ContractDeploy,
	ContractCall,
	ContractLog,
	BalanceChange,
	Coinbase,
	TenureChange,
}

impl EventType {
	/// Wire name of the discriminant, as found in the `type` field
	pub fn as_str(&self) -> &'static str {
		match self {
			EventType::FtEvent => "ft_event",
			EventType::FtMint => "ft_mint",
			EventType::FtBurn => "ft_burn",
			EventType::FtTransfer => "ft_transfer",
			EventType::NftEvent => "nft_event",
			EventType::NftMint => "nft_mint",
			EventType::NftBurn => "nft_burn",
			EventType::NftTransfer => "nft_transfer",
			EventType::StxEvent => "stx_event",
			EventType::StxMint => "stx_mint",
			EventType::StxBurn => "stx_burn",
			EventType::StxTransfer => "stx_transfer",
			EventType::ContractDeploy => "contract_deploy",
			EventType::ContractCall => "contract_call",
			EventType::ContractLog => "contract_log",
			EventType::BalanceChange => "balance_change",
			EventType::Coinbase => "coinbase",
			EventType::TenureChange => "tenure_change",
		}
	}
}

impl fmt::Display for EventType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Any fungible token event of an asset
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FtEventFilter {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub asset: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sender: Option<Principal>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub receiver: Option<Principal>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub amount: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FtMintFilter {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub asset: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub recipient: Option<Principal>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub amount: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FtBurnFilter {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub asset: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sender: Option<Principal>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub amount: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FtTransferFilter {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub asset: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sender: Option<Principal>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub recipient: Option<Principal>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub amount: Option<String>,
}

/// Any non-fungible token event of an asset
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NftEventFilter {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub asset: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sender: Option<Principal>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub receiver: Option<Principal>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NftMintFilter {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub asset: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub recipient: Option<Principal>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NftBurnFilter {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub asset: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sender: Option<Principal>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NftTransferFilter {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub asset: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sender: Option<Principal>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub recipient: Option<Principal>,
}

/// Any STX (native token) event
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StxEventFilter {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sender: Option<Principal>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub receiver: Option<Principal>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub amount: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StxMintFilter {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub recipient: Option<Principal>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub amount: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StxBurnFilter {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sender: Option<Principal>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub amount: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StxTransferFilter {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sender: Option<Principal>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub recipient: Option<Principal>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub amount: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContractDeployFilter {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub deployer_principal: Option<Principal>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContractCallFilter {
	/// Fully qualified contract id, `<address>.<contract-name>`
	#[serde(skip_serializing_if = "Option::is_none")]
	pub contract_identifier: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub method: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sender: Option<Principal>,
}

/// `print` events emitted by a contract
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContractLogFilter {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub contract_identifier: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BalanceChangeFilter {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub principal: Option<Principal>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CoinbaseFilter {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub recipient: Option<Principal>,
}

/// Tenure change events carry no constraints
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TenureChangeFilter {}

/// A filter over one blockchain event variant
///
/// Closed set of variants, internally tagged by `type` so the wire shape stays
/// a flat object, e.g. `{"type":"stx_transfer","sender":{"standard":"SP..."}}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventFilter {
	FtEvent(FtEventFilter),
	FtMint(FtMintFilter),
	FtBurn(FtBurnFilter),
	FtTransfer(FtTransferFilter),
	NftEvent(NftEventFilter),
	NftMint(NftMintFilter),
	NftBurn(NftBurnFilter),
	NftTransfer(NftTransferFilter),
	StxEvent(StxEventFilter),
	StxMint(StxMintFilter),
	StxBurn(StxBurnFilter),
	StxTransfer(StxTransferFilter),
	ContractDeploy(ContractDeployFilter),
	ContractCall(ContractCallFilter),
	ContractLog(ContractLogFilter),
	BalanceChange(BalanceChangeFilter),
	Coinbase(CoinbaseFilter),
	TenureChange(TenureChangeFilter),
}

// Generates `From<$filter> for EventFilter` for each variant payload.
macro_rules! impl_from_filter {
	($($variant:ident => $filter:ty),* $(,)?) => {
		$(
			impl From<$filter> for EventFilter {
				fn from(filter: $filter) -> Self {
					EventFilter::$variant(filter)
				}
			}
		)*
	};
}

impl_from_filter! {
	FtEvent => FtEventFilter,
	FtMint => FtMintFilter,
	FtBurn => FtBurnFilter,
	FtTransfer => FtTransferFilter,
	NftEvent => NftEventFilter,
	NftMint => NftMintFilter,
	NftBurn => NftBurnFilter,
	NftTransfer => NftTransferFilter,
	StxEvent => StxEventFilter,
	StxMint => StxMintFilter,
	StxBurn => StxBurnFilter,
	StxTransfer => StxTransferFilter,
	ContractDeploy => ContractDeployFilter,
	ContractCall => ContractCallFilter,
	ContractLog => ContractLogFilter,
	BalanceChange => BalanceChangeFilter,
	Coinbase => CoinbaseFilter,
	TenureChange => TenureChangeFilter,
}

impl EventFilter {
	/// Discriminant of this filter
	pub fn event_type(&self) -> EventType {
		match self {
			EventFilter::FtEvent(_) => EventType::FtEvent,
			EventFilter::FtMint(_) => EventType::FtMint,
			EventFilter::FtBurn(_) => EventType::FtBurn,
			EventFilter::FtTransfer(_) => EventType::FtTransfer,
			EventFilter::NftEvent(_) => EventType::NftEvent,
			EventFilter::NftMint(_) => EventType::NftMint,
			EventFilter::NftBurn(_) => EventType::NftBurn,
			EventFilter::NftTransfer(_) => EventType::NftTransfer,
			EventFilter::StxEvent(_) => EventType::StxEvent,
			EventFilter::StxMint(_) => EventType::StxMint,
			EventFilter::StxBurn(_) => EventType::StxBurn,
			EventFilter::StxTransfer(_) => EventType::StxTransfer,
			EventFilter::ContractDeploy(_) => EventType::ContractDeploy,
			EventFilter::ContractCall(_) => EventType::ContractCall,
			EventFilter::ContractLog(_) => EventType::ContractLog,
			EventFilter::BalanceChange(_) => EventType::BalanceChange,
			EventFilter::Coinbase(_) => EventType::Coinbase,
			EventFilter::TenureChange(_) => EventType::TenureChange,
		}
	}
}
