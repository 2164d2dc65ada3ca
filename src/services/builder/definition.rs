//! Fluent construction of a [`ChainhookDefinition`].
//!
//! The first error recorded while chaining sticks: every later call is a no-op
//! and [`ChainhookBuilder::build`] returns that error.

use crate::{
	models::{
		BalanceChangeFilter, ChainhookAction, ChainhookDefinition, ChainhookFilters,
		ChainhookOptions, CoinbaseFilter, ContractCallFilter, ContractDeployFilter,
		ContractLogFilter, EventFilter, FtBurnFilter, FtEventFilter, FtMintFilter,
		FtTransferFilter, Network, NftBurnFilter, NftEventFilter, NftMintFilter,
		NftTransferFilter, Principal, StxBurnFilter, StxEventFilter, StxMintFilter,
		StxTransferFilter, TenureChangeFilter,
	},
	services::chainhooks::ChainhooksError,
};

/// Builder of a complete, validated chainhook definition
///
/// # Example
/// ```
/// use chainhooks_client::{models::{Network, Principal}, services::builder::ChainhookBuilder};
///
/// let definition = ChainhookBuilder::new("stx-transfers", Network::Testnet)
/// 	.with_webhook_url("https://example.com/hook")
/// 	.add_stx_transfer(Some(Principal::standard("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM")), None, None)
/// 	.with_decode_clarity_values(true)
/// 	.build()
/// 	.unwrap();
///
/// assert_eq!(definition.filters.events.len(), 1);
/// ```
#[derive(Debug)]
pub struct ChainhookBuilder {
	definition: ChainhookDefinition,
	filters: Vec<EventFilter>,
	err: Option<ChainhooksError>,
}

impl ChainhookBuilder {
	pub fn new(name: impl Into<String>, network: Network) -> Self {
		Self {
			definition: ChainhookDefinition {
				name: name.into(),
				network,
				..Default::default()
			},
			filters: Vec::new(),
			err: None,
		}
	}

	/// Applies `update` unless an error was already recorded
	fn apply(mut self, update: impl FnOnce(&mut Self)) -> Self {
		if self.err.is_none() {
			update(&mut self);
		}
		self
	}

	fn options_mut(&mut self) -> &mut ChainhookOptions {
		self.definition
			.options
			.get_or_insert_with(ChainhookOptions::default)
	}

	pub fn with_name(self, name: impl Into<String>) -> Self {
		let name = name.into();
		self.apply(|b| b.definition.name = name)
	}

	pub fn with_network(self, network: Network) -> Self {
		self.apply(|b| b.definition.network = network)
	}

	/// Sets the `http_post` delivery action
	///
	/// The URL is not checked here; an empty one is rejected by [`Self::build`].
	pub fn with_webhook_url(self, url: impl Into<String>) -> Self {
		let url = url.into();
		self.apply(|b| b.definition.action = ChainhookAction::http_post(url))
	}

	/// Appends a filter; filters keep insertion order
	pub fn add_filter(self, filter: impl Into<EventFilter>) -> Self {
		let filter = filter.into();
		self.apply(|b| b.filters.push(filter))
	}

	pub fn add_ft_event(
		self,
		asset: impl Into<String>,
		action: Option<String>,
		sender: Option<Principal>,
		receiver: Option<Principal>,
		amount: Option<String>,
	) -> Self {
		self.add_filter(FtEventFilter {
			asset: Some(asset.into()),
			action,
			sender,
			receiver,
			amount,
		})
	}

	pub fn add_ft_mint(
		self,
		asset: impl Into<String>,
		recipient: Option<Principal>,
		amount: Option<String>,
	) -> Self {
		self.add_filter(FtMintFilter {
			asset: Some(asset.into()),
			recipient,
			amount,
		})
	}

	pub fn add_ft_burn(
		self,
		asset: impl Into<String>,
		sender: Option<Principal>,
		amount: Option<String>,
	) -> Self {
		self.add_filter(FtBurnFilter {
			asset: Some(asset.into()),
			sender,
			amount,
		})
	}

	pub fn add_ft_transfer(
		self,
		asset: impl Into<String>,
		sender: Option<Principal>,
		recipient: Option<Principal>,
		amount: Option<String>,
	) -> Self {
		self.add_filter(FtTransferFilter {
			asset: Some(asset.into()),
			sender,
			recipient,
			amount,
		})
	}

	pub fn add_nft_event(
		self,
		asset: impl Into<String>,
		action: Option<String>,
		sender: Option<Principal>,
		receiver: Option<Principal>,
	) -> Self {
		self.add_filter(NftEventFilter {
			asset: Some(asset.into()),
			action,
			sender,
			receiver,
		})
	}

	pub fn add_nft_mint(self, asset: impl Into<String>, recipient: Option<Principal>) -> Self {
		self.add_filter(NftMintFilter {
			asset: Some(asset.into()),
			recipient,
		})
	}

	pub fn add_nft_burn(self, asset: impl Into<String>, sender: Option<Principal>) -> Self {
		self.add_filter(NftBurnFilter {
			asset: Some(asset.into()),
			sender,
		})
	}

	pub fn add_nft_transfer(
		self,
		asset: impl Into<String>,
		sender: Option<Principal>,
		recipient: Option<Principal>,
	) -> Self {
		self.add_filter(NftTransferFilter {
			asset: Some(asset.into()),
			sender,
			recipient,
		})
	}

	pub fn add_stx_event(
		self,
		action: Option<String>,
		sender: Option<Principal>,
		receiver: Option<Principal>,
		amount: Option<String>,
	) -> Self {
		self.add_filter(StxEventFilter {
			action,
			sender,
			receiver,
			amount,
		})
	}

	pub fn add_stx_mint(self, recipient: Option<Principal>, amount: Option<String>) -> Self {
		self.add_filter(StxMintFilter { recipient, amount })
	}

	pub fn add_stx_burn(self, sender: Option<Principal>, amount: Option<String>) -> Self {
		self.add_filter(StxBurnFilter { sender, amount })
	}

	pub fn add_stx_transfer(
		self,
		sender: Option<Principal>,
		recipient: Option<Principal>,
		amount: Option<String>,
	) -> Self {
		self.add_filter(StxTransferFilter {
			sender,
			recipient,
			amount,
		})
	}

	pub fn add_contract_deploy(self, deployer_principal: Option<Principal>) -> Self {
		self.add_filter(ContractDeployFilter { deployer_principal })
	}

	pub fn add_contract_call(
		self,
		contract_identifier: Option<String>,
		method: Option<String>,
		sender: Option<Principal>,
	) -> Self {
		self.add_filter(ContractCallFilter {
			contract_identifier,
			method,
			sender,
		})
	}

	pub fn add_contract_log(self, contract_identifier: Option<String>) -> Self {
		self.add_filter(ContractLogFilter {
			contract_identifier,
		})
	}

	pub fn add_balance_change(self, principal: Option<Principal>) -> Self {
		self.add_filter(BalanceChangeFilter { principal })
	}

	pub fn add_coinbase(self, recipient: Option<Principal>) -> Self {
		self.add_filter(CoinbaseFilter { recipient })
	}

	pub fn add_tenure_change(self) -> Self {
		self.add_filter(TenureChangeFilter {})
	}

	/// Replaces the whole options bag
	pub fn with_options(self, options: ChainhookOptions) -> Self {
		self.apply(|b| b.definition.options = Some(options))
	}

	pub fn with_enable_on_registration(self, enable: bool) -> Self {
		self.apply(|b| b.options_mut().enable_on_registration = Some(enable))
	}

	pub fn with_expire_after_evaluations(self, evaluations: u64) -> Self {
		self.apply(|b| b.options_mut().expire_after_evaluations = Some(evaluations))
	}

	pub fn with_expire_after_occurrences(self, occurrences: u64) -> Self {
		self.apply(|b| b.options_mut().expire_after_occurrences = Some(occurrences))
	}

	pub fn with_decode_clarity_values(self, decode: bool) -> Self {
		self.apply(|b| b.options_mut().decode_clarity_values = Some(decode))
	}

	pub fn with_include_contract_abi(self, include: bool) -> Self {
		self.apply(|b| b.options_mut().include_contract_abi = Some(include))
	}

	pub fn with_include_contract_source_code(self, include: bool) -> Self {
		self.apply(|b| b.options_mut().include_contract_source_code = Some(include))
	}

	pub fn with_include_post_conditions(self, include: bool) -> Self {
		self.apply(|b| b.options_mut().include_post_conditions = Some(include))
	}

	pub fn with_include_raw_transactions(self, include: bool) -> Self {
		self.apply(|b| b.options_mut().include_raw_transactions = Some(include))
	}

	pub fn with_include_block_signatures(self, include: bool) -> Self {
		self.apply(|b| b.options_mut().include_block_signatures = Some(include))
	}

	pub fn with_include_block_metadata(self, include: bool) -> Self {
		self.apply(|b| b.options_mut().include_block_metadata = Some(include))
	}

	/// Validates and returns the definition
	///
	/// # Errors
	/// - The first error recorded while chaining, unchanged
	/// - Validation error on `name`, then `action.url`, then `filters`,
	///   whichever is missing first
	pub fn build(self) -> Result<ChainhookDefinition, ChainhooksError> {
		if let Some(err) = self.err {
			return Err(err);
		}

		let mut definition = self.definition;
		if definition.name.is_empty() {
			return Err(ChainhooksError::validation_error("name", "name is required"));
		}
		if definition.action.url().is_empty() {
			return Err(ChainhooksError::validation_error(
				"action.url",
				"webhook URL is required",
			));
		}
		if self.filters.is_empty() {
			return Err(ChainhooksError::validation_error(
				"filters",
				"at least one filter is required",
			));
		}

		definition.filters = ChainhookFilters {
			events: self.filters,
		};
		Ok(definition)
	}
}
