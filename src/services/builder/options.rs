//! Fluent construction of [`ChainhookOptions`].

use crate::models::ChainhookOptions;

/// Accumulates option flags; any combination is valid
///
/// Flags never set stay absent from the built bag, so the server applies
/// its own defaults for them.
#[derive(Debug, Clone, Default)]
pub struct ChainhookOptionsBuilder {
	options: ChainhookOptions,
}

impl ChainhookOptionsBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn enable_on_registration(mut self, enable: bool) -> Self {
		self.options.enable_on_registration = Some(enable);
		self
	}

	pub fn expire_after_evaluations(mut self, evaluations: u64) -> Self {
		self.options.expire_after_evaluations = Some(evaluations);
		self
	}

	pub fn expire_after_occurrences(mut self, occurrences: u64) -> Self {
		self.options.expire_after_occurrences = Some(occurrences);
		self
	}

	pub fn decode_clarity_values(mut self, decode: bool) -> Self {
		self.options.decode_clarity_values = Some(decode);
		self
	}

	pub fn include_contract_abi(mut self, include: bool) -> Self {
		self.options.include_contract_abi = Some(include);
		self
	}

	pub fn include_contract_source_code(mut self, include: bool) -> Self {
		self.options.include_contract_source_code = Some(include);
		self
	}

	pub fn include_post_conditions(mut self, include: bool) -> Self {
		self.options.include_post_conditions = Some(include);
		self
	}

	pub fn include_raw_transactions(mut self, include: bool) -> Self {
		self.options.include_raw_transactions = Some(include);
		self
	}

	pub fn include_block_signatures(mut self, include: bool) -> Self {
		self.options.include_block_signatures = Some(include);
		self
	}

	pub fn include_block_metadata(mut self, include: bool) -> Self {
		self.options.include_block_metadata = Some(include);
		self
	}

	pub fn build(self) -> ChainhookOptions {
		self.options
	}
}
