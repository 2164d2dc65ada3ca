//! Domain models and data structures of the Chainhooks API.
//!
//! This module contains all the data structures exchanged with the service:
//!
//! - `core`: Core domain models (EventFilter, ChainhookDefinition, Chainhook)
//! - `api`: Endpoint envelopes (pagination, bulk enable, evaluation, secrets)

mod api;
mod core;

// Re-export core types
pub use core::{
	BalanceChangeFilter, Chain, Chainhook, ChainhookAction, ChainhookDefinition, ChainhookFilters,
	ChainhookOptions, ChainhookStatus, ChainhookStatusInfo, CoinbaseFilter, ContractCallFilter,
	ContractDeployFilter, ContractLogFilter, EventFilter, EventType, FtBurnFilter, FtEventFilter,
	FtMintFilter, FtTransferFilter, Network, NftBurnFilter, NftEventFilter, NftMintFilter,
	NftTransferFilter, Principal, StxBurnFilter, StxEventFilter, StxMintFilter, StxTransferFilter,
	TenureChangeFilter,
};

// Re-export api types
pub use api::{
	ApiStatusResponse, BulkEnableChainhooksRequest, BulkEnableChainhooksResponse,
	ConsumerSecretResponse, EnableChainhookRequest, EvaluateChainhookRequest,
	PaginatedChainhookResponse, PaginationOptions,
};
