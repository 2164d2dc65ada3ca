//! Core domain models of the Chainhooks API.
//!
//! This module contains the fundamental data structures that represent:
//! - Networks and principals: where a chainhook looks and whom it watches
//! - Filters: the closed set of blockchain events a chainhook can match
//! - Definitions: filters, options, and the delivery action registered together
//! - Chainhooks: registered definitions with their server-assigned status

mod chainhook;
mod definition;
mod filter;
mod network;
mod principal;

pub use chainhook::{Chainhook, ChainhookStatus, ChainhookStatusInfo};
pub use definition::{ChainhookAction, ChainhookDefinition, ChainhookFilters, ChainhookOptions};
pub use filter::{
	BalanceChangeFilter, CoinbaseFilter, ContractCallFilter, ContractDeployFilter,
	ContractLogFilter, EventFilter, EventType, FtBurnFilter, FtEventFilter, FtMintFilter,
	FtTransferFilter, NftBurnFilter, NftEventFilter, NftMintFilter, NftTransferFilter,
	StxBurnFilter, StxEventFilter, StxMintFilter, StxTransferFilter, TenureChangeFilter,
};
pub use network::{Chain, Network};
pub use principal::Principal;
