//! Typed async client for the Chainhooks webhook-registration API.
//!
//! A chainhook is a server-side subscription: a set of event filters over the
//! Stacks blockchain plus a webhook URL that receives matching events. This
//! crate builds validated chainhook definitions and manages their lifecycle
//! over HTTP.
//!
//! # Architecture
//! The crate is built around three components:
//! - Models: Definitions, event filters, options and API envelopes
//! - Builders: Fluent, validated construction of definitions and options
//! - Client: One HTTP round trip per operation with a structured error taxonomy
//!
//! # Flow
//! 1. Build a definition with [`services::builder::ChainhookBuilder`]
//! 2. Register it through [`services::chainhooks::ChainhooksApi`]
//! 3. Inspect the returned [`models::Chainhook`] or classify the
//!    [`services::chainhooks::ChainhooksError`]
//!
//! ```no_run
//! use chainhooks_client::{
//! 	models::{Network, Principal},
//! 	services::{
//! 		builder::ChainhookBuilder,
//! 		chainhooks::{ChainhooksApi, ChainhooksClient, RequestContext},
//! 	},
//! };
//!
//! # async fn run() -> Result<(), chainhooks_client::services::chainhooks::ChainhooksError> {
//! let mut client = ChainhooksClient::new(Network::Testnet.base_url())?;
//! client.set_api_key("my-api-key");
//!
//! let definition = ChainhookBuilder::new("stx-transfers", Network::Testnet)
//! 	.with_webhook_url("https://example.com/webhook")
//! 	.add_stx_transfer(Some(Principal::standard("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM")), None, None)
//! 	.build()?;
//!
//! let chainhook = client
//! 	.register_chainhook(&RequestContext::background(), &definition)
//! 	.await?;
//! println!("registered {}", chainhook.uuid);
//! # Ok(())
//! # }
//! ```

pub mod models;
pub mod services;
pub mod utils;

pub use services::{
	builder::{ChainhookBuilder, ChainhookOptionsBuilder},
	chainhooks::{
		ChainhooksApi, ChainhooksClient, ChainhooksError, ClientConfig, RequestContext,
	},
};
