//! Request and response envelopes of the Chainhooks API endpoints.

mod bulk;
mod pagination;

pub use bulk::{BulkEnableChainhooksRequest, BulkEnableChainhooksResponse};
pub use pagination::{PaginatedChainhookResponse, PaginationOptions};

use serde::{Deserialize, Serialize};

/// Body of `PATCH /chainhooks/me/{uuid}/enabled`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EnableChainhookRequest {
	pub enabled: bool,
}

/// Body of `POST /chainhooks/me/{uuid}/evaluate`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EvaluateChainhookRequest {
	pub block_height: u64,
}

/// Shared secret the service uses to sign webhook deliveries
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConsumerSecretResponse {
	pub secret: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiStatusResponse {
	pub status: String,
	pub version: String,
}
