use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::models::Chainhook;

/// Offset/limit window of a list request
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PaginationOptions {
	pub offset: u64,
	pub limit: u64,
}

impl PaginationOptions {
	pub fn new(offset: u64, limit: u64) -> Self {
		Self { offset, limit }
	}

	/// Query string of the window, `offset=<n>&limit=<n>`
	pub fn to_query_string(&self) -> String {
		form_urlencoded::Serializer::new(String::new())
			.append_pair("offset", &self.offset.to_string())
			.append_pair("limit", &self.limit.to_string())
			.finish()
	}
}

/// One page of registered chainhooks
///
/// `total` is authoritative on the server side; it is not checked against the
/// length of `chainhooks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PaginatedChainhookResponse {
	pub total: u64,
	pub offset: u64,
	pub limit: u64,
	#[serde(default)]
	pub chainhooks: Vec<Chainhook>,
}
