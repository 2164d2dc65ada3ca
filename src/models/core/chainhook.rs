use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::ChainhookDefinition;

/// Lifecycle status assigned by the service
///
/// Progresses `new` -> `streaming` -> `expired` | `interrupted`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainhookStatus {
	#[default]
	New,
	Streaming,
	Expired,
	Interrupted,
}

impl fmt::Display for ChainhookStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let status = match self {
			ChainhookStatus::New => "new",
			ChainhookStatus::Streaming => "streaming",
			ChainhookStatus::Expired => "expired",
			ChainhookStatus::Interrupted => "interrupted",
		};
		f.write_str(status)
	}
}

/// Status record of a registered chainhook
///
/// Timestamps are unix milliseconds. The `last_*` fields stay `None` until the
/// first evaluation or occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChainhookStatusInfo {
	pub status: ChainhookStatus,
	pub enabled: bool,
	pub created_at: i64,
	pub last_evaluated_at: Option<i64>,
	pub last_evaluated_block_height: Option<u64>,
	pub last_occurrence_at: Option<i64>,
	pub last_occurrence_block_height: Option<u64>,
	#[serde(default)]
	pub evaluated_block_count: u64,
	#[serde(default)]
	pub occurrence_count: u64,
}

impl ChainhookStatusInfo {
	pub fn created_at_datetime(&self) -> Option<DateTime<Utc>> {
		DateTime::from_timestamp_millis(self.created_at)
	}

	pub fn last_evaluated_at_datetime(&self) -> Option<DateTime<Utc>> {
		self.last_evaluated_at
			.and_then(DateTime::from_timestamp_millis)
	}

	pub fn last_occurrence_at_datetime(&self) -> Option<DateTime<Utc>> {
		self.last_occurrence_at
			.and_then(DateTime::from_timestamp_millis)
	}
}

/// A chainhook as registered with the service
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Chainhook {
	pub uuid: String,
	pub definition: ChainhookDefinition,
	pub status: ChainhookStatusInfo,
}
