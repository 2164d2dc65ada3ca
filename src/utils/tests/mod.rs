//! Test helper utilities
//!
//! This module contains test helper utilities for the crate.
//!
//! - `builders`: Test helper utilities for creating test instances of models

pub mod builders {
	pub mod chainhook;

	pub use chainhook::ChainhookFixtureBuilder;
}

pub use builders::*;
