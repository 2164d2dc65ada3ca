//! Chainhooks API client.
//!
//! Provides the HTTP client of the Chainhooks API and everything a call
//! needs around it:
//!
//! - `ChainhooksApi` trait and its `ChainhooksClient` implementation
//! - Client configuration
//! - Per-call cancellation and deadline
//! - Error taxonomy of failed calls

mod client;
mod config;
mod context;
mod error;

pub use client::{ChainhooksApi, ChainhooksClient};
pub use config::ClientConfig;
pub use context::RequestContext;
pub use error::{
	ChainhooksError, ConfigError, DecodeError, HttpError, TransportFailure, ValidationError,
};
