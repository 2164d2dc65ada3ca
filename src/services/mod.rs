//! Core services of the client.
//!
//! - `builder`: Fluent construction of chainhook definitions
//! - `chainhooks`: HTTP client of the Chainhooks API

pub mod builder;
pub mod chainhooks;
