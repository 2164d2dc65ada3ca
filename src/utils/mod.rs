//! Utility modules for common functionality.
//!
//! This module provides various utility functions and types that are used across
//! the crate. Currently includes:
//!
//! - constants: Base URLs, endpoint paths and header names
//! - logging: Logging utilities
//! - tests: Builders of test fixtures

pub mod constants;
pub mod logging;
pub mod tests;

pub use constants::*;
