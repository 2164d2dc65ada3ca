//! Logging utilities for applications embedding the client
//!
//! The client itself only emits `tracing` spans and events; it never installs
//! a subscriber. These helpers install a `tracing_subscriber` registry with an
//! environment-driven filter and a compact fmt layer.
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Directive used when `RUST_LOG` is unset
pub const DEFAULT_LOG_DIRECTIVE: &str = "chainhooks_client=info";

/// Setup logging to stdout
///
/// Honors `RUST_LOG`, falling back to [`DEFAULT_LOG_DIRECTIVE`].
pub fn setup_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
	setup_logging_with_writer(std::io::stdout, DEFAULT_LOG_DIRECTIVE)
}

/// Setup logging with a custom writer and fallback directive
///
/// # Arguments
/// * `writer` - Destination of formatted events
/// * `default_directive` - Filter used when `RUST_LOG` is unset or invalid
///
/// # Returns
/// * `Result<(), Box<dyn Error>>` - Error if a global subscriber is already set
pub fn setup_logging_with_writer<W>(
	writer: W,
	default_directive: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

	tracing_subscriber::registry()
		.with(filter)
		.with(
			fmt::layer().with_writer(writer).event_format(
				fmt::format()
					.with_level(true)
					.with_target(true)
					.with_thread_ids(false)
					.with_ansi(false)
					.compact(),
			),
		)
		.try_init()?;
	Ok(())
}
