//! Per-call cancellation and deadline.
//!
//! Every API operation takes a [`RequestContext`]. The client never retries
//! and never cancels on its own; the context is the only way a caller bounds a
//! call beyond the client-wide timeout.

use std::{future::Future, time::Duration};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::services::chainhooks::error::TransportFailure;

/// Caller-owned cancellation token and deadline of one or more calls
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
	cancel: Option<CancellationToken>,
	deadline: Option<Instant>,
}

impl RequestContext {
	/// A context that is never cancelled and has no deadline
	pub fn background() -> Self {
		Self::default()
	}

	/// Cancels in-flight calls when `token` is cancelled
	pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
		self.cancel = Some(token);
		self
	}

	/// Fails calls still running at `deadline`
	pub fn with_deadline(mut self, deadline: Instant) -> Self {
		self.deadline = Some(deadline);
		self
	}

	/// Fails calls still running `timeout` from now
	pub fn with_timeout(self, timeout: Duration) -> Self {
		self.with_deadline(Instant::now() + timeout)
	}

	pub fn deadline(&self) -> Option<Instant> {
		self.deadline
	}

	pub fn is_cancelled(&self) -> bool {
		self.cancel
			.as_ref()
			.is_some_and(CancellationToken::is_cancelled)
	}

	fn is_expired(&self) -> bool {
		self.deadline
			.is_some_and(|deadline| Instant::now() >= deadline)
	}

	/// Drives `future` unless the context is, or becomes, done
	///
	/// A context already cancelled or past its deadline fails before
	/// `future` is polled.
	pub(crate) async fn run<F>(&self, future: F) -> Result<F::Output, TransportFailure>
	where
		F: Future,
	{
		if self.is_cancelled() {
			return Err(TransportFailure::Cancelled);
		}
		if self.is_expired() {
			return Err(TransportFailure::DeadlineExceeded);
		}

		let guarded = async {
			match &self.cancel {
				Some(token) => tokio::select! {
					biased;
					_ = token.cancelled() => Err(TransportFailure::Cancelled),
					output = future => Ok(output),
				},
				None => Ok(future.await),
			}
		};

		match self.deadline {
			Some(deadline) => tokio::time::timeout_at(deadline, guarded)
				.await
				.unwrap_or(Err(TransportFailure::DeadlineExceeded)),
			None => guarded.await,
		}
	}
}
