//! Chainhooks client error types and classification.
//!
//! Four disjoint failure kinds, never collapsed into one:
//!
//! - [`HttpError`]: a `>= 400` response, or a request that never produced a
//!   usable response (serialization, construction, network, cancellation)
//! - [`ValidationError`]: missing required input, detected before any I/O
//! - [`ConfigError`]: client setup misuse
//! - [`DecodeError`]: a successful response whose body does not match the
//!   expected shape

use reqwest::{header::HeaderMap, Method, StatusCode};
use serde::{ser::SerializeMap, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Why a request produced no usable HTTP response
#[derive(Debug, Error)]
pub enum TransportFailure {
	#[error("failed to serialize request body: {0}")]
	Serialize(#[source] serde_json::Error),
	#[error("failed to build request: {0}")]
	Build(#[source] reqwest::Error),
	#[error("failed to perform request: {0}")]
	Request(#[source] reqwest::Error),
	#[error("failed to read response body: {0}")]
	ReadBody(#[source] reqwest::Error),
	#[error("request cancelled")]
	Cancelled,
	#[error("deadline exceeded")]
	DeadlineExceeded,
}

/// HTTP-level failure of a single round trip
///
/// Either `status` is set (the service answered with `>= 400`) or `failure`
/// carries the underlying cause.
#[derive(Debug)]
pub struct HttpError {
	pub status: Option<StatusCode>,
	pub method: Method,
	pub url: String,
	pub headers: HeaderMap,
	/// `message` or `error` field of a JSON body, else the raw body text
	pub message: String,
	pub raw_body: Vec<u8>,
	pub failure: Option<TransportFailure>,
}

impl HttpError {
	/// Builds the error of a `>= 400` response from its fully read body
	pub fn from_response(
		method: Method,
		url: impl Into<String>,
		status: StatusCode,
		headers: HeaderMap,
		raw_body: Vec<u8>,
	) -> Self {
		Self {
			status: Some(status),
			method,
			url: url.into(),
			headers,
			message: extract_error_message(&raw_body),
			raw_body,
			failure: None,
		}
	}

	/// Builds the error of a request that never produced a usable response
	pub fn transport(method: Method, url: impl Into<String>, failure: TransportFailure) -> Self {
		Self {
			status: None,
			method,
			url: url.into(),
			headers: HeaderMap::new(),
			message: String::new(),
			raw_body: Vec::new(),
			failure: Some(failure),
		}
	}

	pub fn status_code(&self) -> Option<u16> {
		self.status.map(|status| status.as_u16())
	}

	pub fn is_not_found(&self) -> bool {
		self.status == Some(StatusCode::NOT_FOUND)
	}

	pub fn is_unauthorized(&self) -> bool {
		self.status == Some(StatusCode::UNAUTHORIZED)
	}

	pub fn is_forbidden(&self) -> bool {
		self.status == Some(StatusCode::FORBIDDEN)
	}

	pub fn is_client_error(&self) -> bool {
		self.status.is_some_and(|status| status.is_client_error())
	}

	pub fn is_server_error(&self) -> bool {
		self.status.is_some_and(|status| status.is_server_error())
	}

	/// Whether the caller's cancellation token fired
	pub fn is_cancelled(&self) -> bool {
		matches!(self.failure, Some(TransportFailure::Cancelled))
	}

	/// Whether the caller's deadline or the client timeout elapsed
	pub fn is_timeout(&self) -> bool {
		match &self.failure {
			Some(TransportFailure::DeadlineExceeded) => true,
			Some(TransportFailure::Request(e)) | Some(TransportFailure::ReadBody(e)) => {
				e.is_timeout()
			}
			_ => false,
		}
	}
}

impl fmt::Display for HttpError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.method, self.url)?;
		if let Some(status) = self.status {
			write!(f, ": status {}", status.as_u16())?;
		}
		if let Some(failure) = &self.failure {
			write!(f, ": {}", failure)
		} else if !self.message.is_empty() {
			write!(f, ": {}", self.message)
		} else {
			Ok(())
		}
	}
}

impl std::error::Error for HttpError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		self.failure
			.as_ref()
			.map(|failure| failure as &(dyn std::error::Error + 'static))
	}
}

impl Serialize for HttpError {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(5))?;
		map.serialize_entry("error", &self.to_string())?;
		map.serialize_entry("status_code", &self.status_code())?;
		map.serialize_entry("url", &self.url)?;
		map.serialize_entry("method", self.method.as_str())?;
		map.serialize_entry("body", &self.message)?;
		map.end()
	}
}

/// Picks the human message out of an error body
///
/// A JSON object's `message` string wins, then its `error` string. Anything
/// else, including non-JSON bodies, yields the raw body text.
fn extract_error_message(body: &[u8]) -> String {
	if body.is_empty() {
		return String::new();
	}

	if let Ok(serde_json::Value::Object(fields)) = serde_json::from_slice(body) {
		for key in ["message", "error"] {
			if let Some(serde_json::Value::String(message)) = fields.get(key) {
				return message.clone();
			}
		}
	}

	String::from_utf8_lossy(body).into_owned()
}

/// Missing or empty required input, detected client-side
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation error on field '{field}': {reason}")]
pub struct ValidationError {
	pub field: String,
	pub reason: String,
}

impl ValidationError {
	pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
		Self {
			field: field.into(),
			reason: reason.into(),
		}
	}
}

/// Client setup misuse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("config error: {message}")]
pub struct ConfigError {
	pub message: String,
}

impl ConfigError {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}
}

/// A successful response whose body did not decode into the expected type
#[derive(Debug, Error)]
#[error("{method} {url}: status {}: failed to decode response body: {source}", .status.as_u16())]
pub struct DecodeError {
	pub method: Method,
	pub url: String,
	pub status: StatusCode,
	#[source]
	pub source: serde_json::Error,
}

/// Every failure surfaced by the Chainhooks client
#[derive(Debug, Error)]
pub enum ChainhooksError {
	#[error(transparent)]
	Http(Box<HttpError>),
	#[error(transparent)]
	Validation(#[from] ValidationError),
	#[error(transparent)]
	Config(#[from] ConfigError),
	#[error(transparent)]
	Decode(Box<DecodeError>),
}

impl ChainhooksError {
	/// Creates a new validation error on `field`
	pub fn validation_error(field: impl Into<String>, reason: impl Into<String>) -> Self {
		Self::Validation(ValidationError::new(field, reason))
	}

	/// Creates a new configuration error
	pub fn config_error(message: impl Into<String>) -> Self {
		Self::Config(ConfigError::new(message))
	}

	pub fn as_http_error(&self) -> Option<&HttpError> {
		match self {
			Self::Http(e) => Some(&**e),
			_ => None,
		}
	}

	pub fn as_validation_error(&self) -> Option<&ValidationError> {
		match self {
			Self::Validation(e) => Some(e),
			_ => None,
		}
	}

	/// Status code of an HTTP error, if the service answered
	pub fn http_status_code(&self) -> Option<u16> {
		self.as_http_error().and_then(HttpError::status_code)
	}

	pub fn is_http_error(&self) -> bool {
		matches!(self, Self::Http(_))
	}

	pub fn is_validation_error(&self) -> bool {
		matches!(self, Self::Validation(_))
	}

	pub fn is_config_error(&self) -> bool {
		matches!(self, Self::Config(_))
	}

	pub fn is_decode_error(&self) -> bool {
		matches!(self, Self::Decode(_))
	}

	pub fn is_not_found(&self) -> bool {
		self.as_http_error().is_some_and(HttpError::is_not_found)
	}

	pub fn is_unauthorized(&self) -> bool {
		self.as_http_error().is_some_and(HttpError::is_unauthorized)
	}

	pub fn is_forbidden(&self) -> bool {
		self.as_http_error().is_some_and(HttpError::is_forbidden)
	}

	pub fn is_client_error(&self) -> bool {
		self.as_http_error().is_some_and(HttpError::is_client_error)
	}

	pub fn is_server_error(&self) -> bool {
		self.as_http_error().is_some_and(HttpError::is_server_error)
	}

	pub fn is_cancelled(&self) -> bool {
		self.as_http_error().is_some_and(HttpError::is_cancelled)
	}

	pub fn is_timeout(&self) -> bool {
		self.as_http_error().is_some_and(HttpError::is_timeout)
	}
}

impl From<HttpError> for ChainhooksError {
	fn from(error: HttpError) -> Self {
		Self::Http(Box::new(error))
	}
}

impl From<DecodeError> for ChainhooksError {
	fn from(error: DecodeError) -> Self {
		Self::Decode(Box::new(error))
	}
}
