//! Chainhooks API client implementation.
//!
//! This module provides the HTTP client for the Chainhooks API. Every public
//! operation validates its input, then performs one round trip:
//! serialize the body, send it with the configured headers, classify the
//! status, and decode the result.
//!
//! The client does not retry, cache, or log failures; every error is returned
//! to the caller unmodified.

use async_trait::async_trait;
use reqwest::{
	header::{
		HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT,
	},
	Method, Request, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use tracing::{debug, debug_span, instrument, Instrument};

use crate::{
	models::{
		ApiStatusResponse, BulkEnableChainhooksRequest, BulkEnableChainhooksResponse, Chainhook,
		ChainhookDefinition, ConsumerSecretResponse, EnableChainhookRequest,
		EvaluateChainhookRequest, PaginatedChainhookResponse, PaginationOptions,
	},
	services::chainhooks::{
		config::ClientConfig,
		context::RequestContext,
		error::{ChainhooksError, DecodeError, HttpError, TransportFailure},
	},
	utils::constants::{
		chainhook_enabled_path, chainhook_evaluate_path, chainhook_path, CONTENT_TYPE_JSON,
		ENDPOINT_BULK_ENABLED, ENDPOINT_CHAINHOOKS, ENDPOINT_CONSUMER_SECRET, ENDPOINT_STATUS,
		HEADER_API_KEY, MAINNET_BASE_URL,
	},
};

/// Body-less requests
const NO_BODY: Option<&()> = None;

/// Operations of the Chainhooks API
///
/// Implemented by [`ChainhooksClient`]; callers depending on the trait can
/// substitute their own implementation in tests.
#[async_trait]
pub trait ChainhooksApi: Send + Sync {
	/// Registers a new chainhook
	///
	/// `POST /chainhooks/me`
	async fn register_chainhook(
		&self,
		ctx: &RequestContext,
		definition: &ChainhookDefinition,
	) -> Result<Chainhook, ChainhooksError>;

	/// Replaces the definition of an existing chainhook
	///
	/// `PATCH /chainhooks/me/{uuid}`
	///
	/// # Errors
	/// - Validation error on `uuid` if it is empty
	async fn update_chainhook(
		&self,
		ctx: &RequestContext,
		uuid: &str,
		definition: &ChainhookDefinition,
	) -> Result<Chainhook, ChainhooksError>;

	/// Lists registered chainhooks, optionally windowed
	///
	/// `GET /chainhooks/me?offset=<n>&limit=<n>`
	async fn get_chainhooks(
		&self,
		ctx: &RequestContext,
		pagination: Option<PaginationOptions>,
	) -> Result<PaginatedChainhookResponse, ChainhooksError>;

	/// Fetches one chainhook
	///
	/// `GET /chainhooks/me/{uuid}`
	///
	/// # Errors
	/// - Validation error on `uuid` if it is empty
	async fn get_chainhook(&self, ctx: &RequestContext, uuid: &str)
		-> Result<Chainhook, ChainhooksError>;

	/// Enables or disables one chainhook
	///
	/// `PATCH /chainhooks/me/{uuid}/enabled`
	///
	/// # Errors
	/// - Validation error on `uuid` if it is empty
	async fn enable_chainhook(
		&self,
		ctx: &RequestContext,
		uuid: &str,
		enabled: bool,
	) -> Result<(), ChainhooksError>;

	/// Enables or disables every chainhook matching the request's selectors
	///
	/// `PATCH /chainhooks/me/enabled`
	///
	/// # Errors
	/// - Validation error on `request` if no selector is set
	async fn bulk_enable_chainhooks(
		&self,
		ctx: &RequestContext,
		request: &BulkEnableChainhooksRequest,
	) -> Result<BulkEnableChainhooksResponse, ChainhooksError>;

	/// Deletes one chainhook
	///
	/// `DELETE /chainhooks/me/{uuid}`
	///
	/// # Errors
	/// - Validation error on `uuid` if it is empty
	async fn delete_chainhook(&self, ctx: &RequestContext, uuid: &str)
		-> Result<(), ChainhooksError>;

	/// `GET /chainhooks/me/secret`
	async fn get_consumer_secret(
		&self,
		ctx: &RequestContext,
	) -> Result<ConsumerSecretResponse, ChainhooksError>;

	/// Generates a new consumer secret, invalidating the previous one
	///
	/// `POST /chainhooks/me/secret`
	async fn rotate_consumer_secret(
		&self,
		ctx: &RequestContext,
	) -> Result<ConsumerSecretResponse, ChainhooksError>;

	/// `DELETE /chainhooks/me/secret`
	async fn delete_consumer_secret(&self, ctx: &RequestContext) -> Result<(), ChainhooksError>;

	/// Evaluates a chainhook against the block at `block_height`
	///
	/// `POST /chainhooks/me/{uuid}/evaluate`
	///
	/// # Errors
	/// - Validation error on `uuid` if it is empty
	async fn evaluate_chainhook(
		&self,
		ctx: &RequestContext,
		uuid: &str,
		block_height: u64,
	) -> Result<(), ChainhooksError>;

	/// `GET /chainhooks`
	async fn get_status(&self, ctx: &RequestContext) -> Result<ApiStatusResponse, ChainhooksError>;
}

/// Successful (`< 400`, non-204) response of a round trip
struct SuccessResponse {
	method: Method,
	url: String,
	status: StatusCode,
	body: Vec<u8>,
}

/// HTTP client of the Chainhooks API
///
/// Cloning is cheap and clones share the underlying connection pool. The
/// setters take `&mut self`, so configuration cannot change while a request
/// borrowed from the same client is in flight.
#[derive(Clone, Debug)]
pub struct ChainhooksClient {
	base_url: String,
	api_key: Option<String>,
	jwt: Option<String>,
	http_client: reqwest::Client,
	user_agent: String,
	timeout: Duration,
	headers: HeaderMap,
}

impl ChainhooksClient {
	/// Creates a client for `base_url` with default settings
	///
	/// # Arguments
	/// * `base_url` - API root, e.g. [`crate::models::Network::base_url`]
	///
	/// # Returns
	/// * `Result<Self, ChainhooksError>` - Config error if the HTTP client cannot be built
	pub fn new(base_url: impl Into<String>) -> Result<Self, ChainhooksError> {
		Self::with_config(ClientConfig::new(base_url))
	}

	/// Creates a client from a full configuration
	///
	/// An empty base URL falls back to mainnet; a trailing `/` is stripped.
	pub fn with_config(config: ClientConfig) -> Result<Self, ChainhooksError> {
		let http_client = match config.http_client {
			Some(client) => client,
			None => reqwest::Client::builder()
				.pool_idle_timeout(Duration::from_secs(90))
				.connect_timeout(Duration::from_secs(10))
				.build()
				.map_err(|e| {
					ChainhooksError::config_error(format!("failed to create HTTP client: {}", e))
				})?,
		};

		let base_url = if config.base_url.is_empty() {
			MAINNET_BASE_URL.to_string()
		} else {
			config
				.base_url
				.strip_suffix('/')
				.unwrap_or(&config.base_url)
				.to_string()
		};

		let mut headers = HeaderMap::new();
		headers.insert(ACCEPT, HeaderValue::from_static(CONTENT_TYPE_JSON));
		headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));

		Ok(Self {
			base_url,
			api_key: config.api_key,
			jwt: config.jwt,
			http_client,
			user_agent: config.user_agent,
			timeout: config.timeout,
			headers,
		})
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	pub fn timeout(&self) -> Duration {
		self.timeout
	}

	pub fn set_api_key(&mut self, api_key: impl Into<String>) {
		self.api_key = Some(api_key.into());
	}

	pub fn set_jwt(&mut self, jwt: impl Into<String>) {
		self.jwt = Some(jwt.into());
	}

	pub fn set_timeout(&mut self, timeout: Duration) {
		self.timeout = timeout;
	}

	pub fn set_user_agent(&mut self, user_agent: impl Into<String>) {
		self.user_agent = user_agent.into();
	}

	/// Adds or replaces a header sent with every request
	///
	/// # Errors
	/// - Config error if `name` or `value` is not a valid header
	pub fn set_header(&mut self, name: &str, value: &str) -> Result<(), ChainhooksError> {
		let header_name = HeaderName::from_bytes(name.as_bytes())
			.map_err(|_| ChainhooksError::config_error(format!("invalid header name: {}", name)))?;
		self.headers.insert(header_name, header_value(name, value)?);
		Ok(())
	}

	/// Headers of one request
	///
	/// Custom headers come first; the user agent and credentials replace any
	/// custom header of the same name.
	fn request_headers(&self) -> Result<HeaderMap, ChainhooksError> {
		let mut headers = self.headers.clone();
		headers.insert(USER_AGENT, header_value(USER_AGENT.as_str(), &self.user_agent)?);

		if let Some(jwt) = &self.jwt {
			let mut value = header_value(AUTHORIZATION.as_str(), &format!("Bearer {}", jwt))?;
			value.set_sensitive(true);
			headers.insert(AUTHORIZATION, value);
		}
		if let Some(api_key) = &self.api_key {
			let mut value = header_value(HEADER_API_KEY, api_key)?;
			value.set_sensitive(true);
			headers.insert(HEADER_API_KEY, value);
		}

		Ok(headers)
	}

	fn build_request(
		&self,
		method: Method,
		url: &str,
		headers: HeaderMap,
		payload: Option<Vec<u8>>,
	) -> Result<Request, reqwest::Error> {
		let mut builder = self
			.http_client
			.request(method, url)
			.headers(headers)
			.timeout(self.timeout);

		if let Some(payload) = payload {
			builder = builder.body(payload);
		}

		builder.build()
	}

	/// Performs one round trip and classifies the response
	///
	/// # Returns
	/// * `Ok(None)` - The service answered `204 No Content`
	/// * `Ok(Some(response))` - Any other status below 400
	/// * `Err(HttpError)` - Status `>= 400`, or no usable response
	async fn execute<B>(
		&self,
		ctx: &RequestContext,
		method: Method,
		path: &str,
		body: Option<&B>,
	) -> Result<Option<SuccessResponse>, ChainhooksError>
	where
		B: Serialize + ?Sized + Sync,
	{
		let url = format!("{}{}", self.base_url, path);
		let span = debug_span!("chainhooks.request", method = %method, path = %path);

		async move {
			let transport_error =
				|failure| HttpError::transport(method.clone(), url.as_str(), failure);

			let payload = body
				.map(serde_json::to_vec)
				.transpose()
				.map_err(|e| transport_error(TransportFailure::Serialize(e)))?;

			let headers = self.request_headers()?;
			let request = self
				.build_request(method.clone(), &url, headers, payload)
				.map_err(|e| transport_error(TransportFailure::Build(e)))?;

			debug!("sending request");
			let (status, headers, raw_body) = ctx
				.run(async {
					let response = self
						.http_client
						.execute(request)
						.await
						.map_err(TransportFailure::Request)?;
					let status = response.status();
					let headers = response.headers().clone();
					let raw_body = response.bytes().await.map_err(TransportFailure::ReadBody)?;
					Ok::<_, TransportFailure>((status, headers, raw_body.to_vec()))
				})
				.await
				.and_then(|result| result)
				.map_err(transport_error)?;
			debug!(status = status.as_u16(), "received response");

			if status.as_u16() >= 400 {
				return Err(
					HttpError::from_response(method, url, status, headers, raw_body).into(),
				);
			}

			if status == StatusCode::NO_CONTENT {
				return Ok(None);
			}

			Ok(Some(SuccessResponse {
				method,
				url,
				status,
				body: raw_body,
			}))
		}
		.instrument(span)
		.await
	}

	/// Round trip decoding the response body
	///
	/// # Returns
	/// * `Ok(None)` - `204 No Content` or an empty body; nothing is decoded
	/// * `Ok(Some(result))` - The decoded body
	/// * `Err(DecodeError)` - The body does not match `T`
	pub(crate) async fn send_request<B, T>(
		&self,
		ctx: &RequestContext,
		method: Method,
		path: &str,
		body: Option<&B>,
	) -> Result<Option<T>, ChainhooksError>
	where
		B: Serialize + ?Sized + Sync,
		T: DeserializeOwned,
	{
		let Some(response) = self.execute(ctx, method, path, body).await? else {
			return Ok(None);
		};

		if response.body.is_empty() {
			return Ok(None);
		}

		serde_json::from_slice(&response.body)
			.map(Some)
			.map_err(|source| {
				DecodeError {
					method: response.method,
					url: response.url,
					status: response.status,
					source,
				}
				.into()
			})
	}

	/// Round trip ignoring any response body
	async fn send_request_without_result<B>(
		&self,
		ctx: &RequestContext,
		method: Method,
		path: &str,
		body: Option<&B>,
	) -> Result<(), ChainhooksError>
	where
		B: Serialize + ?Sized + Sync,
	{
		self.execute(ctx, method, path, body).await.map(|_| ())
	}
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, ChainhooksError> {
	HeaderValue::from_str(value).map_err(|_| {
		ChainhooksError::config_error(format!("invalid header value for key: {}", name))
	})
}

fn ensure_uuid(uuid: &str) -> Result<(), ChainhooksError> {
	if uuid.is_empty() {
		return Err(ChainhooksError::validation_error(
			"uuid",
			"uuid cannot be empty",
		));
	}
	Ok(())
}

#[async_trait]
impl ChainhooksApi for ChainhooksClient {
	#[instrument(skip_all, fields(name = %definition.name))]
	async fn register_chainhook(
		&self,
		ctx: &RequestContext,
		definition: &ChainhookDefinition,
	) -> Result<Chainhook, ChainhooksError> {
		let chainhook = self
			.send_request(ctx, Method::POST, ENDPOINT_CHAINHOOKS, Some(definition))
			.await?;
		Ok(chainhook.unwrap_or_default())
	}

	#[instrument(skip(self, ctx, definition))]
	async fn update_chainhook(
		&self,
		ctx: &RequestContext,
		uuid: &str,
		definition: &ChainhookDefinition,
	) -> Result<Chainhook, ChainhooksError> {
		ensure_uuid(uuid)?;

		let chainhook = self
			.send_request(ctx, Method::PATCH, &chainhook_path(uuid), Some(definition))
			.await?;
		Ok(chainhook.unwrap_or_default())
	}

	#[instrument(skip(self, ctx))]
	async fn get_chainhooks(
		&self,
		ctx: &RequestContext,
		pagination: Option<PaginationOptions>,
	) -> Result<PaginatedChainhookResponse, ChainhooksError> {
		let path = match pagination {
			Some(pagination) => format!("{}?{}", ENDPOINT_CHAINHOOKS, pagination.to_query_string()),
			None => ENDPOINT_CHAINHOOKS.to_string(),
		};

		let page = self.send_request(ctx, Method::GET, &path, NO_BODY).await?;
		Ok(page.unwrap_or_default())
	}

	#[instrument(skip(self, ctx))]
	async fn get_chainhook(
		&self,
		ctx: &RequestContext,
		uuid: &str,
	) -> Result<Chainhook, ChainhooksError> {
		ensure_uuid(uuid)?;

		let chainhook = self
			.send_request(ctx, Method::GET, &chainhook_path(uuid), NO_BODY)
			.await?;
		Ok(chainhook.unwrap_or_default())
	}

	#[instrument(skip(self, ctx))]
	async fn enable_chainhook(
		&self,
		ctx: &RequestContext,
		uuid: &str,
		enabled: bool,
	) -> Result<(), ChainhooksError> {
		ensure_uuid(uuid)?;

		let body = EnableChainhookRequest { enabled };
		self.send_request_without_result(
			ctx,
			Method::PATCH,
			&chainhook_enabled_path(uuid),
			Some(&body),
		)
		.await
	}

	#[instrument(skip_all, fields(enabled = request.enabled))]
	async fn bulk_enable_chainhooks(
		&self,
		ctx: &RequestContext,
		request: &BulkEnableChainhooksRequest,
	) -> Result<BulkEnableChainhooksResponse, ChainhooksError> {
		if !request.has_selector() {
			return Err(ChainhooksError::validation_error(
				"request",
				"at least one filter (uuids, webhook_url, or statuses) must be provided",
			));
		}

		let response = self
			.send_request(ctx, Method::PATCH, ENDPOINT_BULK_ENABLED, Some(request))
			.await?;
		Ok(response.unwrap_or_default())
	}

	#[instrument(skip(self, ctx))]
	async fn delete_chainhook(
		&self,
		ctx: &RequestContext,
		uuid: &str,
	) -> Result<(), ChainhooksError> {
		ensure_uuid(uuid)?;

		self.send_request_without_result(ctx, Method::DELETE, &chainhook_path(uuid), NO_BODY)
			.await
	}

	#[instrument(skip_all)]
	async fn get_consumer_secret(
		&self,
		ctx: &RequestContext,
	) -> Result<ConsumerSecretResponse, ChainhooksError> {
		let secret = self
			.send_request(ctx, Method::GET, ENDPOINT_CONSUMER_SECRET, NO_BODY)
			.await?;
		Ok(secret.unwrap_or_default())
	}

	#[instrument(skip_all)]
	async fn rotate_consumer_secret(
		&self,
		ctx: &RequestContext,
	) -> Result<ConsumerSecretResponse, ChainhooksError> {
		let secret = self
			.send_request(ctx, Method::POST, ENDPOINT_CONSUMER_SECRET, NO_BODY)
			.await?;
		Ok(secret.unwrap_or_default())
	}

	#[instrument(skip_all)]
	async fn delete_consumer_secret(&self, ctx: &RequestContext) -> Result<(), ChainhooksError> {
		self.send_request_without_result(ctx, Method::DELETE, ENDPOINT_CONSUMER_SECRET, NO_BODY)
			.await
	}

	#[instrument(skip(self, ctx))]
	async fn evaluate_chainhook(
		&self,
		ctx: &RequestContext,
		uuid: &str,
		block_height: u64,
	) -> Result<(), ChainhooksError> {
		ensure_uuid(uuid)?;

		let body = EvaluateChainhookRequest { block_height };
		self.send_request_without_result(
			ctx,
			Method::POST,
			&chainhook_evaluate_path(uuid),
			Some(&body),
		)
		.await
	}

	#[instrument(skip_all)]
	async fn get_status(&self, ctx: &RequestContext) -> Result<ApiStatusResponse, ChainhooksError> {
		let status = self
			.send_request(ctx, Method::GET, ENDPOINT_STATUS, NO_BODY)
			.await?;
		Ok(status.unwrap_or_default())
	}
}
