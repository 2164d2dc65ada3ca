use chainhooks_client::{
	models::{BulkEnableChainhooksRequest, Network},
	services::{
		builder::ChainhookBuilder,
		chainhooks::{ChainhooksApi, ChainhooksClient, ChainhooksError, RequestContext},
	},
};
use mockito::Matcher;
use serde_json::json;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

fn create_client(server: &mockito::ServerGuard) -> ChainhooksClient {
	ChainhooksClient::new(server.url()).unwrap()
}

async fn get_status_with_response(status: usize, body: &str) -> ChainhooksError {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("GET", "/chainhooks")
		.with_status(status)
		.with_body(body)
		.create_async()
		.await;

	let err = create_client(&server)
		.get_status(&RequestContext::background())
		.await
		.unwrap_err();
	mock.assert();
	err
}

#[tokio::test]
async fn test_status_classification() {
	let unauthorized = get_status_with_response(401, r#"{"message":"invalid api key"}"#).await;
	assert!(unauthorized.is_unauthorized());
	assert!(unauthorized.is_client_error());
	assert!(!unauthorized.is_server_error());
	assert_eq!(unauthorized.http_status_code(), Some(401));

	let not_found = get_status_with_response(404, "").await;
	assert!(not_found.is_not_found());
	assert_eq!(not_found.as_http_error().unwrap().message, "");

	let unavailable = get_status_with_response(503, "upstream unavailable").await;
	assert!(unavailable.is_server_error());
	assert!(!unavailable.is_client_error());
	assert_eq!(
		unavailable.as_http_error().unwrap().message,
		"upstream unavailable"
	);
}

#[tokio::test]
async fn test_message_takes_precedence_over_error_field() {
	let err = get_status_with_response(400, r#"{"error":"Bad Request","message":"invalid filter"}"#)
		.await;
	assert_eq!(err.as_http_error().unwrap().message, "invalid filter");
	assert!(err.to_string().ends_with(": status 400: invalid filter"));
}

#[tokio::test]
async fn test_http_error_serializes_to_structured_json() {
	let err = get_status_with_response(422, r#"{"message":"bad definition"}"#).await;
	let http_error = err.as_http_error().unwrap();
	let value = serde_json::to_value(http_error).unwrap();

	assert_eq!(value["status_code"], json!(422));
	assert_eq!(value["method"], json!("GET"));
	assert_eq!(value["body"], json!("bad definition"));
	assert!(value["url"].as_str().unwrap().ends_with("/chainhooks"));
	assert_eq!(value["error"], json!(http_error.to_string()));
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("DELETE", "/chainhooks/me/hook-1")
		.with_status(502)
		.expect(1)
		.create_async()
		.await;

	let err = create_client(&server)
		.delete_chainhook(&RequestContext::background(), "hook-1")
		.await
		.unwrap_err();

	assert!(err.is_server_error());
	mock.assert();
}

#[tokio::test]
async fn test_decode_error_is_distinct_from_http_error() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("GET", "/chainhooks/me/hook-1")
		.with_status(200)
		.with_body(r#"{"uuid": 42}"#)
		.create_async()
		.await;

	let err = create_client(&server)
		.get_chainhook(&RequestContext::background(), "hook-1")
		.await
		.unwrap_err();

	assert!(err.is_decode_error());
	assert!(!err.is_http_error());
	assert_eq!(err.http_status_code(), None);
	assert!(err.to_string().contains("failed to decode response body"));
	mock.assert();
}

#[tokio::test]
async fn test_validation_failures_never_reach_the_wire() {
	let mut server = mockito::Server::new_async().await;
	let get_mock = server
		.mock("GET", Matcher::Any)
		.expect(0)
		.create_async()
		.await;
	let patch_mock = server
		.mock("PATCH", Matcher::Any)
		.expect(0)
		.create_async()
		.await;

	let client = create_client(&server);
	let ctx = RequestContext::background();

	let err = client.get_chainhook(&ctx, "").await.unwrap_err();
	assert_eq!(
		err.to_string(),
		"validation error on field 'uuid': uuid cannot be empty"
	);

	let err = client
		.bulk_enable_chainhooks(&ctx, &BulkEnableChainhooksRequest::default())
		.await
		.unwrap_err();
	assert_eq!(
		err.to_string(),
		"validation error on field 'request': at least one filter (uuids, webhook_url, or statuses) must be provided"
	);

	get_mock.assert();
	patch_mock.assert();
}

#[tokio::test]
async fn test_builder_failure_precedes_any_request() {
	let err = ChainhookBuilder::new("hook", Network::Mainnet)
		.with_webhook_url("https://example.com/hook")
		.build()
		.unwrap_err();

	assert!(err.is_validation_error());
	assert_eq!(err.as_validation_error().unwrap().field, "filters");
}

#[tokio::test]
async fn test_client_timeout_is_transport_timeout() {
	// Accepts connections but never answers
	let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();
	let server = tokio::spawn(async move {
		let mut sockets = Vec::new();
		while let Ok((socket, _)) = listener.accept().await {
			sockets.push(socket);
		}
	});

	let mut client = ChainhooksClient::new(format!("http://{}", addr)).unwrap();
	client.set_timeout(Duration::from_millis(100));

	let err = client
		.get_status(&RequestContext::background())
		.await
		.unwrap_err();

	assert!(err.is_http_error());
	assert!(err.is_timeout());
	assert_eq!(err.http_status_code(), None);
	server.abort();
}

#[tokio::test]
async fn test_cancelled_context_is_reported_as_cancelled() {
	let token = CancellationToken::new();
	token.cancel();

	let client = ChainhooksClient::new("http://127.0.0.1:9").unwrap();
	let err = client
		.get_status(&RequestContext::background().with_cancellation(token))
		.await
		.unwrap_err();

	assert!(err.is_cancelled());
	assert!(!err.is_timeout());
}
