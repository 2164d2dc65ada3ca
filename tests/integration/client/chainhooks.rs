use chainhooks_client::{
	models::{
		BulkEnableChainhooksRequest, ChainhookStatus, Network, PaginationOptions, Principal,
	},
	services::{
		builder::ChainhookBuilder,
		chainhooks::{ChainhooksApi, ChainhooksClient, RequestContext},
	},
	utils::tests::ChainhookFixtureBuilder,
};
use mockito::Matcher;
use serde_json::json;
use tracing_test::traced_test;

const API_KEY: &str = "test-api-key";

fn create_client(server: &mockito::ServerGuard) -> ChainhooksClient {
	let mut client = ChainhooksClient::new(server.url()).unwrap();
	client.set_api_key(API_KEY);
	client
}

#[tokio::test]
async fn test_register_chainhook_success() {
	let mut server = mockito::Server::new_async().await;
	let definition = ChainhookBuilder::new("stx-watch", Network::Testnet)
		.with_webhook_url("https://hooks.example.com/stx")
		.add_stx_transfer(
			Some(Principal::standard("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM")),
			None,
			Some("1000000".to_string()),
		)
		.with_decode_clarity_values(true)
		.build()
		.unwrap();

	let mock = server
		.mock("POST", "/chainhooks/me")
		.match_header("x-api-key", API_KEY)
		.match_body(Matcher::Json(json!({
			"name": "stx-watch",
			"version": "1",
			"chain": "stacks",
			"network": "testnet",
			"filters": {
				"events": [{
					"type": "stx_transfer",
					"sender": { "standard": "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM" },
					"amount": "1000000"
				}]
			},
			"options": { "decode_clarity_values": true },
			"action": { "type": "http_post", "url": "https://hooks.example.com/stx" }
		})))
		.with_status(200)
		.with_body(
			json!({
				"uuid": "11111111-2222-3333-4444-555555555555",
				"definition": definition,
				"status": {
					"status": "new",
					"enabled": true,
					"created_at": 1_700_000_000_000i64,
					"last_evaluated_at": null,
					"last_evaluated_block_height": null,
					"last_occurrence_at": null,
					"last_occurrence_block_height": null,
					"evaluated_block_count": 0,
					"occurrence_count": 0
				}
			})
			.to_string(),
		)
		.create_async()
		.await;

	let client = create_client(&server);
	let chainhook = client
		.register_chainhook(&RequestContext::background(), &definition)
		.await
		.unwrap();

	assert_eq!(chainhook.uuid, "11111111-2222-3333-4444-555555555555");
	assert_eq!(chainhook.definition, definition);
	assert_eq!(chainhook.status.status, ChainhookStatus::New);
	assert!(chainhook.status.enabled);
	mock.assert();
}

#[tokio::test]
async fn test_update_chainhook_uses_patch() {
	let mut server = mockito::Server::new_async().await;
	let updated = ChainhookFixtureBuilder::new()
		.uuid("hook-1")
		.name("renamed")
		.build();

	let mock = server
		.mock("PATCH", "/chainhooks/me/hook-1")
		.match_body(Matcher::PartialJson(json!({ "name": "renamed" })))
		.with_status(200)
		.with_body(serde_json::to_string(&updated).unwrap())
		.create_async()
		.await;

	let client = create_client(&server);
	let chainhook = client
		.update_chainhook(&RequestContext::background(), "hook-1", &updated.definition)
		.await
		.unwrap();

	assert_eq!(chainhook, updated);
	mock.assert();
}

#[tokio::test]
async fn test_get_chainhooks_with_pagination() {
	let mut server = mockito::Server::new_async().await;
	let first = ChainhookFixtureBuilder::new().uuid("hook-1").build();
	let second = ChainhookFixtureBuilder::new()
		.uuid("hook-2")
		.status(ChainhookStatus::Streaming)
		.build();

	let mock = server
		.mock("GET", "/chainhooks/me")
		.match_query(Matcher::AllOf(vec![
			Matcher::UrlEncoded("offset".into(), "20".into()),
			Matcher::UrlEncoded("limit".into(), "10".into()),
		]))
		.with_status(200)
		.with_body(
			json!({
				"total": 22,
				"offset": 20,
				"limit": 10,
				"chainhooks": [first, second]
			})
			.to_string(),
		)
		.create_async()
		.await;

	let client = create_client(&server);
	let page = client
		.get_chainhooks(
			&RequestContext::background(),
			Some(PaginationOptions::new(20, 10)),
		)
		.await
		.unwrap();

	assert_eq!(page.total, 22);
	assert_eq!(page.offset, 20);
	assert_eq!(page.limit, 10);
	assert_eq!(page.chainhooks, vec![first, second]);
	mock.assert();
}

#[tokio::test]
async fn test_get_chainhooks_without_pagination() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("GET", "/chainhooks/me")
		.with_status(200)
		.with_body(r#"{"total":0,"offset":0,"limit":20,"chainhooks":[]}"#)
		.create_async()
		.await;

	let client = create_client(&server);
	let page = client
		.get_chainhooks(&RequestContext::background(), None)
		.await
		.unwrap();

	assert_eq!(page.total, 0);
	assert!(page.chainhooks.is_empty());
	mock.assert();
}

#[tokio::test]
async fn test_get_chainhook_success() {
	let mut server = mockito::Server::new_async().await;
	let expected = ChainhookFixtureBuilder::new()
		.uuid("hook-1")
		.network(Network::Mainnet)
		.build();

	let mock = server
		.mock("GET", "/chainhooks/me/hook-1")
		.with_status(200)
		.with_body(serde_json::to_string(&expected).unwrap())
		.create_async()
		.await;

	let client = create_client(&server);
	let chainhook = client
		.get_chainhook(&RequestContext::background(), "hook-1")
		.await
		.unwrap();

	assert_eq!(chainhook, expected);
	mock.assert();
}

#[tokio::test]
async fn test_get_chainhook_no_content_returns_default() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("GET", "/chainhooks/me/hook-1")
		.with_status(204)
		.create_async()
		.await;

	let client = create_client(&server);
	let chainhook = client
		.get_chainhook(&RequestContext::background(), "hook-1")
		.await
		.unwrap();

	assert!(chainhook.uuid.is_empty());
	mock.assert();
}

#[tokio::test]
async fn test_enable_chainhook_twice_is_idempotent() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("PATCH", "/chainhooks/me/hook-1/enabled")
		.match_body(Matcher::Json(json!({ "enabled": true })))
		.with_status(204)
		.expect(2)
		.create_async()
		.await;

	let client = create_client(&server);
	let ctx = RequestContext::background();
	client.enable_chainhook(&ctx, "hook-1", true).await.unwrap();
	client.enable_chainhook(&ctx, "hook-1", true).await.unwrap();

	mock.assert();
}

#[tokio::test]
async fn test_bulk_enable_by_uuids() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("PATCH", "/chainhooks/me/enabled")
		.match_body(Matcher::Json(json!({
			"enabled": false,
			"uuids": ["hook-1", "hook-2"]
		})))
		.with_status(200)
		.with_body(r#"{"updated_count":2}"#)
		.create_async()
		.await;

	let client = create_client(&server);
	let response = client
		.bulk_enable_chainhooks(
			&RequestContext::background(),
			&BulkEnableChainhooksRequest::by_uuids(false, ["hook-1", "hook-2"]),
		)
		.await
		.unwrap();

	assert_eq!(response.updated_count, 2);
	mock.assert();
}

#[tokio::test]
async fn test_bulk_enable_by_status() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("PATCH", "/chainhooks/me/enabled")
		.match_body(Matcher::Json(json!({
			"enabled": true,
			"statuses": ["interrupted"]
		})))
		.with_status(200)
		.with_body(r#"{"updated_count":7}"#)
		.create_async()
		.await;

	let client = create_client(&server);
	let response = client
		.bulk_enable_chainhooks(
			&RequestContext::background(),
			&BulkEnableChainhooksRequest::by_status(true, [ChainhookStatus::Interrupted]),
		)
		.await
		.unwrap();

	assert_eq!(response.updated_count, 7);
	mock.assert();
}

#[tokio::test]
async fn test_delete_chainhook_success() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("DELETE", "/chainhooks/me/hook-1")
		.with_status(204)
		.create_async()
		.await;

	let client = create_client(&server);
	client
		.delete_chainhook(&RequestContext::background(), "hook-1")
		.await
		.unwrap();

	mock.assert();
}

#[tokio::test]
async fn test_evaluate_chainhook_sends_block_height() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("POST", "/chainhooks/me/hook-1/evaluate")
		.match_body(Matcher::Json(json!({ "block_height": 150000 })))
		.with_status(202)
		.with_body(r#"{"queued":true}"#)
		.create_async()
		.await;

	let client = create_client(&server);
	client
		.evaluate_chainhook(&RequestContext::background(), "hook-1", 150_000)
		.await
		.unwrap();

	mock.assert();
}

#[tokio::test]
async fn test_uuid_is_percent_encoded_in_path() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("DELETE", "/chainhooks/me/a%2Fb")
		.with_status(204)
		.create_async()
		.await;

	let client = create_client(&server);
	client
		.delete_chainhook(&RequestContext::background(), "a/b")
		.await
		.unwrap();

	mock.assert();
}

#[tokio::test]
async fn test_get_status() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("GET", "/chainhooks")
		.with_status(200)
		.with_body(r#"{"status":"ready","version":"2.1.0"}"#)
		.create_async()
		.await;

	let client = create_client(&server);
	let status = client
		.get_status(&RequestContext::background())
		.await
		.unwrap();

	assert_eq!(status.status, "ready");
	assert_eq!(status.version, "2.1.0");
	mock.assert();
}

#[tokio::test]
#[traced_test]
async fn test_request_emits_debug_events() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("GET", "/chainhooks")
		.with_status(200)
		.with_body(r#"{"status":"ready","version":"1"}"#)
		.create_async()
		.await;

	let client = create_client(&server);
	client
		.get_status(&RequestContext::background())
		.await
		.unwrap();

	assert!(logs_contain("sending request"));
	assert!(logs_contain("received response"));
	mock.assert();
}
