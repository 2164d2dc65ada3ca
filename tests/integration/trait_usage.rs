//! Code written against `ChainhooksApi` runs unchanged on a mock.

use crate::integration::mocks::MockChainhooksApi;

use chainhooks_client::{
	models::{Chainhook, ChainhookStatus, PaginatedChainhookResponse, PaginationOptions},
	services::chainhooks::{ChainhooksApi, ChainhooksError, RequestContext},
	utils::tests::ChainhookFixtureBuilder,
};
use mockall::predicate::*;

/// Pages through every registered chainhook
async fn list_all(
	api: &dyn ChainhooksApi,
	ctx: &RequestContext,
	page_size: u64,
) -> Result<Vec<Chainhook>, ChainhooksError> {
	let mut chainhooks = Vec::new();
	let mut offset = 0;
	loop {
		let page = api
			.get_chainhooks(ctx, Some(PaginationOptions::new(offset, page_size)))
			.await?;
		let received = page.chainhooks.len() as u64;
		chainhooks.extend(page.chainhooks);
		offset += received;
		if received == 0 || offset >= page.total {
			return Ok(chainhooks);
		}
	}
}

/// Re-enables every interrupted chainhook one by one
async fn resume_interrupted(
	api: &dyn ChainhooksApi,
	ctx: &RequestContext,
) -> Result<usize, ChainhooksError> {
	let interrupted: Vec<_> = list_all(api, ctx, 50)
		.await?
		.into_iter()
		.filter(|c| c.status.status == ChainhookStatus::Interrupted)
		.collect();

	for chainhook in &interrupted {
		api.enable_chainhook(ctx, &chainhook.uuid, true).await?;
	}
	Ok(interrupted.len())
}

fn page(total: u64, offset: u64, chainhooks: Vec<Chainhook>) -> PaginatedChainhookResponse {
	PaginatedChainhookResponse {
		total,
		offset,
		limit: 2,
		chainhooks,
	}
}

#[tokio::test]
async fn test_list_all_follows_pages() {
	let mut api = MockChainhooksApi::new();
	api.expect_get_chainhooks()
		.with(always(), eq(Some(PaginationOptions::new(0, 2))))
		.times(1)
		.returning(|_, _| {
			Ok(page(
				3,
				0,
				vec![
					ChainhookFixtureBuilder::new().uuid("a").build(),
					ChainhookFixtureBuilder::new().uuid("b").build(),
				],
			))
		});
	api.expect_get_chainhooks()
		.with(always(), eq(Some(PaginationOptions::new(2, 2))))
		.times(1)
		.returning(|_, _| {
			Ok(page(
				3,
				2,
				vec![ChainhookFixtureBuilder::new().uuid("c").build()],
			))
		});

	let all = list_all(&api, &RequestContext::background(), 2)
		.await
		.unwrap();

	let uuids: Vec<_> = all.iter().map(|c| c.uuid.as_str()).collect();
	assert_eq!(uuids, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_resume_interrupted_enables_only_interrupted() {
	let mut api = MockChainhooksApi::new();
	api.expect_get_chainhooks().times(1).returning(|_, _| {
		Ok(page(
			2,
			0,
			vec![
				ChainhookFixtureBuilder::new()
					.uuid("broken")
					.status(ChainhookStatus::Interrupted)
					.enabled(false)
					.build(),
				ChainhookFixtureBuilder::new()
					.uuid("healthy")
					.status(ChainhookStatus::Streaming)
					.build(),
			],
		))
	});
	api.expect_enable_chainhook()
		.with(always(), eq("broken"), eq(true))
		.times(1)
		.returning(|_, _, _| Ok(()));

	let resumed = resume_interrupted(&api, &RequestContext::background())
		.await
		.unwrap();

	assert_eq!(resumed, 1);
}

#[tokio::test]
async fn test_errors_propagate_through_trait_objects() {
	let mut api = MockChainhooksApi::new();
	api.expect_get_chainhooks()
		.returning(|_, _| Err(ChainhooksError::config_error("no credentials")));
	api.expect_enable_chainhook().never();

	let err = resume_interrupted(&api, &RequestContext::background())
		.await
		.unwrap_err();

	assert!(err.is_config_error());
	assert_eq!(err.to_string(), "config error: no credentials");
}
