// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 转换端点集成测试模块
///
/// 通过完整的axum路由验证HTTP契约：字段缺失的400、
/// 部分成功的200、全部失败的500
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use std::sync::Arc;

use reelrs::domain::services::ConversionOrchestrator;
use reelrs::infrastructure::nft::NftIndexer;
use reelrs::presentation::routes;
use reelrs::utils::PollPolicy;

use crate::unit::helpers::mock_generation::{MockGenerationClient, ScriptedJob, Step};

/// 不会被触达的索引桩，转换端点测试不需要它
struct UnusedIndexer;

#[async_trait::async_trait]
impl NftIndexer for UnusedIndexer {
    async fn fetch_nfts(
        &self,
        _wallet_address: &str,
    ) -> Result<Vec<reelrs::domain::models::Nft>, reelrs::infrastructure::nft::IndexerError> {
        panic!("indexer should not be called");
    }
}

fn server_with(client: MockGenerationClient) -> TestServer {
    let orchestrator = Arc::new(ConversionOrchestrator::new(
        Arc::new(client),
        PollPolicy::fast(),
        5,
    ));
    let indexer: Arc<dyn NftIndexer> = Arc::new(UnusedIndexer);
    TestServer::new(routes::routes(orchestrator, indexer)).unwrap()
}

#[tokio::test]
async fn test_missing_fields_return_400() {
    let server = server_with(MockGenerationClient::unreachable());

    for body in [
        json!({}),
        json!({ "model": "m1" }),
        json!({ "model": "m1", "imageUrls": ["https://x/1.png"] }),
        json!({ "imageUrls": ["https://x/1.png"], "promptText": "p" }),
    ] {
        let response = server.post("/convert-to-video").json(&body).await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let payload: Value = response.json();
        assert_eq!(
            payload["error"],
            "Missing required fields: model, imageUrls, promptText"
        );
    }
}

#[tokio::test]
async fn test_empty_image_urls_return_400() {
    let server = server_with(MockGenerationClient::unreachable());

    let response = server
        .post("/convert-to-video")
        .json(&json!({ "model": "m1", "imageUrls": [], "promptText": "p" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_partial_success_returns_successful_subset() {
    let client = MockGenerationClient::new(vec![
        (
            "https://x/1.png",
            ScriptedJob::new(
                "task-1",
                vec![
                    Step::running(50.0),
                    Step::succeeded(&["https://out/1.mp4"]),
                ],
            ),
        ),
        (
            "https://x/2.png",
            ScriptedJob::new("task-2", vec![Step::failed("boom")]),
        ),
    ]);
    let server = server_with(client);

    let response = server
        .post("/convert-to-video")
        .json(&json!({
            "model": "m1",
            "imageUrls": ["https://x/1.png", "https://x/2.png"],
            "promptText": "p",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let payload: Value = response.json();
    assert_eq!(payload["success"], true);
    assert_eq!(
        payload["results"],
        json!([{ "id": "task-1", "videoUrl": "https://out/1.mp4" }])
    );
}

#[tokio::test]
async fn test_all_failed_returns_500_with_generic_message() {
    let client = MockGenerationClient::new(vec![
        ("https://x/1.png", ScriptedJob::submit_error()),
        (
            "https://x/2.png",
            ScriptedJob::new("task-2", vec![Step::failed("boom")]),
        ),
    ]);
    let server = server_with(client);

    let response = server
        .post("/convert-to-video")
        .json(&json!({
            "model": "m1",
            "imageUrls": ["https://x/1.png", "https://x/2.png"],
            "promptText": "p",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload: Value = response.json();
    assert_eq!(payload["error"], "No videos were successfully generated.");
    assert!(payload.get("results").is_none());
}

#[tokio::test]
async fn test_success_with_empty_output_yields_empty_video_url() {
    let client = MockGenerationClient::new(vec![(
        "https://x/1.png",
        ScriptedJob::new("task-1", vec![Step::succeeded(&[])]),
    )]);
    let server = server_with(client);

    let response = server
        .post("/convert-to-video")
        .json(&json!({
            "model": "m1",
            "imageUrls": ["https://x/1.png"],
            "promptText": "p",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let payload: Value = response.json();
    assert_eq!(payload["results"], json!([{ "id": "task-1", "videoUrl": "" }]));
}
