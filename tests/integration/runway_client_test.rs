// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Runway客户端集成测试模块
///
/// 使用wiremock模拟远程生成API，验证请求格式、认证头
/// 和响应映射
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use reelrs::domain::models::TaskState;
use reelrs::infrastructure::generation::{GenerationClient, GenerationError, RunwayClient};

fn client(server: &MockServer) -> RunwayClient {
    RunwayClient::with_base_url(
        server.uri(),
        "test-key".to_string(),
        "2024-11-06".to_string(),
    )
}

#[tokio::test]
async fn test_submit_job_sends_expected_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/image_to_video"))
        .and(header("Authorization", "Bearer test-key"))
        .and(header("X-Runway-Version", "2024-11-06"))
        .and(body_partial_json(json!({
            "model": "gen3a_turbo",
            "promptImage": "https://x/1.png",
            "promptText": "make it move",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "task-abc" })))
        .expect(1)
        .mount(&server)
        .await;

    let handle = client(&server)
        .submit_job("gen3a_turbo", "https://x/1.png", "make it move")
        .await
        .unwrap();

    assert_eq!(handle.task_id, "task-abc");
    assert_eq!(handle.source_url, "https://x/1.png");
}

#[tokio::test]
async fn test_submit_job_non_success_is_submission_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/image_to_video"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let err = client(&server)
        .submit_job("m1", "https://x/1.png", "p")
        .await
        .unwrap_err();

    match err {
        GenerationError::Submission { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("invalid api key"));
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn test_retrieve_status_maps_running_progress_to_percent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/tasks/task-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "task-abc",
            "status": "RUNNING",
            "progress": 0.5,
        })))
        .mount(&server)
        .await;

    let status = client(&server).retrieve_status("task-abc").await.unwrap();

    assert_eq!(status.task_id, "task-abc");
    assert_eq!(status.state, TaskState::Running);
    assert_eq!(status.progress, Some(50.0));
    assert!(status.output.is_empty());
    assert!(!status.is_terminal());
}

#[tokio::test]
async fn test_retrieve_status_terminal_is_idempotent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/tasks/task-done"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "task-done",
            "status": "SUCCEEDED",
            "output": ["https://out/1.mp4"],
        })))
        .expect(2)
        .mount(&server)
        .await;

    let c = client(&server);
    let first = c.retrieve_status("task-done").await.unwrap();
    let second = c.retrieve_status("task-done").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.state, TaskState::Succeeded);
    assert_eq!(first.output, vec!["https://out/1.mp4".to_string()]);
}

#[tokio::test]
async fn test_retrieve_status_failed_carries_reason() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/tasks/task-bad"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "task-bad",
            "status": "FAILED",
            "failure": "content policy violation",
        })))
        .mount(&server)
        .await;

    let status = client(&server).retrieve_status("task-bad").await.unwrap();

    assert_eq!(status.state, TaskState::Failed);
    assert_eq!(status.failure.as_deref(), Some("content policy violation"));
}
