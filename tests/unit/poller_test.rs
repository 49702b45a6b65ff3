// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 轮询器测试模块
///
/// 验证单任务从提交到终态的驱动逻辑：错误转换为失败结果、
/// 轮询预算耗尽、以及失败原因的保留
use std::sync::atomic::Ordering;
use std::sync::Arc;

use reelrs::domain::models::JobOutcome;
use reelrs::domain::services::Poller;
use reelrs::utils::PollPolicy;

use super::helpers::mock_generation::{MockGenerationClient, ScriptedJob, Step};

#[tokio::test(start_paused = true)]
async fn test_submission_error_becomes_failure_marker() {
    let client = Arc::new(MockGenerationClient::new(vec![(
        "https://x/1.png",
        ScriptedJob::submit_error(),
    )]));
    let poller = Poller::new(client.clone(), PollPolicy::standard());

    let outcome = poller.run("m1", "https://x/1.png", "p").await;

    match outcome {
        JobOutcome::Failure { source_url, reason } => {
            assert_eq!(source_url, "https://x/1.png");
            assert!(reason.contains("Submission rejected"), "reason: {}", reason);
        }
        _ => panic!("expected failure"),
    }
    // 提交失败后不应再查询状态
    assert_eq!(client.status_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn test_query_error_becomes_failure_marker() {
    let client = Arc::new(MockGenerationClient::new(vec![(
        "https://x/1.png",
        ScriptedJob::query_error("task-1"),
    )]));
    let poller = Poller::new(client, PollPolicy::standard());

    let outcome = poller.run("m1", "https://x/1.png", "p").await;

    match outcome {
        JobOutcome::Failure { reason, .. } => {
            assert!(reason.contains("Status query rejected"), "reason: {}", reason);
        }
        _ => panic!("expected failure"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_poll_budget_exhaustion_is_timeout_failure() {
    let client = Arc::new(MockGenerationClient::new(vec![(
        "https://x/1.png",
        ScriptedJob::never_terminal("task-1"),
    )]));
    let policy = PollPolicy::new(5, 3);
    let poller = Poller::new(client.clone(), policy);

    let outcome = poller.run("m1", "https://x/1.png", "p").await;

    match outcome {
        JobOutcome::Failure { reason, .. } => {
            assert!(reason.contains("timed out after 3"), "reason: {}", reason);
        }
        _ => panic!("expected failure"),
    }
    // 正好消耗完预算，不多不少
    assert_eq!(client.status_calls.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn test_remote_failure_reason_is_preserved() {
    let client = Arc::new(MockGenerationClient::new(vec![(
        "https://x/1.png",
        ScriptedJob::new(
            "task-1",
            vec![Step::running(10.0), Step::failed("input image too large")],
        ),
    )]));
    let poller = Poller::new(client, PollPolicy::standard());

    let outcome = poller.run("m1", "https://x/1.png", "p").await;

    assert_eq!(
        outcome,
        JobOutcome::Failure {
            source_url: "https://x/1.png".to_string(),
            reason: "input image too large".to_string(),
        }
    );
}

#[tokio::test(start_paused = true)]
async fn test_first_output_url_is_taken() {
    let client = Arc::new(MockGenerationClient::new(vec![(
        "https://x/1.png",
        ScriptedJob::new(
            "task-1",
            vec![Step::succeeded(&[
                "https://out/first.mp4",
                "https://out/second.mp4",
            ])],
        ),
    )]));
    let poller = Poller::new(client, PollPolicy::standard());

    let outcome = poller.run("m1", "https://x/1.png", "p").await;

    assert_eq!(
        outcome,
        JobOutcome::Success {
            task_id: "task-1".to_string(),
            video_url: "https://out/first.mp4".to_string(),
        }
    );
}

#[tokio::test(start_paused = true)]
async fn test_non_terminal_states_keep_polling() {
    let client = Arc::new(MockGenerationClient::new(vec![(
        "https://x/1.png",
        ScriptedJob::new(
            "task-1",
            vec![
                Step::pending(),
                Step::running(40.0),
                Step::running(90.0),
                Step::succeeded(&["https://out/1.mp4"]),
            ],
        ),
    )]));
    let poller = Poller::new(client.clone(), PollPolicy::standard());

    let outcome = poller.run("m1", "https://x/1.png", "p").await;

    assert!(outcome.is_success());
    assert_eq!(client.status_calls.load(Ordering::SeqCst), 4);
}
