// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use metrics::counter;
use std::sync::Arc;
use tokio::time::sleep;
use tracing::{error, info, warn};

use crate::domain::models::{JobOutcome, TaskState};
use crate::infrastructure::generation::GenerationClient;
use crate::utils::PollPolicy;

/// 任务轮询器
///
/// 将单个图生视频任务从提交驱动到终态：先提交任务获得句柄，
/// 再按固定间隔查询状态，直到成功、失败或轮询预算耗尽。
///
/// 提交和轮询过程中的任何错误都在此处被捕获并转换为失败结果，
/// 单项失败绝不越过本组件的边界向上抛出。
pub struct Poller {
    client: Arc<dyn GenerationClient>,
    policy: PollPolicy,
}

impl Poller {
    /// 创建新的轮询器实例
    pub fn new(client: Arc<dyn GenerationClient>, policy: PollPolicy) -> Self {
        Self { client, policy }
    }

    /// 驱动一个任务到终态
    ///
    /// # 参数
    ///
    /// * `model` - 生成模型标识符
    /// * `image_url` - 输入图片URL
    /// * `prompt_text` - 提示词
    ///
    /// # 返回值
    ///
    /// 始终返回 `JobOutcome`，不返回错误
    pub async fn run(&self, model: &str, image_url: &str, prompt_text: &str) -> JobOutcome {
        counter!("generation_jobs_submitted_total").increment(1);

        let handle = match self.client.submit_job(model, image_url, prompt_text).await {
            Ok(handle) => handle,
            Err(e) => {
                error!("Failed to submit job for {}: {}", image_url, e);
                return self.fail(image_url, e.to_string());
            }
        };
        info!("Task created for {}, task id: {}", image_url, handle.task_id);

        let mut attempt: u32 = 0;
        while !self.policy.exhausted(attempt) {
            sleep(self.policy.interval).await;
            attempt += 1;

            let status = match self.client.retrieve_status(&handle.task_id).await {
                Ok(status) => status,
                Err(e) => {
                    error!("Failed to retrieve status for {}: {}", handle.task_id, e);
                    return self.fail(image_url, e.to_string());
                }
            };

            match status.state {
                TaskState::Succeeded => {
                    let video_url = status.output.first().cloned().unwrap_or_default();
                    if video_url.is_empty() {
                        // 远程服务偶见成功但输出列表为空，保留为空URL成功
                        warn!("Task {} succeeded with empty output list", handle.task_id);
                    }
                    info!("Task {} succeeded. Video URL: {}", handle.task_id, video_url);
                    counter!("generation_jobs_succeeded_total").increment(1);
                    return JobOutcome::Success {
                        task_id: handle.task_id,
                        video_url,
                    };
                }
                TaskState::Failed => {
                    let reason = status
                        .failure
                        .unwrap_or_else(|| "generation task failed".to_string());
                    warn!("Task {} failed: {}", handle.task_id, reason);
                    return self.fail(image_url, reason);
                }
                _ => {
                    if let Some(progress) = status.progress {
                        info!("Task {} progress: {:.0}%", handle.task_id, progress);
                    } else {
                        info!("Task {} status: {}", handle.task_id, status.state);
                    }
                }
            }
        }

        warn!(
            "Task {} did not reach a terminal state within {} polls",
            handle.task_id, self.policy.max_attempts
        );
        self.fail(
            image_url,
            format!(
                "timed out after {} status checks",
                self.policy.max_attempts
            ),
        )
    }

    fn fail(&self, image_url: &str, reason: String) -> JobOutcome {
        counter!("generation_jobs_failed_total").increment(1);
        JobOutcome::Failure {
            source_url: image_url.to_string(),
            reason,
        }
    }
}
