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

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::settings::RunwaySettings;
use crate::domain::models::{JobHandle, JobStatus, TaskState};
use crate::infrastructure::generation::client::{GenerationClient, GenerationError};

/// Runway版本请求头，标识所用的远程API修订版
const API_VERSION_HEADER: &str = "X-Runway-Version";

/// 任务提交请求体
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageToVideoRequest<'a> {
    model: &'a str,
    prompt_image: &'a str,
    prompt_text: &'a str,
}

/// 任务提交响应体
#[derive(Debug, Deserialize)]
struct ImageToVideoResponse {
    id: String,
}

/// 任务详情响应体
///
/// 远程服务以0-1的比例报告进度，对外统一换算为百分比
#[derive(Debug, Deserialize)]
struct TaskDetailResponse {
    id: String,
    status: TaskState,
    progress: Option<f32>,
    #[serde(default)]
    output: Vec<String>,
    failure: Option<String>,
}

/// Runway生成服务客户端
///
/// # 配置
///
/// 通过 `runway` 配置段（或 `REELRS__RUNWAY__*` 环境变量）提供：
/// - `api_key` - API密钥
/// - `base_url` - API基础URL
/// - `api_version` - API版本号
pub struct RunwayClient {
    client: Client,
    api_key: String,
    api_version: String,
    base_url: String,
}

impl RunwayClient {
    /// 创建新的Runway客户端实例
    ///
    /// 内部持有一个共享的reqwest连接池，可安全地被多个在途任务并发使用
    pub fn new(settings: &RunwaySettings) -> Self {
        Self::with_base_url(
            settings.base_url.clone(),
            settings.api_key.clone(),
            settings.api_version.clone(),
        )
    }

    /// 使用显式基础URL创建客户端（测试中指向模拟服务器）
    pub fn with_base_url(base_url: String, api_key: String, api_version: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_version,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl GenerationClient for RunwayClient {
    async fn submit_job(
        &self,
        model: &str,
        image_url: &str,
        prompt_text: &str,
    ) -> Result<JobHandle, GenerationError> {
        let body = ImageToVideoRequest {
            model,
            prompt_image: image_url,
            prompt_text,
        };

        let url = format!("{}/v1/image_to_video", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header(API_VERSION_HEADER, &self.api_version)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Submission { status, body });
        }

        let created: ImageToVideoResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        debug!("Submitted generation task {} for {}", created.id, image_url);

        Ok(JobHandle {
            task_id: created.id,
            source_url: image_url.to_string(),
        })
    }

    async fn retrieve_status(&self, task_id: &str) -> Result<JobStatus, GenerationError> {
        let url = format!("{}/v1/tasks/{}", self.base_url, task_id);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .header(API_VERSION_HEADER, &self.api_version)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Query { status, body });
        }

        let detail: TaskDetailResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        Ok(JobStatus {
            task_id: detail.id,
            state: detail.status,
            progress: detail.progress.map(|p| p * 100.0),
            output: detail.output,
            failure: detail.failure,
        })
    }

    fn name(&self) -> &'static str {
        "runway"
    }
}
