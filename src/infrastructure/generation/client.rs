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
use thiserror::Error;

use crate::domain::models::{JobHandle, JobStatus};

/// 生成客户端错误类型
#[derive(Error, Debug)]
pub enum GenerationError {
    /// 传输层失败（连接、超时、TLS等）
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// 任务提交被远程服务拒绝
    #[error("Submission rejected: {status} - {body}")]
    Submission { status: u16, body: String },
    /// 状态查询被远程服务拒绝
    #[error("Status query rejected: {status} - {body}")]
    Query { status: u16, body: String },
    /// 响应格式不符合预期
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
}

impl GenerationError {
    /// 判断错误是否可重试
    pub fn is_retryable(&self) -> bool {
        match self {
            GenerationError::Transport(e) => {
                e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
            }
            GenerationError::Submission { status, .. } | GenerationError::Query { status, .. } => {
                *status >= 500 || *status == 429
            }
            GenerationError::InvalidResponse(_) => false,
        }
    }
}

/// 生成客户端特质
///
/// 封装对外部图生视频服务的两个操作：提交任务、按任务ID查询状态。
/// 实现必须可被多个在途任务并发使用（共享连接池）。
/// 对已到达终态的任务重复查询状态必须返回相同的终态，且无副作用。
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// 提交一个图生视频任务
    async fn submit_job(
        &self,
        model: &str,
        image_url: &str,
        prompt_text: &str,
    ) -> Result<JobHandle, GenerationError>;

    /// 按任务ID查询当前状态
    async fn retrieve_status(&self, task_id: &str) -> Result<JobStatus, GenerationError>;

    /// 客户端名称
    fn name(&self) -> &'static str;
}
