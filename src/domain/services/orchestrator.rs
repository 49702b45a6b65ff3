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

use futures::stream::{self, StreamExt};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;
use url::Url;

use crate::domain::models::{BatchResult, JobOutcome};
use crate::domain::services::poller::Poller;
use crate::infrastructure::generation::GenerationClient;
use crate::utils::PollPolicy;

/// 转换错误类型
#[derive(Error, Debug)]
pub enum ConversionError {
    /// 请求字段缺失或格式非法，在任何远程调用之前被拒绝
    #[error("invalid request: {0}")]
    Validation(String),
}

/// 批量转换请求
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    /// 生成模型标识符
    pub model: String,
    /// 输入图片URL列表
    pub image_urls: Vec<String>,
    /// 提示词
    pub prompt_text: String,
}

impl ConversionRequest {
    /// 校验请求
    ///
    /// 任何任务启动之前执行：model和promptText非空，
    /// imageUrls非空且每项都是合法的绝对URL
    pub fn validate(&self) -> Result<(), ConversionError> {
        if self.model.trim().is_empty() {
            return Err(ConversionError::Validation("model cannot be empty".into()));
        }
        if self.prompt_text.trim().is_empty() {
            return Err(ConversionError::Validation(
                "promptText cannot be empty".into(),
            ));
        }
        if self.image_urls.is_empty() {
            return Err(ConversionError::Validation(
                "imageUrls cannot be empty".into(),
            ));
        }
        for url in &self.image_urls {
            Url::parse(url).map_err(|_| {
                ConversionError::Validation(format!("invalid image URL: {}", url))
            })?;
        }
        Ok(())
    }
}

/// 批量转换编排器
///
/// 为每个输入图片并发运行一个轮询器，等待所有任务到达终态后
/// 聚合为一个批次结果（完整的扇出/扇入屏障，无短路）。
///
/// 单个任务的缓慢或失败不会延迟或影响其他任务；
/// 并发度由配置的上限约束，避免对远程服务产生无界的出站连接。
pub struct ConversionOrchestrator {
    client: Arc<dyn GenerationClient>,
    policy: PollPolicy,
    max_concurrency: usize,
}

impl ConversionOrchestrator {
    /// 创建新的编排器实例
    ///
    /// # 参数
    ///
    /// * `client` - 显式注入的生成客户端，生命周期与进程绑定
    /// * `policy` - 单任务轮询策略
    /// * `max_concurrency` - 同时在途任务数上限
    pub fn new(
        client: Arc<dyn GenerationClient>,
        policy: PollPolicy,
        max_concurrency: usize,
    ) -> Self {
        Self {
            client,
            policy,
            max_concurrency: max_concurrency.max(1),
        }
    }

    /// 执行批量转换
    ///
    /// # 返回值
    ///
    /// * `Ok(BatchResult)` - 所有任务到达终态后的聚合结果（含失败项）
    /// * `Err(ConversionError)` - 校验失败，未启动任何任务
    pub async fn convert(
        &self,
        request: ConversionRequest,
    ) -> Result<BatchResult, ConversionError> {
        request.validate()?;

        let ConversionRequest {
            model,
            image_urls,
            prompt_text,
        } = request;
        let total = image_urls.len();

        info!(
            "Starting video conversion for {} images using model: {}",
            total, model
        );

        // 每个图片独立运行一个轮询器，buffer_unordered 限制同时在途数量,
        // 并收集全部结果后才返回（不因首个完成而短路）
        let outcomes: Vec<JobOutcome> = stream::iter(image_urls.into_iter().enumerate())
            .map(|(index, url)| {
                let poller = Poller::new(self.client.clone(), self.policy.clone());
                let model = model.clone();
                let prompt = prompt_text.clone();
                async move {
                    info!("Processing image #{} with URL: {}", index + 1, url);
                    poller.run(&model, &url, &prompt).await
                }
            })
            .buffer_unordered(self.max_concurrency)
            .collect()
            .await;

        let batch = BatchResult::new(outcomes, total);
        info!(
            "Video conversion completed. {}/{} videos successfully generated",
            batch.success_count(),
            batch.total_requested()
        );

        Ok(batch)
    }
}
