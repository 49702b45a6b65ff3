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

use serde::{Deserialize, Serialize};

use crate::domain::models::{BatchResult, JobOutcome};

/// 单项转换成功结果
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionOutcomeDto {
    /// 远程任务标识符
    pub id: String,
    /// 生成的视频URL
    pub video_url: String,
}

/// 批量转换响应数据传输对象
///
/// 兼容原有线上契约：仅下发成功项，失败项在核心层已记录日志
#[derive(Debug, Deserialize, Serialize)]
pub struct ConvertResponseDto {
    pub success: bool,
    pub results: Vec<ConversionOutcomeDto>,
}

impl From<&BatchResult> for ConvertResponseDto {
    fn from(batch: &BatchResult) -> Self {
        let results = batch
            .successes()
            .filter_map(|outcome| match outcome {
                JobOutcome::Success { task_id, video_url } => Some(ConversionOutcomeDto {
                    id: task_id.clone(),
                    video_url: video_url.clone(),
                }),
                JobOutcome::Failure { .. } => None,
            })
            .collect();

        Self {
            success: true,
            results,
        }
    }
}
